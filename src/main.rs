use std::io::{self, Write as _};
use std::path::Path;

use tracing_subscriber::EnvFilter;

use cinerec::catalog;
use cinerec::config::Config;
use cinerec::error::AppError;
use cinerec::models::GenreCatalog;
use cinerec::presenter;
use cinerec::services::{self, SearchEngine, SearchOutcome};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::from_env()?;

    println!("=============================================");
    println!("=    WELCOME TO THE MOVIE RECOMMENDER       =");
    println!("=============================================");

    print_startup_overview(&config);

    loop {
        println!();
        println!("What would you like to do next?");
        println!("1. Search for a movie");
        println!("2. Get a movie recommendation");
        println!("3. Exit");

        let Some(choice) = prompt("Your choice: ")? else {
            break;
        };
        match choice.trim() {
            "1" => run_search(&config)?,
            "2" => run_recommendation(&config)?,
            "3" => {
                println!("Goodbye! Enjoy your movie.");
                break;
            }
            _ => println!("Invalid option. Please try again."),
        }
    }

    Ok(())
}

/// Best movies per genre, shown once at startup
fn print_startup_overview(config: &Config) {
    let catalogs = loaded_catalogs(config);
    if catalogs.is_empty() {
        println!("No movie data available.");
        return;
    }

    let overview = services::overview(&catalogs, config.overview_top);
    if overview.is_empty() {
        println!("No recommendations could be computed.");
        return;
    }

    println!("\nBest recommended movies:");
    presenter::render_overview(&overview, config.overview_top);
}

fn run_search(config: &Config) -> anyhow::Result<()> {
    let catalogs = loaded_catalogs(config);
    if catalogs.is_empty() {
        println!("No movie data available.");
        return Ok(());
    }

    let Some(query) = prompt("\nEnter the movie name to search: ")? else {
        return Ok(());
    };

    let unified = catalog::unified(&catalogs);
    let engine = SearchEngine::new(&unified, config.fuzzy_limit, config.fuzzy_cutoff);

    let outcome = match engine.search(&query) {
        SearchOutcome::Candidates(candidates) => {
            println!(
                "\nNo exact match found for '{}', but here are some similar movies:",
                query.trim()
            );
            for (i, candidate) in candidates.iter().enumerate() {
                println!("{}. {}", i + 1, candidate);
            }
            match prompt("\nEnter the number of the movie you meant (or press Enter to exit): ")? {
                Some(selection) => engine.resolve(&candidates, &selection),
                None => SearchOutcome::Aborted,
            }
        }
        outcome => outcome,
    };

    match outcome {
        SearchOutcome::Found(results) => {
            println!("\nFound movie(s):");
            presenter::render_movies(&results.matches);
            if !results.related.is_empty() {
                println!("\nRelated movies:");
                presenter::render_movies(&results.related);
            }
        }
        SearchOutcome::Aborted => println!("No valid selection. Exiting search."),
        SearchOutcome::Candidates(_) => unreachable!("candidates are resolved above"),
    }

    Ok(())
}

fn run_recommendation(config: &Config) -> anyhow::Result<()> {
    println!("\nChoose a genre for recommendations:");
    for (i, genre) in config.genres.iter().enumerate() {
        println!("{:>2}. {}", i + 1, genre);
    }

    let Some(input) = prompt("\nEnter your choice: ")? else {
        return Ok(());
    };
    let genre = match parse_genre_selection(&input, &config.genres) {
        Ok(genre) => genre,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    // The catalog is reloaded on every request; source tables may have
    // changed since startup.
    let recommendations = catalog::load(Path::new(&config.data_dir), genre)
        .and_then(|catalog| services::recommend_genre(&catalog, config.genre_top));

    match recommendations {
        Ok(ranked) => {
            println!("\nTop {} recommended {} movies:", ranked.len(), genre);
            presenter::render_ranked(&ranked);
        }
        Err(e) => println!("Cannot compute recommendations: {}", e),
    }

    Ok(())
}

fn parse_genre_selection<'a>(input: &str, genres: &'a [String]) -> Result<&'a String, AppError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| genres.get(i))
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Invalid selection. Please choose a number between 1 and {}.",
                genres.len()
            ))
        })
}

/// Catalogs are rebuilt fresh for every operation; failed genres are
/// logged by the loader and dropped here.
fn loaded_catalogs(config: &Config) -> Vec<GenreCatalog> {
    catalog::load_all(Path::new(&config.data_dir), &config.genres)
        .into_iter()
        .filter_map(|(_, result)| result.ok())
        .collect()
}

/// Reads one line from stdin, returning `None` on end of input
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
