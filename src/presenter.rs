//! Table rendering for search results and recommendations

use prettytable::{format, row, Cell, Row, Table};

use crate::models::{CatalogRow, RankedMovie};

const UNKNOWN: &str = "Unknown";

fn styled_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

fn runtime(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| format!("{}", v))
}

/// Renders matched or related rows under the unified search columns
pub fn render_movies(rows: &[CatalogRow]) {
    let mut table = styled_table();
    table.set_titles(row!["Movie", "Director", "Runtime", "Release", "Genre"]);
    for movie in rows {
        table.add_row(row![
            movie.title,
            text(&movie.director),
            runtime(movie.runtime),
            text(&movie.release),
            movie.genre
        ]);
    }
    table.printstd();
}

/// Renders a ranked recommendation list for one genre
pub fn render_ranked(ranked: &[RankedMovie]) {
    let mut table = styled_table();
    table.set_titles(row!["#", "Movie", "Director", "Runtime", "Release Date"]);
    for (position, movie) in ranked.iter().enumerate() {
        table.add_row(row![
            position + 1,
            movie.row.title,
            text(&movie.row.director),
            runtime(movie.row.runtime),
            text(&movie.row.release)
        ]);
    }
    table.printstd();
}

/// Renders the startup overview: one row per genre, top movies as columns
///
/// Genres with fewer than `top` recommendations are padded with `-` so the
/// grid stays rectangular.
pub fn render_overview(overview: &[(String, Vec<RankedMovie>)], top: usize) {
    let mut header = vec![Cell::new("Genre")];
    for i in 0..top {
        header.push(Cell::new(&format!("Movie {}", i + 1)));
    }

    let mut table = styled_table();
    table.set_titles(Row::new(header));

    for (genre, ranked) in overview {
        let mut cells = vec![Cell::new(genre)];
        for i in 0..top {
            let title = ranked.get(i).map_or("-", |m| m.row.title.as_str());
            cells.push(Cell::new(title));
        }
        table.add_row(Row::new(cells));
    }
    table.printstd();
}
