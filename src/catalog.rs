use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::{CatalogRow, GenreCatalog};

// Columns surfaced as dedicated row fields rather than generic features.
const TITLE_COLUMN: &str = "movie";
const DIRECTOR_COLUMN: &str = "director";
const RUNTIME_COLUMN: &str = "runtime";
const RELEASE_COLUMN: &str = "release";

/// Loads one genre's catalog from `<data_dir>/<genre>.csv`
///
/// Source files are not reliably UTF-8; undecodable bytes are replaced with
/// U+FFFD instead of failing the whole genre.
pub fn load(dir: &Path, genre: &str) -> AppResult<GenreCatalog> {
    let path = dir.join(format!("{}.csv", genre));
    let bytes = fs::read(&path).map_err(|e| AppError::CatalogLoad {
        genre: genre.to_string(),
        reason: format!("{}: {}", path.display(), e),
    })?;
    let text = String::from_utf8_lossy(&bytes);
    parse(genre, &text)
}

/// Loads every configured genre, keeping per-genre results separate
///
/// One unreadable table never aborts its siblings; failures are logged and
/// carried as `Err` so callers can decide what a partial catalog means.
pub fn load_all(dir: &Path, genres: &[String]) -> Vec<(String, AppResult<GenreCatalog>)> {
    genres
        .iter()
        .map(|genre| {
            let result = load(dir, genre);
            match &result {
                Ok(catalog) => {
                    tracing::debug!(genre = %genre, rows = catalog.rows.len(), "Catalog loaded");
                }
                Err(e) => {
                    tracing::warn!(genre = %genre, error = %e, "Skipping genre catalog");
                }
            }
            (genre.clone(), result)
        })
        .collect()
}

/// Flattens successfully loaded catalogs into the unified search view
pub fn unified(catalogs: &[GenreCatalog]) -> Vec<CatalogRow> {
    catalogs.iter().flat_map(|c| c.rows.iter().cloned()).collect()
}

/// Parses one genre's CSV text into a catalog
///
/// Header names are normalized to lower-case trimmed form. A column counts
/// as numeric when the table has rows and every value in the column parses
/// as `f64`; those columns become the feature block, all in source order.
pub fn parse(genre: &str, text: &str) -> AppResult<GenreCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| load_error(genre, &e.to_string()))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let title_idx = headers
        .iter()
        .position(|h| h == TITLE_COLUMN)
        .ok_or_else(|| load_error(genre, &format!("missing '{}' column", TITLE_COLUMN)))?;

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| load_error(genre, &e.to_string()))?;
        let mut fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
        // Short records are padded so every row spans the full header set.
        fields.resize(headers.len(), String::new());
        records.push(fields);
    }

    let director_idx = headers.iter().position(|h| h == DIRECTOR_COLUMN);
    let runtime_idx = headers.iter().position(|h| h == RUNTIME_COLUMN);
    let release_idx = headers.iter().position(|h| h == RELEASE_COLUMN);

    // Parse each candidate column up front; a column is numeric only when
    // every one of its values parses, so a single text cell (or an empty
    // table) keeps the whole column out of the feature block. The title and
    // release columns never qualify: titles carry identity, and a release
    // column of bare years would parse cleanly yet swamp the single-digit
    // rating scale in the row-mean score.
    let mut feature_names = Vec::new();
    let mut feature_columns: Vec<Vec<f64>> = Vec::new();
    for (col, header) in headers.iter().enumerate() {
        if col == title_idx || release_idx == Some(col) || records.is_empty() {
            continue;
        }
        let parsed: Option<Vec<f64>> = records
            .iter()
            .map(|fields| fields[col].parse::<f64>().ok())
            .collect();
        if let Some(values) = parsed {
            feature_names.push(header.clone());
            feature_columns.push(values);
        }
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, fields)| CatalogRow {
            title: fields[title_idx].clone(),
            director: director_idx.and_then(|c| non_empty(&fields[c])),
            runtime: runtime_idx.and_then(|c| fields[c].parse().ok()),
            release: release_idx.and_then(|c| non_empty(&fields[c])),
            genre: genre.to_string(),
            features: feature_columns.iter().map(|col| col[i]).collect(),
        })
        .collect();

    Ok(GenreCatalog {
        genre: genre.to_string(),
        feature_names,
        rows,
    })
}

fn load_error(genre: &str, reason: &str) -> AppError {
    AppError::CatalogLoad {
        genre: genre.to_string(),
        reason: reason.to_string(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTION_CSV: &str = "\
Movie , DIRECTOR,Runtime,Release,IMDB Rating,Audience Score
The Matrix,Lana Wachowski,136,1999,8.7,85
Mad Max,George Miller,88,1979,6.8,70
Speed,Jan de Bont,116,1994,7.3,78
";

    #[test]
    fn test_headers_normalized_to_lowercase_trimmed() {
        let catalog = parse("Action", ACTION_CSV).unwrap();
        assert_eq!(
            catalog.feature_names,
            vec!["runtime", "imdb rating", "audience score"]
        );
    }

    #[test]
    fn test_numeric_columns_become_features() {
        let catalog = parse("Action", ACTION_CSV).unwrap();
        assert_eq!(catalog.rows.len(), 3);
        assert_eq!(catalog.rows[0].features, vec![136.0, 8.7, 85.0]);
        assert_eq!(catalog.rows[0].title, "The Matrix");
        assert_eq!(catalog.rows[0].director.as_deref(), Some("Lana Wachowski"));
        assert_eq!(catalog.rows[0].release.as_deref(), Some("1999"));
        assert_eq!(catalog.rows[0].genre, "Action");
    }

    #[test]
    fn test_release_years_never_become_features() {
        let csv = "\
movie,release,rating
A,1999,8.7
B,1979,6.8
";
        let catalog = parse("Action", csv).unwrap();
        // Bare years parse as numbers, but release stays a display field.
        assert_eq!(catalog.feature_names, vec!["rating"]);
        assert_eq!(catalog.rows[0].features, vec![8.7]);
        assert_eq!(catalog.rows[0].release.as_deref(), Some("1999"));
    }

    #[test]
    fn test_text_cell_excludes_column_from_features() {
        let csv = "\
movie,rating,notes
A,8.1,good
B,7.2,4
";
        let catalog = parse("Horror", csv).unwrap();
        // "notes" mixes text and numbers, so only "rating" qualifies.
        assert_eq!(catalog.feature_names, vec!["rating"]);
        assert_eq!(catalog.rows[1].features, vec![7.2]);
    }

    #[test]
    fn test_empty_cell_excludes_column_from_features() {
        let csv = "\
movie,rating
A,8.1
B,
";
        let catalog = parse("Horror", csv).unwrap();
        assert!(catalog.feature_names.is_empty());
    }

    #[test]
    fn test_missing_title_column_is_load_error() {
        let csv = "name,rating\nA,8.1\n";
        let err = parse("War", csv).unwrap_err();
        assert!(matches!(err, AppError::CatalogLoad { .. }));
        assert!(err.to_string().contains("movie"));
    }

    #[test]
    fn test_short_record_padded_with_empty_fields() {
        let csv = "\
movie,director,rating
A,Someone,8.1
B
";
        let catalog = parse("Crime", csv).unwrap();
        assert_eq!(catalog.rows[1].title, "B");
        assert!(catalog.rows[1].director.is_none());
        // The padded empty rating cell keeps the column non-numeric.
        assert!(catalog.feature_names.is_empty());
    }

    #[test]
    fn test_empty_table_has_no_features() {
        let csv = "movie,rating\n";
        let catalog = parse("Sport", csv).unwrap();
        assert!(catalog.rows.is_empty());
        assert!(catalog.feature_names.is_empty());
    }

    #[test]
    fn test_unified_view_concatenates_in_genre_order() {
        let action = parse("Action", ACTION_CSV).unwrap();
        let horror = parse("Horror", "movie,rating\nIt,7.3\n").unwrap();
        let rows = unified(&[action, horror]);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].genre, "Action");
        assert_eq!(rows[3].genre, "Horror");
        assert_eq!(rows[3].title, "It");
    }
}
