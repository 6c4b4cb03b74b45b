use crate::error::AppResult;
use crate::models::{GenreCatalog, RankedMovie};
use crate::services::{decomposition, features, ranking};

/// Recommends the top `k` movies for one genre
///
/// Builds the numeric feature matrix, runs it through the full-rank SVD
/// reconstruction, ranks rows by their reconstructed mean score and resolves
/// the winning row indices back to catalog rows positionally.
pub fn recommend_genre(catalog: &GenreCatalog, k: usize) -> AppResult<Vec<RankedMovie>> {
    let (matrix, _titles) = features::build(catalog)?;
    let decomposition = decomposition::decompose(&matrix)?;
    let reconstructed = decomposition::reconstruct(&decomposition);
    let ranked = ranking::rank(&reconstructed, k);

    tracing::debug!(
        genre = %catalog.genre,
        rows = matrix.nrows(),
        features = matrix.ncols(),
        returned = ranked.len(),
        "Genre recommendation computed"
    );

    Ok(ranked
        .into_iter()
        .map(|(index, score)| RankedMovie {
            row: catalog.rows[index].clone(),
            score,
        })
        .collect())
}

/// Computes the per-genre overview across all loaded catalogs
///
/// A genre whose recommendation fails (no numeric columns, degenerate
/// matrix) is logged and skipped; the others continue.
pub fn overview(catalogs: &[GenreCatalog], k: usize) -> Vec<(String, Vec<RankedMovie>)> {
    catalogs
        .iter()
        .filter_map(|catalog| match recommend_genre(catalog, k) {
            Ok(ranked) => Some((catalog.genre.clone(), ranked)),
            Err(e) => {
                tracing::warn!(genre = %catalog.genre, error = %e, "Skipping genre in overview");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::error::AppError;

    fn action_catalog() -> GenreCatalog {
        catalog::parse(
            "Action",
            "movie,director,imdb,audience\n\
             Low,A,2.0,20\n\
             High,B,9.0,95\n\
             Mid,C,6.0,60\n",
        )
        .unwrap()
    }

    #[test]
    fn test_recommendation_orders_by_reconstructed_score() {
        let ranked = recommend_genre(&action_catalog(), 3).unwrap();
        let titles: Vec<&str> = ranked.iter().map(|m| m.row.title.as_str()).collect();
        assert_eq!(titles, vec!["High", "Mid", "Low"]);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_recommendation_clamps_k() {
        let ranked = recommend_genre(&action_catalog(), 10).unwrap();
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_genre_without_numeric_columns_fails() {
        let catalog = catalog::parse("Romance", "movie,director\nA,B\n").unwrap();
        let err = recommend_genre(&catalog, 5).unwrap_err();
        assert!(matches!(err, AppError::EmptyFeatureSet(_)));
    }

    #[test]
    fn test_overview_skips_failing_genres() {
        let bad = catalog::parse("Romance", "movie,director\nA,B\n").unwrap();
        let overview = overview(&[action_catalog(), bad], 2);
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].0, "Action");
        assert_eq!(overview[0].1.len(), 2);
    }
}
