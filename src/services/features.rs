use nalgebra::DMatrix;

use crate::error::{AppError, AppResult};
use crate::models::GenreCatalog;

/// Builds the numeric feature matrix for one genre catalog
///
/// Returns the matrix together with the row-aligned title vector. Matrix row
/// `i` always corresponds to `catalog.rows[i]`; downstream ranking relies on
/// that alignment to map scores back to movies.
pub fn build(catalog: &GenreCatalog) -> AppResult<(DMatrix<f64>, Vec<String>)> {
    if catalog.feature_names.is_empty() {
        return Err(AppError::EmptyFeatureSet(catalog.genre.clone()));
    }

    let nrows = catalog.rows.len();
    let ncols = catalog.feature_names.len();
    let matrix = DMatrix::from_fn(nrows, ncols, |r, c| catalog.rows[r].features[c]);
    let titles = catalog.rows.iter().map(|r| r.title.clone()).collect();

    Ok((matrix, titles))
}
