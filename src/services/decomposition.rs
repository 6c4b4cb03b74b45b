use nalgebra::{DMatrix, DVector};

use crate::error::{AppError, AppResult};

/// Thin singular value decomposition of a feature matrix
///
/// All singular values are retained, so `reconstruct` reproduces the input
/// within floating-point tolerance. The decomposition is used as a
/// numerically stabilized identity, not as dimensionality reduction.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Left singular vectors, `rows x min(rows, cols)`
    pub u: DMatrix<f64>,
    /// Singular values, non-negative, descending
    pub singular_values: DVector<f64>,
    /// Transposed right singular vectors, `min(rows, cols) x cols`
    pub v_t: DMatrix<f64>,
}

/// Computes the thin SVD of `matrix`
///
/// Fails when the matrix has no rows or columns, or contains non-finite
/// values. All-zero matrices are valid and decompose to zero singular values.
pub fn decompose(matrix: &DMatrix<f64>) -> AppResult<Decomposition> {
    if matrix.nrows() == 0 || matrix.ncols() == 0 {
        return Err(AppError::Decomposition(
            "matrix has no rows or columns".to_string(),
        ));
    }
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(AppError::Decomposition(
            "matrix contains non-finite values".to_string(),
        ));
    }

    let mut svd = matrix.clone().svd(true, true);
    svd.sort_by_singular_values();

    let u = svd
        .u
        .ok_or_else(|| AppError::Decomposition("left singular vectors not computed".to_string()))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| AppError::Decomposition("right singular vectors not computed".to_string()))?;

    Ok(Decomposition {
        u,
        singular_values: svd.singular_values,
        v_t,
    })
}

/// Reconstructs the original matrix as `U * diag(S) * V^T`
pub fn reconstruct(decomposition: &Decomposition) -> DMatrix<f64> {
    let s = DMatrix::from_diagonal(&decomposition.singular_values);
    &decomposition.u * s * &decomposition.v_t
}
