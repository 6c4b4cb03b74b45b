use nalgebra::DMatrix;

/// Scores each row by its arithmetic mean and returns the top `k` rows
///
/// Returns `(row index, score)` pairs in descending score order. The sort is
/// stable, so rows with equal scores keep their original order and repeated
/// runs over the same matrix are reproducible. `k` is clamped to the number
/// of rows.
pub fn rank(matrix: &DMatrix<f64>, k: usize) -> Vec<(usize, f64)> {
    let ncols = matrix.ncols();
    let mut scored: Vec<(usize, f64)> = matrix
        .row_iter()
        .enumerate()
        .map(|(i, row)| {
            let score = if ncols == 0 { 0.0 } else { row.sum() / ncols as f64 };
            (i, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_ordered_by_mean_descending() {
        let matrix = DMatrix::from_row_slice(3, 2, &[1.0, 3.0, 5.0, 7.0, 2.0, 4.0]);
        let ranked = rank(&matrix, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].0, 1);
        assert!((ranked[0].1 - 6.0).abs() < 1e-12);
        assert_eq!(ranked[1].0, 2);
        assert_eq!(ranked[2].0, 0);
    }

    #[test]
    fn test_equal_scores_keep_original_row_order() {
        let matrix = DMatrix::from_row_slice(4, 2, &[5.0, 5.0, 9.0, 9.0, 5.0, 5.0, 1.0, 1.0]);
        let ranked = rank(&matrix, 4);
        assert_eq!(ranked[0].0, 1);
        // Rows 0 and 2 tie at 5.0; the smaller original index ranks first.
        assert_eq!(ranked[1].0, 0);
        assert_eq!(ranked[2].0, 2);
        assert_eq!(ranked[3].0, 3);
    }

    #[test]
    fn test_k_clamped_to_row_count() {
        let matrix = DMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
        assert_eq!(rank(&matrix, 10).len(), 2);
        assert_eq!(rank(&matrix, 1).len(), 1);
        assert_eq!(rank(&matrix, 0).len(), 0);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let matrix = DMatrix::from_row_slice(3, 3, &[3.0, 1.0, 2.0, 9.0, 8.0, 7.0, 4.0, 6.0, 5.0]);
        let first = rank(&matrix, 3);
        let second = rank(&matrix, 3);
        assert_eq!(first, second);
    }
}
