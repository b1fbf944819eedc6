//! Determinant evaluation via Gaussian elimination with partial pivoting.

use matrica_core::Mat;

use crate::{GaussError, PIVOT_EPS};

/// Computes the determinant of a square matrix.
///
/// Runs a partial-pivoting elimination sweep over a working copy,
/// accumulating the pivot product and negating it on every row swap. A
/// pivot column whose best candidate falls below [`PIVOT_EPS`] means the
/// matrix is singular; the sweep short-circuits and returns exactly `0.0`,
/// which is the correct answer rather than a failure.
///
/// After each pivot is folded into the accumulator, its row is normalized
/// in the columns to its right and used to clear the pivot column from
/// every other row, so later pivots are read off the diagonal directly.
///
/// # Errors
///
/// Returns [`GaussError::NotSquare`] for rectangular input.
pub fn determinant(matrix: &Mat) -> Result<f64, GaussError> {
    if !matrix.is_square() {
        return Err(GaussError::NotSquare {
            rows: matrix.num_rows(),
            cols: matrix.num_cols(),
        });
    }

    let mut m = matrix.clone();
    let n = m.num_rows();
    let mut det = 1.0;

    for r in 0..n {
        // Partial pivoting: largest magnitude in column r at or below row r.
        let mut pivot_row = r;
        for r2 in r + 1..n {
            if m[(r2, r)].abs() > m[(pivot_row, r)].abs() {
                pivot_row = r2;
            }
        }
        if m[(pivot_row, r)].abs() < PIVOT_EPS {
            return Ok(0.0);
        }
        if pivot_row != r {
            m.swap_rows(r, pivot_row);
            det = -det;
        }

        let pivot = m[(r, r)];
        det *= pivot;

        // Normalize the pivot row to the right of the pivot; the pivot
        // column itself keeps its value so eliminations below read the raw
        // multiplier from it.
        for c in r + 1..n {
            m[(r, c)] /= pivot;
        }

        // Clear column r from every other row using the normalized row.
        for r2 in 0..n {
            if r2 != r && m[(r2, r)].abs() > PIVOT_EPS {
                let multiplier = m[(r2, r)];
                for c in r + 1..n {
                    m[(r2, c)] -= m[(r, c)] * multiplier;
                }
            }
        }
    }

    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_det_2x2() {
        let m = Mat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!((determinant(&m).unwrap() - -2.0).abs() < 1e-12);
    }

    #[test]
    fn test_det_identity() {
        for n in 1..=20 {
            assert_eq!(determinant(&Mat::identity(n)).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_det_zero_row() {
        let m = Mat::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0, 0.0],
            vec![7.0, 8.0, 10.0],
        ]);
        assert_eq!(determinant(&m).unwrap(), 0.0);
    }

    #[test]
    fn test_det_singular_duplicate_rows() {
        let m = Mat::from_rows(vec![vec![2.0, 4.0], vec![1.0, 2.0]]);
        assert_eq!(determinant(&m).unwrap(), 0.0);
    }

    #[test]
    fn test_det_3x3() {
        // Cofactor expansion: 6*(-2*7 - 5*8) - 1*(4*7 - 5*2) + 1*(4*8 + 2*2) = -306.
        let m = Mat::from_rows(vec![
            vec![6.0, 1.0, 1.0],
            vec![4.0, -2.0, 5.0],
            vec![2.0, 8.0, 7.0],
        ]);
        assert!((determinant(&m).unwrap() - -306.0).abs() < 1e-9);
    }

    #[test]
    fn test_det_requires_square() {
        let m = Mat::zeros(2, 3);
        assert_eq!(
            determinant(&m),
            Err(GaussError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_det_does_not_mutate_input() {
        let m = Mat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let copy = m.clone();
        let _ = determinant(&m).unwrap();
        assert_eq!(m, copy);
    }

    #[test]
    fn test_det_pivoting_handles_zero_leading_entry() {
        // First pivot candidate on the diagonal is zero; partial pivoting
        // must swap row 1 up instead of dividing by it.
        let m = Mat::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert!((determinant(&m).unwrap() - -1.0).abs() < 1e-12);
    }
}
