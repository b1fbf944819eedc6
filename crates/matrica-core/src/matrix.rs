//! Dense matrix storage for small real-valued matrices.
//!
//! Matrices are stored densely in row-major order. Problem sizes are capped
//! at [`MAX_DIM`] rows/columns, so dense storage is always the right choice
//! here (better cache locality, trivial access patterns).

use std::ops::{Add, Index, IndexMut, Sub};

use rand::Rng;
use thiserror::Error;

/// Largest supported number of rows or columns.
pub const MAX_DIM: usize = 20;

/// Largest entry magnitude accepted from external input.
pub const MAX_ENTRY: f64 = 1e9;

/// Errors for violated dimension contracts.
///
/// Degenerate mathematical outcomes (singular matrices, inconsistent
/// systems) are not errors; they are ordinary results of the algorithms in
/// `matrica-gauss`. These variants only signal that a caller handed a matrix
/// of the wrong shape to an operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatError {
    /// A square matrix was required.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Two operands had to share a shape but did not.
    #[error("matrix shapes differ: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),

    /// Matrix product requires left columns to match right rows.
    #[error("cannot multiply: left has {left_cols} columns, right has {right_rows} rows")]
    ProductShape {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count of the right operand.
        right_rows: usize,
    },

    /// Requested dimensions fall outside `1..=MAX_DIM`.
    #[error("dimensions {rows}x{cols} outside supported range 1..={MAX_DIM}")]
    DimensionOutOfRange {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
}

/// Dense matrix of `f64` entries stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat {
    /// Matrix entries in row-major order.
    data: Vec<f64>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Mat {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![0.0; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows have uneven lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector, checking the dimension bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::DimensionOutOfRange`] if the shape falls outside
    /// `1..=MAX_DIM` in either direction, or the rows have uneven lengths.
    pub fn try_from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if !(1..=MAX_DIM).contains(&num_rows)
            || !(1..=MAX_DIM).contains(&num_cols)
            || rows.iter().any(|r| r.len() != num_cols)
        {
            return Err(MatError::DimensionOutOfRange {
                rows: num_rows,
                cols: num_cols,
            });
        }
        Ok(Self::from_rows(rows))
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Creates a matrix with entries drawn uniformly from `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn random<R: Rng + ?Sized>(
        num_rows: usize,
        num_cols: usize,
        lo: f64,
        hi: f64,
        rng: &mut R,
    ) -> Self {
        assert!(lo <= hi);
        let mut m = Self::zeros(num_rows, num_cols);
        for entry in &mut m.data {
            *entry = rng.gen_range(lo..=hi);
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Computes the trace (sum of diagonal entries).
    ///
    /// # Errors
    ///
    /// Returns [`MatError::NotSquare`] for non-square input.
    pub fn trace(&self) -> Result<f64, MatError> {
        if !self.is_square() {
            return Err(MatError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }
        Ok((0..self.num_rows).map(|i| self[(i, i)]).sum())
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|v| v * scalar).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Matrix-matrix product: C = A * B.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::ProductShape`] when the inner dimensions differ.
    pub fn mm(&self, other: &Self) -> Result<Self, MatError> {
        if self.num_cols != other.num_rows {
            return Err(MatError::ProductShape {
                left_cols: self.num_cols,
                right_rows: other.num_rows,
            });
        }
        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = 0.0;
                for k in 0..self.num_cols {
                    sum += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// Entrywise sum with a shape check.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::ShapeMismatch`] when the shapes differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatError> {
        self.same_shape(other)?;
        Ok(self + other)
    }

    /// Entrywise difference with a shape check.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::ShapeMismatch`] when the shapes differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MatError> {
        self.same_shape(other)?;
        Ok(self - other)
    }

    fn same_shape(&self, other: &Self) -> Result<(), MatError> {
        if self.num_rows == other.num_rows && self.num_cols == other.num_cols {
            Ok(())
        } else {
            Err(MatError::ShapeMismatch(
                self.num_rows,
                self.num_cols,
                other.num_rows,
                other.num_cols,
            ))
        }
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl Add for &Mat {
    type Output = Mat;

    fn add(self, other: Self) -> Mat {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        Mat {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl Sub for &Mat {
    type Output = Mat;

    fn sub(self, other: Self) -> Mat {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        Mat {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zeros() {
        let m = Mat::zeros(3, 4);
        assert_eq!(m.num_rows(), 3);
        assert_eq!(m.num_cols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_identity() {
        let id = Mat::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                if i == j {
                    assert_eq!(id[(i, j)], 1.0);
                } else {
                    assert_eq!(id[(i, j)], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_try_from_rows_bounds() {
        assert!(Mat::try_from_rows(vec![]).is_err());
        assert!(Mat::try_from_rows(vec![vec![]]).is_err());
        assert!(Mat::try_from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
        assert!(Mat::try_from_rows(vec![vec![0.0; MAX_DIM + 1]]).is_err());
        assert!(Mat::try_from_rows(vec![vec![1.0, 2.0]]).is_ok());
    }

    #[test]
    fn test_trace() {
        let m = Mat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.trace().unwrap(), 5.0);

        let rect = Mat::zeros(2, 3);
        assert_eq!(
            rect.trace(),
            Err(MatError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_transpose() {
        let m = Mat::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = m.transpose();
        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.num_cols(), 2);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t[(2, 1)], 6.0);
    }

    #[test]
    fn test_mm() {
        let a = Mat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Mat::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = a.mm(&b).unwrap();
        // [[1*5+2*7, 1*6+2*8], [3*5+4*7, 3*6+4*8]] = [[19, 22], [43, 50]]
        assert_eq!(c[(0, 0)], 19.0);
        assert_eq!(c[(0, 1)], 22.0);
        assert_eq!(c[(1, 0)], 43.0);
        assert_eq!(c[(1, 1)], 50.0);

        let bad = Mat::zeros(3, 3);
        assert!(a.mm(&bad).is_err());
    }

    #[test]
    fn test_add_sub() {
        let a = Mat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Mat::from_rows(vec![vec![4.0, 3.0], vec![2.0, 1.0]]);
        let sum = a.checked_add(&b).unwrap();
        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(sum, Mat::from_rows(vec![vec![5.0, 5.0], vec![5.0, 5.0]]));
        assert_eq!(diff, Mat::from_rows(vec![vec![-3.0, -1.0], vec![1.0, 3.0]]));

        let rect = Mat::zeros(2, 3);
        assert!(a.checked_add(&rect).is_err());
    }

    #[test]
    fn test_scale() {
        let m = Mat::from_rows(vec![vec![1.0, -2.0]]);
        let s = m.scale(-3.0);
        assert_eq!(s, Mat::from_rows(vec![vec![-3.0, 6.0]]));
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Mat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[3.0, 4.0]);
        assert_eq!(m.row(1), &[1.0, 2.0]);
        // Swapping a row with itself is a no-op.
        m.swap_rows(0, 0);
        assert_eq!(m.row(0), &[3.0, 4.0]);
    }

    #[test]
    fn test_random_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let m = Mat::random(4, 5, -2.5, 2.5, &mut rng);
        assert_eq!(m.num_rows(), 4);
        assert_eq!(m.num_cols(), 5);
        for i in 0..4 {
            for j in 0..5 {
                assert!((-2.5..=2.5).contains(&m[(i, j)]));
            }
        }
    }
}
