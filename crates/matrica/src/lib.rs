//! # Matrica
//!
//! A dense-matrix calculator for small real-valued matrices (up to 20x20).
//!
//! The numerical heart is Gaussian elimination with partial pivoting, used
//! for determinant evaluation and for full classification of systems of
//! linear algebraic equations (SLAE), including rank-deficient and
//! inconsistent systems.
//!
//! ## Quick Start
//!
//! ```
//! use matrica::prelude::*;
//!
//! let m = Mat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//! assert!((determinant(&m).unwrap() - -2.0).abs() < 1e-12);
//!
//! // x + y = 3, stated twice: consistent, one free variable.
//! let aug = Mat::from_rows(vec![vec![1.0, 1.0, 3.0], vec![2.0, 2.0, 6.0]]);
//! let solution = classify(&rref(&aug));
//! assert!(solution.is_consistent());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use matrica_core as core;
pub use matrica_gauss as gauss;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use matrica_core::{matrix_from_str, Mat, MatError, ParseError};
    pub use matrica_gauss::{classify, determinant, rref, GaussError, Solution};
}
