//! # matrica-gauss
//!
//! Gaussian elimination with partial pivoting over dense `f64` matrices.
//!
//! This crate is the numerical core of the Matrica calculator:
//! - [`determinant`]: pivot-product determinant evaluation
//! - [`rref`]: reduction of an augmented matrix to reduced row-echelon form
//! - [`classify`]: consistency analysis and parametric solution extraction
//!
//! ## Tolerances
//!
//! All zero tests go through two first-class constants. [`PIVOT_EPS`] guards
//! pivot selection and row normalization; the slightly tighter
//! [`CLASSIFY_EPS`] guards consistency and free-variable detection on the
//! reduced matrix. Both are part of the numerical contract: comparing
//! against literal zero anywhere in this crate would turn floating-point
//! noise into phantom pivots or free variables.
//!
//! ## Degenerate outcomes are data
//!
//! A singular matrix yields a determinant of `0.0` and an inconsistent
//! system yields [`Solution::Inconsistent`]; neither is an error. Errors are
//! reserved for violated caller contracts, such as asking for the
//! determinant of a rectangular matrix.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use thiserror::Error;

pub mod classify;
pub mod determinant;
pub mod rref;

pub use classify::{classify, parametric_variables, Equation, Solution, Term};
pub use determinant::determinant;
pub use rref::rref;

/// Zero threshold for pivot selection and row normalization.
pub const PIVOT_EPS: f64 = 1e-8;

/// Zero threshold for consistency and free-variable tests on reduced rows.
pub const CLASSIFY_EPS: f64 = 1e-9;

/// Errors for violated caller contracts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GaussError {
    /// The determinant is only defined for square matrices.
    #[error("determinant requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}
