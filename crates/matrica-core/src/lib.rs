//! # matrica-core
//!
//! Dense matrix container and arithmetic for the Matrica calculator.
//!
//! This crate provides:
//! - A row-major `f64` matrix bounded at 20 rows/columns
//! - Structural operations: trace, transpose, sum, difference, product
//! - Random matrix generation over a caller-chosen interval
//! - Parsing of the plain-text matrix format
//! - Console-oriented number and matrix formatting
//!
//! The numerical algorithms (determinant, RREF, solution classification)
//! live in `matrica-gauss` and operate on the [`Mat`] type defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod format;
pub mod matrix;
pub mod parse;

pub use matrix::{Mat, MatError, MAX_DIM, MAX_ENTRY};
pub use parse::{matrix_from_str, ParseError};
