//! Console-oriented number and matrix rendering.
//!
//! The calculator reports values with four fixed decimal places, switching
//! to scientific notation once the magnitude reaches `1e12`. Matrix output
//! aligns columns and snaps sub-`1e-4` entries to zero so rounding noise
//! from elimination does not show up as `-0.0000`.

use crate::matrix::Mat;

/// Magnitude at which values switch to scientific notation.
pub const SCI_THRESHOLD: f64 = 1e12;

/// Entries below this magnitude are displayed as zero.
pub const DISPLAY_ZERO: f64 = 1e-4;

/// Formats a value for console output.
///
/// Values below [`SCI_THRESHOLD`] in magnitude print with four decimal
/// places; larger values use scientific notation with up to six significant
/// decimals and an explicit exponent sign (for example `1.234568E+12`).
#[must_use]
pub fn fmt_value(value: f64) -> String {
    if value.abs() >= SCI_THRESHOLD {
        fmt_scientific(value)
    } else {
        format!("{value:.4}")
    }
}

fn fmt_scientific(value: f64) -> String {
    let s = format!("{value:.6E}");
    let (mantissa, exponent) = s.split_once('E').unwrap_or((s.as_str(), "0"));
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    if exponent.starts_with('-') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}E+{exponent}")
    }
}

/// Renders a matrix as an aligned grid of [`fmt_value`] cells.
///
/// Each column is padded to the width of its longest entry. Entries with
/// magnitude below [`DISPLAY_ZERO`] render as `0.0000`.
#[must_use]
pub fn render_matrix(matrix: &Mat) -> String {
    let cell = |i: usize, j: usize| {
        let v = matrix[(i, j)];
        fmt_value(if v.abs() < DISPLAY_ZERO { 0.0 } else { v })
    };

    let mut widths = vec![0usize; matrix.num_cols()];
    for i in 0..matrix.num_rows() {
        for j in 0..matrix.num_cols() {
            widths[j] = widths[j].max(cell(i, j).len());
        }
    }

    let mut out = String::new();
    for i in 0..matrix.num_rows() {
        for j in 0..matrix.num_cols() {
            let s = cell(i, j);
            out.push_str(&s);
            if j + 1 < matrix.num_cols() {
                for _ in s.len()..widths[j] + 1 {
                    out.push(' ');
                }
            }
        }
        out.push('\n');
    }
    out
}
