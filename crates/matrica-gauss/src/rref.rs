//! Reduction of augmented matrices to reduced row-echelon form.

use matrica_core::Mat;

use crate::PIVOT_EPS;

/// Reduces an augmented matrix `[A | b]` to reduced row-echelon form.
///
/// Works on a copy; the caller's matrix is left untouched for display.
///
/// The reduction runs in two phases. Phase 1 walks the coefficient columns
/// left to right with a row cursor: in each column it picks the
/// largest-magnitude candidate at or below the cursor (partial pivoting),
/// and eliminates that column from every *other* row, above and below. A
/// column with no candidate above [`PIVOT_EPS`] is skipped without
/// advancing the cursor; those skipped columns are exactly the free
/// variables the classifier will report later. The right-hand-side column
/// is never a pivot candidate but participates in every row operation.
///
/// Phase 2 normalizes each row by its first entry above [`PIVOT_EPS`], so
/// every nonzero row leads with exactly 1. All-zero rows are left as-is;
/// for an inconsistent system they are the `0 = nonzero` witnesses the
/// classifier checks for.
#[must_use]
pub fn rref(augmented: &Mat) -> Mat {
    let mut m = augmented.clone();
    let rows = m.num_rows();
    let cols = m.num_cols();

    // Phase 1: forward elimination across coefficient columns.
    let mut cursor = 0;
    for col in 0..cols - 1 {
        if cursor >= rows {
            break;
        }

        let mut pivot_row = cursor;
        for r in cursor..rows {
            if m[(r, col)].abs() > m[(pivot_row, col)].abs() {
                pivot_row = r;
            }
        }
        if m[(pivot_row, col)].abs() < PIVOT_EPS {
            // No pivot available: this column stays free.
            continue;
        }
        m.swap_rows(cursor, pivot_row);

        for r in 0..rows {
            if r == cursor {
                continue;
            }
            let factor = m[(r, col)] / m[(cursor, col)];
            for c in 0..cols {
                m[(r, c)] -= m[(cursor, c)] * factor;
            }
        }
        cursor += 1;
    }

    // Phase 2: scale each row by its leader so pivots become 1.
    for r in 0..rows {
        let mut leader = None;
        for c in 0..cols {
            if leader.is_none() && m[(r, c)].abs() > PIVOT_EPS {
                leader = Some(m[(r, c)]);
            }
            if let Some(l) = leader {
                m[(r, c)] /= l;
            }
        }
    }

    m
}
