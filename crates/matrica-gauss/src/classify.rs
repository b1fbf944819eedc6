//! Solution classification for reduced augmented matrices.
//!
//! Consumes the output of [`crate::rref`] and turns it into a structured
//! answer: inconsistent, uniquely solved, or a parametric family where
//! leading variables are expressed in terms of free ones.

use std::fmt;

use matrica_core::format::fmt_value;
use matrica_core::Mat;

use crate::CLASSIFY_EPS;

/// One right-hand-side term of a parametric equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    /// Coefficient as it appears on the right-hand side (already negated
    /// from the stored RREF entry).
    pub coeff: f64,
    /// Zero-based index of the free variable this term multiplies.
    pub var: usize,
}

/// One solved equation: `X_{leader+1} = rhs + Σ coeff * X_{var+1}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Equation {
    /// Zero-based index of the leading (bound) variable.
    pub leader: usize,
    /// Constant part of the right-hand side.
    pub rhs: f64,
    /// Parametric terms over the free variables, in column order.
    pub terms: Vec<Term>,
}

/// Classification of a reduced system.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// Some row reduced to `0 = nonzero`; the system has no solutions.
    Inconsistent,
    /// The system is consistent.
    Consistent {
        /// Zero-based indices of the free (parametric) variables.
        free: Vec<usize>,
        /// One equation per row that carries a leading variable.
        equations: Vec<Equation>,
    },
}

impl Solution {
    /// Returns true unless the system was found inconsistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        !matches!(self, Solution::Inconsistent)
    }
}

/// Marks the free (parametric) variables of a reduced augmented matrix.
///
/// Per row, the first coefficient above [`CLASSIFY_EPS`] is the row's
/// leader; every later coefficient above the threshold marks its column as
/// parametric. The returned vector has one flag per variable column.
#[must_use]
pub fn parametric_variables(reduced: &Mat) -> Vec<bool> {
    let vars = reduced.num_cols() - 1;
    let mut free = vec![false; vars];
    for r in 0..reduced.num_rows() {
        let mut seen_leader = false;
        for c in 0..vars {
            if reduced[(r, c)].abs() > CLASSIFY_EPS {
                if seen_leader {
                    free[c] = true;
                }
                seen_leader = true;
            }
        }
    }
    free
}

fn is_consistent(reduced: &Mat) -> bool {
    let vars = reduced.num_cols() - 1;
    for r in 0..reduced.num_rows() {
        let any_coeff = (0..vars).any(|c| reduced[(r, c)].abs() > CLASSIFY_EPS);
        if !any_coeff && reduced[(r, vars)].abs() > CLASSIFY_EPS {
            return false;
        }
    }
    true
}

/// Classifies a reduced augmented matrix.
///
/// The input must already be in reduced row-echelon form (see
/// [`crate::rref`]). Rows whose coefficients all vanished encode the
/// consistency check: a nonzero right-hand side there means `0 = nonzero`
/// and the whole system is [`Solution::Inconsistent`]. Otherwise each row
/// with a leader contributes one [`Equation`], with the coefficients of
/// free variables negated as they move to the right-hand side. Leaderless
/// rows are trivially satisfied and emit nothing.
#[must_use]
pub fn classify(reduced: &Mat) -> Solution {
    if !is_consistent(reduced) {
        return Solution::Inconsistent;
    }

    let vars = reduced.num_cols() - 1;
    let free: Vec<usize> = parametric_variables(reduced)
        .iter()
        .enumerate()
        .filter_map(|(c, &f)| f.then_some(c))
        .collect();

    let mut equations = Vec::new();
    for r in 0..reduced.num_rows() {
        let mut leader = None;
        let mut terms = Vec::new();
        for c in 0..vars {
            if reduced[(r, c)].abs() > CLASSIFY_EPS {
                if leader.is_some() {
                    terms.push(Term {
                        coeff: -reduced[(r, c)],
                        var: c,
                    });
                } else {
                    leader = Some(c);
                }
            }
        }
        if let Some(leader) = leader {
            equations.push(Equation {
                leader,
                rhs: reduced[(r, vars)],
                terms,
            });
        }
    }

    Solution::Consistent { free, equations }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}={}", self.leader + 1, fmt_value(self.rhs))?;
        for term in &self.terms {
            if term.coeff > 0.0 {
                write!(f, "+")?;
            }
            write!(f, "{}*X{}", fmt_value(term.coeff), term.var + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Inconsistent => writeln!(f, "This SLAE has no solutions."),
            Solution::Consistent { free, equations } => {
                if !free.is_empty() {
                    write!(f, "For all variables values")?;
                    for var in free {
                        write!(f, " X{}", var + 1)?;
                    }
                    writeln!(f)?;
                }
                for eq in equations {
                    writeln!(f, "{eq}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rref;

    #[test]
    fn test_unique_solution() {
        // x = 5 as a 1x2 augmented matrix.
        let reduced = rref(&Mat::from_rows(vec![vec![1.0, 5.0]]));
        let solution = classify(&reduced);
        match &solution {
            Solution::Consistent { free, equations } => {
                assert!(free.is_empty());
                assert_eq!(equations.len(), 1);
                assert_eq!(equations[0].leader, 0);
                assert!((equations[0].rhs - 5.0).abs() < 1e-12);
                assert!(equations[0].terms.is_empty());
            }
            Solution::Inconsistent => panic!("expected consistent system"),
        }
        assert_eq!(solution.to_string(), "X1=5.0000\n");
    }

    #[test]
    fn test_redundant_row_gives_free_variable() {
        let reduced = rref(&Mat::from_rows(vec![
            vec![1.0, 1.0, 3.0],
            vec![2.0, 2.0, 6.0],
        ]));
        let solution = classify(&reduced);
        match &solution {
            Solution::Consistent { free, equations } => {
                assert_eq!(free, &[1]);
                assert_eq!(equations.len(), 1);
                assert_eq!(equations[0].leader, 0);
                assert!((equations[0].rhs - 3.0).abs() < 1e-9);
                assert_eq!(equations[0].terms.len(), 1);
                assert_eq!(equations[0].terms[0].var, 1);
                assert!((equations[0].terms[0].coeff - -1.0).abs() < 1e-9);
            }
            Solution::Inconsistent => panic!("expected consistent system"),
        }
        assert_eq!(
            solution.to_string(),
            "For all variables values X2\nX1=3.0000-1.0000*X2\n"
        );
    }

    #[test]
    fn test_inconsistent_system() {
        let reduced = rref(&Mat::from_rows(vec![vec![0.0, 0.0, 5.0]]));
        assert_eq!(classify(&reduced), Solution::Inconsistent);
        assert!(!classify(&reduced).is_consistent());
    }

    #[test]
    fn test_interleaved_free_variable_attribution() {
        // x2 free between bound x1 and x3. The equation for x1 must name
        // X2, not X3.
        let reduced = rref(&Mat::from_rows(vec![
            vec![1.0, 2.0, 0.0, 4.0],
            vec![0.0, 0.0, 1.0, 5.0],
        ]));
        let solution = classify(&reduced);
        match &solution {
            Solution::Consistent { free, equations } => {
                assert_eq!(free, &[1]);
                assert_eq!(equations.len(), 2);
                assert_eq!(equations[0].leader, 0);
                assert_eq!(equations[0].terms.len(), 1);
                assert_eq!(equations[0].terms[0].var, 1);
                assert!((equations[0].terms[0].coeff - -2.0).abs() < 1e-9);
                assert_eq!(equations[1].leader, 2);
                assert!(equations[1].terms.is_empty());
                assert!((equations[1].rhs - 5.0).abs() < 1e-9);
            }
            Solution::Inconsistent => panic!("expected consistent system"),
        }
    }

    #[test]
    fn test_negative_stored_coefficient_renders_with_plus() {
        // Row x1 - 2*x2 = 1: moved to the right-hand side the term becomes
        // +2.0000*X2.
        let reduced = Mat::from_rows(vec![vec![1.0, -2.0, 1.0]]);
        let solution = classify(&reduced);
        assert_eq!(
            solution.to_string(),
            "For all variables values X2\nX1=1.0000+2.0000*X2\n"
        );
    }

    #[test]
    fn test_parametric_variables_scan() {
        let reduced = Mat::from_rows(vec![
            vec![1.0, 0.0, 2.0, 0.0, 7.0],
            vec![0.0, 1.0, -1.0, 0.0, 3.0],
            vec![0.0, 0.0, 0.0, 1.0, 2.0],
        ]);
        assert_eq!(
            parametric_variables(&reduced),
            vec![false, false, true, false]
        );
    }

    #[test]
    fn test_zero_rows_emit_nothing() {
        let reduced = Mat::from_rows(vec![
            vec![1.0, 0.0, 4.0],
            vec![0.0, 0.0, 0.0],
        ]);
        match classify(&reduced) {
            Solution::Consistent { equations, .. } => assert_eq!(equations.len(), 1),
            Solution::Inconsistent => panic!("expected consistent system"),
        }
    }
}
