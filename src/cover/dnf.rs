//! Simplified sum-of-products form
//!
//! [`SumOfProducts`] is the end product of the pipeline: either a constant or
//! a list of prime implicants labelled with the expression's variables.

use super::cubes::Term;
use super::error::CoverError;
use super::minimize::{distinct_minterms, prime_implicants, row_count};
use super::Minterm;
use crate::expression::BoolExpr;
use std::fmt;

/// Sum-of-products form of a boolean function
///
/// # Rendering
///
/// The [`Display`](fmt::Display) form follows the compact notation of the
/// simplifier: implicants are listed in reverse lexical order, each position
/// that is not `-` becomes its variable (prefixed with `!` for `0`), literals
/// of one implicant are written side by side and implicants are joined by `|`.
/// Constants print as `0` and `1`.
///
/// # Examples
///
/// ```
/// use implicant_logic::SumOfProducts;
///
/// let sop = SumOfProducts::simplify(&['a', 'b'], &[0, 1, 3]).unwrap();
/// assert_eq!(sop.to_string(), "!a|b");
///
/// let sop = SumOfProducts::simplify(&['a', 'b'], &[]).unwrap();
/// assert_eq!(sop.to_string(), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumOfProducts {
    /// The function is constant: no minterms (`false`) or every minterm (`true`)
    Constant(bool),
    /// A disjunction of prime implicants
    Implicants {
        /// Variable labels, one per term position
        variables: Vec<char>,
        /// Prime implicants in lexical order
        terms: Vec<Term>,
    },
}

impl SumOfProducts {
    /// Simplify the function that is true exactly on `minterms`
    ///
    /// `variables` gives the label for each bit position, first variable as the
    /// most significant bit. An empty minterm list is the constant `0`; a list
    /// covering all `2^n` rows is the constant `1`.
    pub fn simplify(variables: &[char], minterms: &[Minterm]) -> Result<Self, CoverError> {
        let num_vars = variables.len();
        let distinct = distinct_minterms(num_vars, minterms)?;

        if distinct.is_empty() {
            return Ok(SumOfProducts::Constant(false));
        }
        let covers_all = row_count(num_vars)
            .and_then(|rows| usize::try_from(rows).ok())
            .is_some_and(|rows| distinct.len() == rows);
        if covers_all {
            return Ok(SumOfProducts::Constant(true));
        }

        let terms = prime_implicants(num_vars, &distinct)?;
        Ok(SumOfProducts::Implicants {
            variables: variables.to_vec(),
            terms,
        })
    }

    /// Build the form from already computed terms
    ///
    /// Every term must have one position per variable. The terms are sorted.
    pub fn from_terms(variables: &[char], terms: Vec<Term>) -> Result<Self, CoverError> {
        if let Some(term) = terms.iter().find(|term| term.width() != variables.len()) {
            return Err(CoverError::WidthMismatch {
                width: term.width(),
                num_vars: variables.len(),
            });
        }
        if terms.is_empty() {
            return Ok(SumOfProducts::Constant(false));
        }

        let mut terms = terms;
        terms.sort();
        terms.dedup();
        Ok(SumOfProducts::Implicants {
            variables: variables.to_vec(),
            terms,
        })
    }

    /// The prime implicants, empty for constants
    pub fn terms(&self) -> &[Term] {
        match self {
            SumOfProducts::Constant(_) => &[],
            SumOfProducts::Implicants { terms, .. } => terms,
        }
    }

    /// The constant value, if the function is constant
    pub fn as_constant(&self) -> Option<bool> {
        match self {
            SumOfProducts::Constant(value) => Some(*value),
            SumOfProducts::Implicants { .. } => None,
        }
    }

    /// Check whether the form is true on a minterm
    pub fn covers(&self, minterm: Minterm) -> bool {
        match self {
            SumOfProducts::Constant(value) => *value,
            SumOfProducts::Implicants { terms, .. } => {
                terms.iter().any(|term| term.covers(minterm))
            }
        }
    }

    /// Convert to an expression tree
    ///
    /// Implicants are OR-ed in display order and the literals of each
    /// implicant are AND-ed. Both chains nest to the right, the way the parser
    /// builds them.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::{BoolExpr, SumOfProducts};
    ///
    /// let original = BoolExpr::parse("a^b").unwrap();
    /// let sop = SumOfProducts::simplify(&['a', 'b'], &[1, 2]).unwrap();
    /// assert!(sop.to_expr().equivalent_to(&original));
    /// assert_eq!(sop.to_expr().to_string(), "a&!b|!a&b");
    /// ```
    pub fn to_expr(&self) -> BoolExpr {
        let (variables, terms) = match self {
            SumOfProducts::Constant(value) => return BoolExpr::constant(*value),
            SumOfProducts::Implicants { variables, terms } => (variables, terms),
        };

        let products: Vec<BoolExpr> = terms
            .iter()
            .rev()
            .map(|term| {
                let literals: Vec<BoolExpr> = variables
                    .iter()
                    .zip(term.bits())
                    .filter_map(|(&name, bit)| {
                        bit.map(|value| {
                            let variable = BoolExpr::variable(name);
                            if value {
                                variable
                            } else {
                                variable.not()
                            }
                        })
                    })
                    .collect();
                fold_right(literals, BoolExpr::and).unwrap_or_else(|| BoolExpr::constant(true))
            })
            .collect();

        fold_right(products, BoolExpr::or).unwrap_or_else(|| BoolExpr::constant(false))
    }

    /// Render with explicit `&` so the text can be fed back to the parser
    pub fn to_parseable_string(&self) -> String {
        self.to_expr().to_string()
    }
}

/// Combine `items` as `x0 op (x1 op (... op xn))`
fn fold_right<F>(items: Vec<BoolExpr>, op: F) -> Option<BoolExpr>
where
    F: Fn(&BoolExpr, &BoolExpr) -> BoolExpr,
{
    items
        .into_iter()
        .rev()
        .reduce(|acc, item| op(&item, &acc))
}

impl fmt::Display for SumOfProducts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (variables, terms) = match self {
            SumOfProducts::Constant(value) => {
                return write!(f, "{}", if *value { "1" } else { "0" })
            }
            SumOfProducts::Implicants { variables, terms } => (variables, terms),
        };

        for (index, term) in terms.iter().rev().enumerate() {
            if index > 0 {
                write!(f, "|")?;
            }
            if term.dont_cares() == term.width() {
                write!(f, "1")?;
                continue;
            }
            for (name, bit) in variables.iter().zip(term.bits()) {
                match bit {
                    Some(true) => write!(f, "{}", name)?,
                    Some(false) => write!(f, "!{}", name)?,
                    None => {}
                }
            }
        }
        Ok(())
    }
}
