//! Boolean expression types, parsing and evaluation
//!
//! This module provides the expression engine: a recursive-descent parser
//! for single-letter propositional formulas, the AST it produces, an evaluator
//! and the variable-discovery pass that fixes the bit order used by the truth
//! table and the simplifier.
//!
//! # Main Types
//!
//! - [`BoolExpr`] - An immutable parsed (or programmatically built) expression
//! - [`BoolExprAst`] - The tagged-union node type behind it
//! - [`Assignment`] - Variable values used for evaluation
//!
//! # Quick Start
//!
//! ```
//! use implicant_logic::{Assignment, BoolExpr};
//!
//! let expr = BoolExpr::parse("a>b").unwrap();
//! assert_eq!(expr.variables().unwrap(), vec!['a', 'b']);
//!
//! let mut assignment = Assignment::new();
//! assignment.insert('a', true);
//! assignment.insert('b', false);
//! assert_eq!(expr.evaluate(&assignment).unwrap(), false);
//! ```

mod ast;
mod cursor;
mod display;
pub mod error;
mod eval;
mod parser;
mod variables;

pub use ast::{BinaryOp, BoolExprAst, ExprNode};
pub use error::{EvalError, ExpressionParseError, ParseBoolExprError, VariableError};
pub use parser::MAX_NESTING;

use std::collections::HashMap;
use std::sync::Arc;

/// Values for the variables of an expression, keyed by variable name
pub type Assignment = HashMap<char, bool>;

/// A boolean expression
///
/// Wraps the root of an immutable AST. Cloning is cheap: the tree is shared
/// behind an `Arc`.
///
/// Expressions are usually obtained from [`BoolExpr::parse`]. The builder
/// methods ([`variable`](BoolExpr::variable), [`and`](BoolExpr::and), ...)
/// create nodes with position `0`, since they have no source text.
///
/// # Examples
///
/// ```
/// use implicant_logic::BoolExpr;
///
/// let a = BoolExpr::variable('a');
/// let b = BoolExpr::variable('b');
/// let built = a.and(&b.not()).or(&a.not().and(&b));
///
/// let parsed = BoolExpr::parse("a^b").unwrap();
/// assert!(built.equivalent_to(&parsed));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoolExpr {
    root: Arc<BoolExprAst>,
}

impl BoolExpr {
    pub(crate) fn from_ast(ast: BoolExprAst) -> Self {
        BoolExpr {
            root: Arc::new(ast),
        }
    }

    /// The root node of the AST
    pub fn ast(&self) -> &BoolExprAst {
        &self.root
    }

    /// Create a variable expression
    pub fn variable(name: char) -> Self {
        Self::from_ast(BoolExprAst::variable(name, 0))
    }

    /// Create a constant expression (`1` or `0`)
    pub fn constant(value: bool) -> Self {
        Self::from_ast(BoolExprAst::Literal(value))
    }

    /// Logical NOT
    pub fn not(&self) -> Self {
        Self::from_ast(BoolExprAst::invert(self.ast().clone()))
    }

    /// Combine two expressions with a binary connective
    pub fn binary(&self, op: BinaryOp, other: &BoolExpr) -> Self {
        Self::from_ast(BoolExprAst::binary(
            op,
            self.ast().clone(),
            other.ast().clone(),
            0,
        ))
    }

    /// Logical AND
    pub fn and(&self, other: &BoolExpr) -> Self {
        self.binary(BinaryOp::And, other)
    }

    /// Logical OR
    pub fn or(&self, other: &BoolExpr) -> Self {
        self.binary(BinaryOp::Or, other)
    }

    /// Exclusive OR
    pub fn xor(&self, other: &BoolExpr) -> Self {
        self.binary(BinaryOp::Xor, other)
    }

    /// Material implication `self > other`
    pub fn imply(&self, other: &BoolExpr) -> Self {
        self.binary(BinaryOp::Imply, other)
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Variable(..) | ExprNode::Literal(_) => 1,
            ExprNode::Invert(inner) => inner + 1,
            ExprNode::Binary(_, left, right) => left + right + 1,
        })
    }
}
