//! AST representation and tree traversal operations
//!
//! This module contains the AST node types produced by the parser and the fold
//! operation used by the variable collector and other analyses.

use super::BoolExpr;
use std::fmt;

/// Binary connective of a [`BoolExprAst::Binary`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Logical OR (`|`)
    Or,
    /// Exclusive OR (`^`)
    Xor,
    /// Logical AND (`&`)
    And,
    /// Material implication (`>`)
    Imply,
}

impl BinaryOp {
    /// Map an operator character to its connective
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '|' => Some(BinaryOp::Or),
            '^' => Some(BinaryOp::Xor),
            '&' => Some(BinaryOp::And),
            '>' => Some(BinaryOp::Imply),
            _ => None,
        }
    }

    /// The operator character used in expression text
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Or => '|',
            BinaryOp::Xor => '^',
            BinaryOp::And => '&',
            BinaryOp::Imply => '>',
        }
    }

    /// Binding strength: `&` binds tighter than `|`, `^` and `>`
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or | BinaryOp::Xor | BinaryOp::Imply => 1,
            BinaryOp::And => 2,
        }
    }

    /// Apply the connective to two already evaluated operands
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::Or => left || right,
            BinaryOp::And => left && right,
            BinaryOp::Xor => left != right,
            BinaryOp::Imply => !left || right,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// AST representation of a boolean expression
///
/// Every node carries exactly one variant by construction. Positions are
/// zero-based character indices into the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolExprAst {
    /// Reference to an input variable
    Variable {
        /// Single-letter variable name
        name: char,
        /// Index of the letter in the input
        position: usize,
    },
    /// Constant `0` or `1`
    Literal(bool),
    /// Logical NOT of a subexpression
    Invert(Box<BoolExprAst>),
    /// Binary connective
    Binary {
        /// Which connective
        op: BinaryOp,
        /// Left operand
        left: Box<BoolExprAst>,
        /// Right operand
        right: Box<BoolExprAst>,
        /// Index of the operator character in the input
        position: usize,
    },
}

impl BoolExprAst {
    pub(crate) fn variable(name: char, position: usize) -> Self {
        BoolExprAst::Variable { name, position }
    }

    pub(crate) fn binary(
        op: BinaryOp,
        left: BoolExprAst,
        right: BoolExprAst,
        position: usize,
    ) -> Self {
        BoolExprAst::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            position,
        }
    }

    pub(crate) fn invert(inner: BoolExprAst) -> Self {
        BoolExprAst::Invert(Box::new(inner))
    }
}

/// Node type for expression tree folding
///
/// Represents the structure of one node with the already folded results of
/// its children. Used with [`BoolExpr::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<T> {
    /// A variable with its name and input position
    Variable(char, usize),
    /// A constant boolean value
    Literal(bool),
    /// Logical NOT with the result from the inner subtree
    Invert(T),
    /// Binary connective with results from left and right subtrees
    Binary(BinaryOp, T, T),
}

impl BoolExpr {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// Children are visited left before right, so a fold that appends to a
    /// list sees variables in textual order.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::{BoolExpr, ExprNode};
    ///
    /// let expr = BoolExpr::parse("a&(b|!c)").unwrap();
    /// let op_count = expr.fold(|node| match node {
    ///     ExprNode::Variable(..) | ExprNode::Literal(_) => 0,
    ///     ExprNode::Invert(inner) => inner + 1,
    ///     ExprNode::Binary(_, l, r) => l + r + 1,
    /// });
    /// assert_eq!(op_count, 3);
    /// ```
    pub fn fold<T, F>(&self, mut f: F) -> T
    where
        F: FnMut(ExprNode<T>) -> T,
    {
        Self::fold_ast(self.ast(), &mut f)
    }

    fn fold_ast<T, F>(ast: &BoolExprAst, f: &mut F) -> T
    where
        F: FnMut(ExprNode<T>) -> T,
    {
        match ast {
            BoolExprAst::Variable { name, position } => f(ExprNode::Variable(*name, *position)),
            BoolExprAst::Literal(value) => f(ExprNode::Literal(*value)),
            BoolExprAst::Invert(inner) => {
                let inner_result = Self::fold_ast(inner, f);
                f(ExprNode::Invert(inner_result))
            }
            BoolExprAst::Binary {
                op, left, right, ..
            } => {
                let left_result = Self::fold_ast(left, f);
                let right_result = Self::fold_ast(right, f);
                f(ExprNode::Binary(*op, left_result, right_result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_truth_tables() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        let or: Vec<bool> = cases.iter().map(|&(l, r)| BinaryOp::Or.apply(l, r)).collect();
        let and: Vec<bool> = cases.iter().map(|&(l, r)| BinaryOp::And.apply(l, r)).collect();
        let xor: Vec<bool> = cases.iter().map(|&(l, r)| BinaryOp::Xor.apply(l, r)).collect();
        let imply: Vec<bool> = cases
            .iter()
            .map(|&(l, r)| BinaryOp::Imply.apply(l, r))
            .collect();

        assert_eq!(or, vec![false, true, true, true]);
        assert_eq!(and, vec![false, false, false, true]);
        assert_eq!(xor, vec![false, true, true, false]);
        assert_eq!(imply, vec![true, true, false, true]);
    }

    #[test]
    fn test_binary_op_symbols_round_trip() {
        for op in [BinaryOp::Or, BinaryOp::Xor, BinaryOp::And, BinaryOp::Imply] {
            assert_eq!(BinaryOp::from_char(op.symbol()), Some(op));
        }
        assert_eq!(BinaryOp::from_char('!'), None);
        assert_eq!(BinaryOp::from_char('('), None);
    }

    #[test]
    fn test_precedence_classes() {
        assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
        assert_eq!(BinaryOp::Or.precedence(), BinaryOp::Xor.precedence());
        assert_eq!(BinaryOp::Or.precedence(), BinaryOp::Imply.precedence());
    }

    #[test]
    fn test_fold_visits_left_before_right() {
        let expr = BoolExpr::parse("c|a&b").unwrap();
        let mut seen = Vec::new();
        expr.fold(|node| {
            if let ExprNode::Variable(name, _) = node {
                seen.push(name);
            }
        });
        assert_eq!(seen, vec!['c', 'a', 'b']);
    }
}
