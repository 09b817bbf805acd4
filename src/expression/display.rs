//! Display and Debug formatting for boolean expressions

use super::ast::BoolExprAst;
use super::BoolExpr;
use std::fmt;

/// Which side of a binary parent a node is rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn needs_parens(child: &BoolExprAst, parent_precedence: u8, side: Side) -> bool {
    match child {
        BoolExprAst::Binary { op, .. } => match side {
            // Binary levels fold to the right, so a left operand of the same
            // level must be grouped to keep its shape
            Side::Left => op.precedence() <= parent_precedence,
            Side::Right => op.precedence() < parent_precedence,
        },
        _ => false,
    }
}

fn fmt_node(node: &BoolExprAst, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match node {
        BoolExprAst::Variable { name, .. } => write!(f, "{}", name),
        BoolExprAst::Literal(value) => write!(f, "{}", if *value { "1" } else { "0" }),
        BoolExprAst::Invert(inner) => {
            write!(f, "!")?;
            match inner.as_ref() {
                BoolExprAst::Variable { .. } | BoolExprAst::Literal(_) => fmt_node(inner, f),
                _ => {
                    write!(f, "(")?;
                    fmt_node(inner, f)?;
                    write!(f, ")")
                }
            }
        }
        BoolExprAst::Binary {
            op, left, right, ..
        } => {
            fmt_operand(left, op.precedence(), Side::Left, f)?;
            write!(f, "{}", op)?;
            fmt_operand(right, op.precedence(), Side::Right, f)
        }
    }
}

fn fmt_operand(
    node: &BoolExprAst,
    parent_precedence: u8,
    side: Side,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if needs_parens(node, parent_precedence, side) {
        write!(f, "(")?;
        fmt_node(node, f)?;
        write!(f, ")")
    } else {
        fmt_node(node, f)
    }
}

/// Formats expressions with the minimal parentheses needed to re-parse to the
/// same tree, in the input syntax (`!`, `&`, `|`, `^`, `>`).
///
/// # Examples
///
/// ```
/// use implicant_logic::BoolExpr;
///
/// let expr = BoolExpr::parse("((a&b))|(c)").unwrap();
/// assert_eq!(format!("{}", expr), "a&b|c");
///
/// let expr = BoolExpr::parse("(a|b)&!(c^d)").unwrap();
/// assert_eq!(format!("{}", expr), "(a|b)&!(c^d)");
/// ```
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self.ast(), f)
    }
}

/// Delegates to the `Display` implementation
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
