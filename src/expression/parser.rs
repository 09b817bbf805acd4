//! Recursive-descent parser for boolean expressions
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! Expr     := AndExpr ( ('|' | '^' | '>') Expr )*
//! AndExpr  := Factor ( '&' AndExpr )*
//! Factor   := '!'? ( Variable | Literal | '(' Expr ')' )
//! Variable := letter
//! Literal  := '0' | '1'
//! ```
//!
//! Both binary levels take their right operand by re-entering the same rule,
//! so chains fold to the right: `a|b^c` is `a|(b^c)`. A factor leaves the
//! cursor on its own last character; the binary levels peek at `next` to decide
//! whether the expression continues.
//!
//! Recursion depth is capped at [`MAX_NESTING`] so that long chains and deep
//! parentheses fail with an error instead of exhausting the stack.

use super::ast::{BinaryOp, BoolExprAst};
use super::cursor::Cursor;
use super::error::{ExpressionParseError, ParseBoolExprError};
use super::BoolExpr;
use log::debug;
use std::sync::Arc;

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Supported syntax:
    /// - single letters for variables, `0` and `1` for constants
    /// - `!` (NOT) applied to one factor or parenthesised group
    /// - `&` (AND), binding tighter than
    /// - `|` (OR), `^` (XOR) and `>` (IMPLY)
    ///
    /// The input must not contain whitespace; strip it first (the
    /// [`analyze`](crate::analyze) pipeline does this when configured to).
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("!a&b|c").unwrap();
    /// assert_eq!(expr.to_string(), "!a&b|c");
    ///
    /// assert!(BoolExpr::parse("a&").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseBoolExprError> {
        let mut parser = Parser::new(input);
        let ast = parser
            .parse_complete()
            .map_err(|error| ParseBoolExprError::Syntax {
                error,
                input: Arc::from(input),
            })?;
        debug!("parsed {:?} into {:?}", input, ast);
        Ok(BoolExpr::from_ast(ast))
    }
}

/// Deepest rule nesting the parser enters before giving up
///
/// Every operand of a `|`, `^`, `>` or `&` chain and every parenthesised
/// group costs at least one level.
pub const MAX_NESTING: usize = 512;

struct Parser {
    cursor: Cursor,
    depth: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Parser {
            cursor: Cursor::new(input),
            depth: 0,
        }
    }

    /// Enter `rule` one level deeper, failing once [`MAX_NESTING`] is reached
    fn nested<T>(
        &mut self,
        rule: fn(&mut Self) -> Result<T, ExpressionParseError>,
    ) -> Result<T, ExpressionParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ExpressionParseError::NestingTooDeep {
                position: self.cursor.position(),
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Parse a whole expression and reject anything left over
    fn parse_complete(&mut self) -> Result<BoolExprAst, ExpressionParseError> {
        let expr = self.nested(Self::parse_expr)?;
        if let Some(found) = self.cursor.next() {
            return Err(ExpressionParseError::TrailingInput {
                found,
                position: self.cursor.position() + 1,
            });
        }
        Ok(expr)
    }

    fn top_level_op(ch: Option<char>) -> Option<BinaryOp> {
        match ch.and_then(BinaryOp::from_char) {
            Some(BinaryOp::And) | None => None,
            op => op,
        }
    }

    fn and_op(ch: Option<char>) -> Option<BinaryOp> {
        match ch.and_then(BinaryOp::from_char) {
            Some(BinaryOp::And) => Some(BinaryOp::And),
            _ => None,
        }
    }

    /// `Expr := AndExpr ( ('|' | '^' | '>') Expr )*`
    fn parse_expr(&mut self) -> Result<BoolExprAst, ExpressionParseError> {
        let mut left = self.nested(Self::parse_and_expr)?;

        if Self::top_level_op(self.cursor.next()).is_some() {
            self.cursor.advance();
        }

        while let Some(op) = Self::top_level_op(self.cursor.current()) {
            let position = self.cursor.position();
            self.cursor.advance();
            let right = self.nested(Self::parse_expr)?;
            left = BoolExprAst::binary(op, left, right, position);

            if Self::top_level_op(self.cursor.next()).is_some() {
                self.cursor.advance();
            }
        }

        Ok(left)
    }

    /// `AndExpr := Factor ( '&' AndExpr )*`
    fn parse_and_expr(&mut self) -> Result<BoolExprAst, ExpressionParseError> {
        let mut left = self.parse_factor()?;

        if Self::and_op(self.cursor.next()).is_some() {
            self.cursor.advance();
        }

        while let Some(op) = Self::and_op(self.cursor.current()) {
            let position = self.cursor.position();
            self.cursor.advance();
            let right = self.nested(Self::parse_and_expr)?;
            left = BoolExprAst::binary(op, left, right, position);

            if Self::and_op(self.cursor.next()).is_some() {
                self.cursor.advance();
            }
        }

        Ok(left)
    }

    /// `Factor := '!'? ( Variable | Literal | '(' Expr ')' )`
    ///
    /// A negated literal folds into the opposite literal.
    fn parse_factor(&mut self) -> Result<BoolExprAst, ExpressionParseError> {
        let negate = self.cursor.current() == Some('!');
        if negate {
            self.cursor.advance();
        }

        let expression = match self.cursor.current() {
            Some(digit @ ('0' | '1')) => return Ok(BoolExprAst::Literal((digit == '1') != negate)),
            Some(letter) if letter.is_ascii_alphabetic() => {
                BoolExprAst::variable(letter, self.cursor.position())
            }
            Some('(') => self.nested(Self::parse_subexpression)?,
            Some(found) => {
                return Err(ExpressionParseError::UnexpectedCharacter {
                    found,
                    position: self.cursor.position(),
                })
            }
            None => {
                return Err(ExpressionParseError::UnexpectedEnd {
                    position: self.cursor.position(),
                })
            }
        };

        if negate {
            Ok(BoolExprAst::invert(expression))
        } else {
            Ok(expression)
        }
    }

    /// `'(' Expr ')'`, entered with the cursor on `(`
    fn parse_subexpression(&mut self) -> Result<BoolExprAst, ExpressionParseError> {
        self.cursor.advance();
        let expr = self.nested(Self::parse_expr)?;
        self.cursor.advance();
        match self.cursor.current() {
            Some(')') => Ok(expr),
            found => Err(ExpressionParseError::MissingClosingParen {
                found,
                position: self.cursor.position(),
            }),
        }
    }
}
