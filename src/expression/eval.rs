//! Evaluation and equivalence checking for boolean expressions

use super::ast::BoolExprAst;
use super::error::EvalError;
use super::{Assignment, BoolExpr};

impl BoolExpr {
    /// Evaluate the expression under the given assignment
    ///
    /// Both operands of every binary node are evaluated, left first, even when
    /// the left value already decides the result.
    ///
    /// Fails with [`EvalError::UnassignedVariable`] if the expression mentions
    /// a variable the assignment has no value for.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::{Assignment, BoolExpr};
    ///
    /// let expr = BoolExpr::parse("a^b").unwrap();
    /// let mut assignment = Assignment::new();
    /// assignment.insert('a', true);
    /// assignment.insert('b', true);
    /// assert_eq!(expr.evaluate(&assignment).unwrap(), false);
    ///
    /// assignment.remove(&'b');
    /// assert!(expr.evaluate(&assignment).is_err());
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        solve(self.ast(), assignment, None)
    }

    /// Evaluate the expression and render it with explicit precedence
    ///
    /// Returns the value together with a fully parenthesised form of the
    /// expression: every binary node is wrapped in parentheses and every
    /// inversion is written `!(...)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::{Assignment, BoolExpr};
    ///
    /// let expr = BoolExpr::parse("!a&b|c").unwrap();
    /// let assignment: Assignment = [('a', false), ('b', true), ('c', false)].into_iter().collect();
    /// let (value, explicit) = expr.evaluate_traced(&assignment).unwrap();
    /// assert!(value);
    /// assert_eq!(explicit, "((!(a)&b)|c)");
    /// ```
    pub fn evaluate_traced(&self, assignment: &Assignment) -> Result<(bool, String), EvalError> {
        let mut rendered = String::new();
        let value = solve(self.ast(), assignment, Some(&mut rendered))?;
        Ok((value, rendered))
    }

    /// Check if two expressions are logically equivalent
    ///
    /// Compares both truth tables over the union of their variables. The cost
    /// is exponential in the number of distinct variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::BoolExpr;
    ///
    /// let imply = BoolExpr::parse("a>b").unwrap();
    /// let expanded = BoolExpr::parse("!a|b").unwrap();
    /// assert!(imply.equivalent_to(&expanded));
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        let mut names = self.variable_names();
        names.extend(other.variable_names());
        names.sort_unstable();
        names.dedup();

        let mut assignment: Assignment = names.iter().map(|&name| (name, false)).collect();
        loop {
            match (self.evaluate(&assignment), other.evaluate(&assignment)) {
                (Ok(left), Ok(right)) if left == right => {}
                _ => return false,
            }

            // Step to the next assignment, odometer style
            let mut carried = true;
            for name in &names {
                if let Some(value) = assignment.get_mut(name) {
                    *value = !*value;
                    if *value {
                        carried = false;
                        break;
                    }
                }
            }
            if carried {
                return true;
            }
        }
    }
}

/// Evaluate `node`, appending its explicit-precedence text to `trace` if given
fn solve(
    node: &BoolExprAst,
    assignment: &Assignment,
    mut trace: Option<&mut String>,
) -> Result<bool, EvalError> {
    match node {
        BoolExprAst::Variable { name, .. } => {
            if let Some(out) = trace {
                out.push(*name);
            }
            assignment
                .get(name)
                .copied()
                .ok_or(EvalError::UnassignedVariable { name: *name })
        }
        BoolExprAst::Literal(value) => {
            if let Some(out) = trace {
                out.push(if *value { '1' } else { '0' });
            }
            Ok(*value)
        }
        BoolExprAst::Invert(inner) => {
            if let Some(out) = trace.as_deref_mut() {
                out.push_str("!(");
            }
            let value = solve(inner, assignment, trace.as_deref_mut())?;
            if let Some(out) = trace {
                out.push(')');
            }
            Ok(!value)
        }
        BoolExprAst::Binary {
            op, left, right, ..
        } => {
            if let Some(out) = trace.as_deref_mut() {
                out.push('(');
            }
            let left = solve(left, assignment, trace.as_deref_mut())?;
            if let Some(out) = trace.as_deref_mut() {
                out.push(op.symbol());
            }
            let right = solve(right, assignment, trace.as_deref_mut())?;
            if let Some(out) = trace {
                out.push(')');
            }
            Ok(op.apply(left, right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(pairs: &[(char, bool)]) -> Assignment {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_evaluate_connectives() {
        let expr = BoolExpr::parse("a&b").unwrap();
        assert!(expr.evaluate(&assignment(&[('a', true), ('b', true)])).unwrap());
        assert!(!expr.evaluate(&assignment(&[('a', true), ('b', false)])).unwrap());

        let expr = BoolExpr::parse("a|b").unwrap();
        assert!(!expr.evaluate(&assignment(&[('a', false), ('b', false)])).unwrap());
        assert!(expr.evaluate(&assignment(&[('a', false), ('b', true)])).unwrap());

        let expr = BoolExpr::parse("a>b").unwrap();
        assert!(expr.evaluate(&assignment(&[('a', false), ('b', false)])).unwrap());
        assert!(!expr.evaluate(&assignment(&[('a', true), ('b', false)])).unwrap());
    }

    #[test]
    fn test_evaluate_literals() {
        let empty = Assignment::new();
        assert!(BoolExpr::parse("1").unwrap().evaluate(&empty).unwrap());
        assert!(!BoolExpr::parse("1&0").unwrap().evaluate(&empty).unwrap());
        assert!(BoolExpr::parse("!0").unwrap().evaluate(&empty).unwrap());
    }

    #[test]
    fn test_unassigned_variable_fails_loudly() {
        let expr = BoolExpr::parse("a|b").unwrap();
        let result = expr.evaluate(&assignment(&[('a', true)]));
        assert_eq!(result, Err(EvalError::UnassignedVariable { name: 'b' }));
    }

    #[test]
    fn test_imply_still_visits_right_operand() {
        // A false antecedent decides the result, yet the right side is still
        // resolved, so a missing right-hand variable is reported
        let expr = BoolExpr::parse("a>b").unwrap();
        let result = expr.evaluate(&assignment(&[('a', false)]));
        assert_eq!(result, Err(EvalError::UnassignedVariable { name: 'b' }));

        let expr = BoolExpr::parse("a|b").unwrap();
        let result = expr.evaluate(&assignment(&[('a', true)]));
        assert!(result.is_err());
    }

    #[test]
    fn test_traced_rendering_wraps_every_node() {
        let values = assignment(&[('a', true), ('b', false), ('c', true)]);

        let (_, text) = BoolExpr::parse("a|b|c")
            .unwrap()
            .evaluate_traced(&values)
            .unwrap();
        assert_eq!(text, "(a|(b|c))");

        let (_, text) = BoolExpr::parse("!(a&b)>c")
            .unwrap()
            .evaluate_traced(&values)
            .unwrap();
        assert_eq!(text, "(!((a&b))>c)");

        let (value, text) = BoolExpr::parse("a").unwrap().evaluate_traced(&values).unwrap();
        assert!(value);
        assert_eq!(text, "a");
    }

    #[test]
    fn test_traced_and_plain_agree() {
        let expr = BoolExpr::parse("(a^b)&!c|a>c").unwrap();
        for bits in 0..8u8 {
            let values = assignment(&[('a', bits & 4 != 0), ('b', bits & 2 != 0), ('c', bits & 1 != 0)]);
            let plain = expr.evaluate(&values).unwrap();
            let (traced, _) = expr.evaluate_traced(&values).unwrap();
            assert_eq!(plain, traced);
        }
    }

    #[test]
    fn test_equivalence() {
        let xor = BoolExpr::parse("a^b").unwrap();
        let expanded = BoolExpr::parse("a&!b|!a&b").unwrap();
        assert!(xor.equivalent_to(&expanded));

        let or = BoolExpr::parse("a|b").unwrap();
        assert!(!xor.equivalent_to(&or));
    }

    #[test]
    fn test_equivalence_with_disjoint_variables() {
        let tautology = BoolExpr::parse("a|!a").unwrap();
        let one = BoolExpr::parse("1").unwrap();
        assert!(tautology.equivalent_to(&one));

        let a = BoolExpr::parse("a").unwrap();
        let b = BoolExpr::parse("b").unwrap();
        assert!(!a.equivalent_to(&b));
    }
}
