//! Variable discovery
//!
//! The sorted variable list returned by [`BoolExpr::variables`] fixes the bit
//! order used everywhere downstream: truth-table columns, minterm bit positions
//! and the labels of prime implicants.

use super::error::VariableError;
use super::{BoolExpr, ExprNode};
use log::warn;

impl BoolExpr {
    /// Variable names in order of first appearance, without duplicates
    ///
    /// No validation is performed; see [`variables`](BoolExpr::variables).
    pub fn variable_names(&self) -> Vec<char> {
        let mut names = Vec::new();
        for (name, _) in self.variable_occurrences() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Collect, validate and sort the variables of the expression
    ///
    /// Every name must be a single lowercase ASCII letter; the first offending
    /// occurrence is reported as [`VariableError::IllegalIdentifier`]. The result
    /// is de-duplicated and sorted by code point.
    ///
    /// An expression without variables is legal and yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("c&a|b&a").unwrap();
    /// assert_eq!(expr.variables().unwrap(), vec!['a', 'b', 'c']);
    ///
    /// let upper = BoolExpr::parse("a&B").unwrap();
    /// assert!(upper.variables().is_err());
    /// ```
    pub fn variables(&self) -> Result<Vec<char>, VariableError> {
        if let Some((name, position)) = self
            .variable_occurrences()
            .into_iter()
            .find(|(name, _)| !name.is_ascii_lowercase())
        {
            return Err(VariableError::IllegalIdentifier { name, position });
        }

        let mut names = self.variable_names();
        names.sort_unstable();

        if names.is_empty() {
            warn!("expression has no variables; the truth table has a single row");
        }
        Ok(names)
    }

    /// Every variable occurrence with its input position, left before right
    fn variable_occurrences(&self) -> Vec<(char, usize)> {
        let mut occurrences = Vec::new();
        self.fold(|node| {
            if let ExprNode::Variable(name, position) = node {
                occurrences.push((name, position));
            }
        });
        occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_first_seen_order() {
        let expr = BoolExpr::parse("c&a|c&b").unwrap();
        assert_eq!(expr.variable_names(), vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let expr = BoolExpr::parse("z|(y&!z)|a").unwrap();
        assert_eq!(expr.variables().unwrap(), vec!['a', 'y', 'z']);
    }

    #[test]
    fn test_literals_contribute_nothing() {
        let expr = BoolExpr::parse("1&0").unwrap();
        assert_eq!(expr.variables().unwrap(), Vec::<char>::new());

        let expr = BoolExpr::parse("a&1").unwrap();
        assert_eq!(expr.variables().unwrap(), vec!['a']);
    }

    #[test]
    fn test_invert_is_traversed() {
        let expr = BoolExpr::parse("!(q|p)").unwrap();
        assert_eq!(expr.variables().unwrap(), vec!['p', 'q']);
    }

    #[test]
    fn test_uppercase_rejected_with_position() {
        let expr = BoolExpr::parse("a&(b|Q)").unwrap();
        assert_eq!(
            expr.variables(),
            Err(VariableError::IllegalIdentifier {
                name: 'Q',
                position: 5
            })
        );
    }

    #[test]
    fn test_builder_identifiers_checked() {
        let expr = BoolExpr::variable('7').and(&BoolExpr::variable('a'));
        assert!(matches!(
            expr.variables(),
            Err(VariableError::IllegalIdentifier { name: '7', .. })
        ));
    }
}
