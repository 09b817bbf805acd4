//! Truth-table enumeration
//!
//! Enumerates every assignment of an expression's variables in counting order
//! and records the indices (minterms) where the expression is true.
//!
//! Row `i` assigns the bits of `i`, most significant first, to the variables in
//! sorted order: with variables `[a, b]`, row 1 is `a=0, b=1` and row 2 is
//! `a=1, b=0`. The first variable is therefore the slowest-changing column.

use crate::cover::Minterm;
use crate::expression::{Assignment, BoolExpr, EvalError};
use log::{debug, info};
use std::fmt;

/// Largest number of variables a table can be built for
pub const MAX_VARIABLES: usize = 26;

/// One row of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Enumeration index of the row
    pub index: Minterm,
    /// Value of each variable, in the table's variable order
    pub inputs: Vec<bool>,
    /// Value of the expression
    pub output: bool,
}

/// Expand `index` into `width` bits, most significant first
pub fn index_bits(index: Minterm, width: usize) -> Vec<bool> {
    (0..width)
        .map(|position| {
            let shift = width - 1 - position;
            let shifted = u32::try_from(shift)
                .ok()
                .and_then(|shift| index.checked_shr(shift))
                .unwrap_or(0);
            shifted & 1 == 1
        })
        .collect()
}

/// The complete truth table of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    outputs: Vec<bool>,
    minterms: Vec<Minterm>,
    explicit: Option<String>,
}

impl TruthTable {
    /// Evaluate `expr` under all `2^n` assignments of `variables`
    ///
    /// `variables` is normally the result of [`BoolExpr::variables`]. Fails if
    /// the expression refers to a variable missing from the list, or if the
    /// list is longer than [`MAX_VARIABLES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::{BoolExpr, TruthTable};
    ///
    /// let expr = BoolExpr::parse("a>b").unwrap();
    /// let table = TruthTable::build(&expr, &expr.variables().unwrap()).unwrap();
    /// assert_eq!(table.minterms(), &[0, 1, 3]);
    /// ```
    pub fn build(expr: &BoolExpr, variables: &[char]) -> Result<Self, EvalError> {
        Self::enumerate(expr, variables, false)
    }

    /// Like [`build`](TruthTable::build), and also capture the explicit-precedence
    /// rendering of the expression while evaluating the first row
    pub fn build_traced(expr: &BoolExpr, variables: &[char]) -> Result<Self, EvalError> {
        Self::enumerate(expr, variables, true)
    }

    fn enumerate(expr: &BoolExpr, variables: &[char], traced: bool) -> Result<Self, EvalError> {
        if variables.len() > MAX_VARIABLES {
            return Err(EvalError::TooManyVariables {
                count: variables.len(),
                max: MAX_VARIABLES,
            });
        }

        let width = variables.len();
        let num_rows: Minterm = 1 << width;
        debug!("enumerating {} rows over {:?}", num_rows, variables);

        let mut outputs = Vec::with_capacity(num_rows as usize);
        let mut minterms = Vec::new();
        let mut explicit = None;
        let mut assignment = Assignment::with_capacity(width);

        for index in 0..num_rows {
            for (&name, bit) in variables.iter().zip(index_bits(index, width)) {
                assignment.insert(name, bit);
            }

            let output = if traced && index == 0 {
                let (output, rendered) = expr.evaluate_traced(&assignment)?;
                explicit = Some(rendered);
                output
            } else {
                expr.evaluate(&assignment)?
            };

            if output {
                minterms.push(index);
            }
            outputs.push(output);
        }

        info!(
            "truth table: {} rows, {} minterms",
            outputs.len(),
            minterms.len()
        );
        Ok(TruthTable {
            variables: variables.to_vec(),
            outputs,
            minterms,
            explicit,
        })
    }

    /// Variables in column order
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Number of rows, `2^n`
    pub fn num_rows(&self) -> usize {
        self.outputs.len()
    }

    /// Indices of the rows where the expression is true, ascending
    pub fn minterms(&self) -> &[Minterm] {
        &self.minterms
    }

    /// Value of the expression in row `index`
    pub fn output(&self, index: Minterm) -> Option<bool> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.outputs.get(index).copied())
    }

    /// The explicit-precedence rendering captured by [`build_traced`](TruthTable::build_traced)
    pub fn explicit_form(&self) -> Option<&str> {
        self.explicit.as_deref()
    }

    /// Iterate over all rows in enumeration order
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        let width = self.variables.len();
        self.outputs
            .iter()
            .zip(0..)
            .map(move |(&output, index)| Row {
                index,
                inputs: index_bits(index, width),
                output,
            })
    }
}

/// Renders a header of variable names and a `q` result column, a rule, and
/// one line of `0`/`1` cells per row.
///
/// # Examples
///
/// ```
/// use implicant_logic::{BoolExpr, TruthTable};
///
/// let expr = BoolExpr::parse("a&b").unwrap();
/// let table = TruthTable::build(&expr, &['a', 'b']).unwrap();
/// let text = table.to_string();
/// let lines: Vec<&str> = text.lines().collect();
/// assert_eq!(lines[0], "a | b | q");
/// assert_eq!(lines[5], "1 | 1 | 1");
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = self.variables.iter().map(|v| v.to_string()).collect();
        header.push("q".to_string());
        let header = header.join(" | ");
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.len()))?;

        for row in self.rows() {
            let mut cells: Vec<&str> = row
                .inputs
                .iter()
                .map(|&bit| if bit { "1" } else { "0" })
                .collect();
            cells.push(if row.output { "1" } else { "0" });
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}
