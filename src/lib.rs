//! # Implicant Logic
//!
//! Parses propositional formulas over single-letter variables, builds their
//! truth table and simplifies them to a sum of prime implicants.
//!
//! ## Overview
//!
//! The pipeline has four stages:
//!
//! 1. [`BoolExpr::parse`] - recursive-descent parsing into an immutable AST
//! 2. [`BoolExpr::variables`] - discovery of the (sorted) variable list
//! 3. [`TruthTable::build`] - evaluation under all `2^n` assignments, collecting minterms
//! 4. [`SumOfProducts::simplify`] - merge-round reduction to prime implicants
//!
//! [`analyze`] runs all of them in one call.
//!
//! ## Syntax
//!
//! | Token | Meaning |
//! |---|---|
//! | `a`..`z` | variable |
//! | `0`, `1` | constant |
//! | `!` | NOT, applies to one factor or parenthesised group |
//! | `&` | AND, binds tighter than the operators below |
//! | `\|`, `^`, `>` | OR, XOR, IMPLY |
//! | `(`, `)` | grouping |
//!
//! ## Example
//!
//! ```
//! use implicant_logic::{analyze, AnalysisConfig};
//!
//! # fn main() -> Result<(), implicant_logic::LogicError> {
//! let analysis = analyze("a > b", &AnalysisConfig::default())?;
//!
//! assert_eq!(analysis.variables(), &['a', 'b']);
//! assert_eq!(analysis.minterms(), &[0, 1, 3]);
//! assert_eq!(analysis.explicit_form(), Some("(a>b)"));
//! assert_eq!(analysis.simplified().unwrap().to_string(), "!a|b");
//! # Ok(())
//! # }
//! ```
//!
//! ## Working stage by stage
//!
//! ```
//! use implicant_logic::{BoolExpr, SumOfProducts, TruthTable};
//!
//! # fn main() -> Result<(), implicant_logic::LogicError> {
//! let expr = BoolExpr::parse("a^b")?;
//! let variables = expr.variables()?;
//! let table = TruthTable::build(&expr, &variables)?;
//! assert_eq!(table.minterms(), &[1, 2]);
//!
//! let sop = SumOfProducts::simplify(&variables, table.minterms())?;
//! assert_eq!(sop.to_string(), "a!b|!ab");
//! # Ok(())
//! # }
//! ```

pub mod cover;
pub mod error;
pub mod expression;
pub mod truth_table;

pub use cover::{prime_implicants, CoverError, Minterm, SumOfProducts, Term};
pub use error::LogicError;
pub use expression::{
    Assignment, BinaryOp, BoolExpr, BoolExprAst, EvalError, ExprNode, ExpressionParseError,
    ParseBoolExprError, VariableError, MAX_NESTING,
};
pub use truth_table::{Row, TruthTable, MAX_VARIABLES};

use log::info;

/// Configuration for [`analyze`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Remove all whitespace from the input before parsing
    pub strip_whitespace: bool,
    /// Capture the explicit-precedence rendering while building the table
    pub reconstruct: bool,
    /// Run the prime-implicant reduction
    pub simplify: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            strip_whitespace: true,
            reconstruct: true,
            simplify: true,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Everything computed for one expression
#[derive(Debug, Clone)]
pub struct Analysis {
    source: String,
    expr: BoolExpr,
    variables: Vec<char>,
    table: TruthTable,
    simplified: Option<SumOfProducts>,
}

impl Analysis {
    /// The text that was parsed (after whitespace stripping)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed expression
    pub fn expr(&self) -> &BoolExpr {
        &self.expr
    }

    /// Sorted variable list; index `i` is bit `i` of every term, counted from
    /// the most significant end
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The full truth table
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Rows where the expression is true
    pub fn minterms(&self) -> &[Minterm] {
        self.table.minterms()
    }

    /// Fully parenthesised form, if reconstruction was enabled
    pub fn explicit_form(&self) -> Option<&str> {
        self.table.explicit_form()
    }

    /// The simplified form, if simplification was enabled
    pub fn simplified(&self) -> Option<&SumOfProducts> {
        self.simplified.as_ref()
    }

    /// Prime implicants of the simplified form (empty for constants or when
    /// simplification was disabled)
    pub fn prime_implicants(&self) -> &[Term] {
        self.simplified
            .as_ref()
            .map(SumOfProducts::terms)
            .unwrap_or(&[])
    }
}

/// Parse, tabulate and simplify an expression
///
/// All errors are fatal and returned as soon as they occur; nothing is
/// computed past the failing stage.
pub fn analyze(input: &str, config: &AnalysisConfig) -> Result<Analysis, LogicError> {
    let source: String = if config.strip_whitespace {
        input.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        input.to_string()
    };

    let expr = BoolExpr::parse(&source)?;
    let variables = expr.variables()?;
    info!("variables: {:?}", variables);

    let table = if config.reconstruct {
        TruthTable::build_traced(&expr, &variables)?
    } else {
        TruthTable::build(&expr, &variables)?
    };

    let simplified = if config.simplify {
        let sop = SumOfProducts::simplify(&variables, table.minterms())?;
        info!("simplified: {}", sop);
        Some(sop)
    } else {
        None
    };

    Ok(Analysis {
        source,
        expr,
        variables,
        table,
        simplified,
    })
}
