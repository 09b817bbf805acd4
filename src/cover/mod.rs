//! Prime implicants and sum-of-products simplification
//!
//! This module turns the minterm list of a truth table into a simplified
//! sum-of-products form:
//!
//! - [`Term`]: a product term over `{0, 1, -}`
//! - [`prime_implicants`]: the merge-round reduction of a minterm list
//! - [`SumOfProducts`]: the simplified result, with constant folding and rendering
//!
//! # Examples
//!
//! ```
//! use implicant_logic::{prime_implicants, SumOfProducts};
//!
//! let minterms = [0, 1, 3];
//! let primes = prime_implicants(2, &minterms).unwrap();
//! assert_eq!(primes.len(), 2);
//!
//! let sop = SumOfProducts::simplify(&['a', 'b'], &minterms).unwrap();
//! assert_eq!(sop.to_string(), "!a|b");
//! ```

mod cubes;
mod dnf;
pub mod error;
mod minimize;

pub use cubes::Term;
pub use dnf::SumOfProducts;
pub use error::CoverError;
pub use minimize::prime_implicants;

/// Index of a truth-table row, read as the bits of the assignment with the
/// first variable most significant
pub type Minterm = u64;
