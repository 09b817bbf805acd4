//! Product terms over `{0, 1, -}`
//!
//! A [`Term`] is a fixed-width bit-vector where each position is `Some(false)`
//! (`0`), `Some(true)` (`1`) or `None` (`-`, don't care). Position 0 belongs to
//! the first variable in sorted order, which is also the most significant bit
//! of a minterm.

use super::error::CoverError;
use super::Minterm;
use crate::truth_table::index_bits;
use std::fmt;
use std::str::FromStr;

/// A product term (implicant) over `{0, 1, -}`
///
/// The derived ordering is lexicographic with `-` < `0` < `1`, which matches
/// byte order on the rendered strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    bits: Box<[Option<bool>]>,
}

impl Term {
    /// Create a term from explicit positions
    pub fn new(bits: &[Option<bool>]) -> Self {
        Term { bits: bits.into() }
    }

    /// Expand a minterm into a `width`-bit term, most significant bit first
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::Term;
    ///
    /// assert_eq!(Term::from_minterm(1, 3).to_string(), "001");
    /// assert_eq!(Term::from_minterm(6, 3).to_string(), "110");
    /// ```
    pub fn from_minterm(minterm: Minterm, width: usize) -> Self {
        let bits: Vec<Option<bool>> = index_bits(minterm, width).into_iter().map(Some).collect();
        Term { bits: bits.into() }
    }

    /// Get the positions of this term
    ///
    /// - `Some(false)` - the variable must be 0
    /// - `Some(true)` - the variable must be 1
    /// - `None` - don't care
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Number of positions
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Number of don't-care positions
    pub fn dont_cares(&self) -> usize {
        self.bits.iter().filter(|bit| bit.is_none()).count()
    }

    /// Number of `1` positions
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|bit| **bit == Some(true)).count()
    }

    /// Combine two terms that differ in exactly one position
    ///
    /// The differing position must hold `0` in one term and `1` in the other;
    /// a `-` only matches another `-`. The result copies the shared positions
    /// and puts `-` at the differing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::Term;
    ///
    /// let a: Term = "010".parse().unwrap();
    /// let b: Term = "011".parse().unwrap();
    /// assert_eq!(a.combine(&b).unwrap().to_string(), "01-");
    ///
    /// let c: Term = "100".parse().unwrap();
    /// assert!(a.combine(&c).is_none());
    /// ```
    pub fn combine(&self, other: &Term) -> Option<Term> {
        if self.width() != other.width() {
            return None;
        }

        let mut differing = None;
        for (position, (mine, theirs)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if mine == theirs {
                continue;
            }
            if differing.is_some() || mine.is_none() || theirs.is_none() {
                return None;
            }
            differing = Some(position);
        }

        let position = differing?;
        let mut bits = self.bits.clone();
        bits[position] = None;
        Some(Term { bits })
    }

    /// Check whether the term covers a minterm
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.bits
            .iter()
            .zip(index_bits(minterm, self.width()))
            .all(|(bit, value)| bit.map_or(true, |bit| bit == value))
    }

    /// All minterms represented by this term, ascending
    ///
    /// # Examples
    ///
    /// ```
    /// use implicant_logic::Term;
    ///
    /// let term: Term = "-1-".parse().unwrap();
    /// assert_eq!(term.minterms(), vec![2, 3, 6, 7]);
    /// ```
    pub fn minterms(&self) -> Vec<Minterm> {
        let mut minterms: Vec<Minterm> = vec![0];
        for bit in self.bits.iter() {
            minterms = match bit {
                Some(value) => minterms
                    .into_iter()
                    .map(|m| (m << 1) | Minterm::from(*value))
                    .collect(),
                None => minterms
                    .into_iter()
                    .flat_map(|m| [m << 1, (m << 1) | 1])
                    .collect(),
            };
        }
        minterms.sort_unstable();
        minterms
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            let symbol = match bit {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Term {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(CoverError::InvalidTermSymbol { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Term { bits: bits.into() })
    }
}
