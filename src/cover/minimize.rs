//! Prime-implicant reduction
//!
//! Terms are merged pairwise in rounds. Two terms merge when they differ in
//! exactly one `0`/`1` position; the merged term has `-` there. A term that
//! merged with anything is dropped from the round, a term that merged with
//! nothing is prime. The de-duplicated merges feed the next round until a
//! round produces no merges or a single term is left.
//!
//! No covering step follows: every prime found is kept, even when the others
//! already cover its minterms.

use super::cubes::Term;
use super::error::CoverError;
use super::Minterm;
use log::debug;
use std::collections::HashSet;

/// `2^num_vars`, or `None` when it does not fit in a [`Minterm`]
pub(crate) fn row_count(num_vars: usize) -> Option<Minterm> {
    u32::try_from(num_vars)
        .ok()
        .and_then(|shift| (1 as Minterm).checked_shl(shift))
}

/// Check the range of every minterm and drop repeats, keeping first-seen order
pub(crate) fn distinct_minterms(
    num_vars: usize,
    minterms: &[Minterm],
) -> Result<Vec<Minterm>, CoverError> {
    let limit = row_count(num_vars);
    let mut seen = HashSet::new();
    let mut distinct = Vec::with_capacity(minterms.len());
    for &minterm in minterms {
        if limit.is_some_and(|limit| minterm >= limit) {
            return Err(CoverError::MintermOutOfRange { minterm, num_vars });
        }
        if seen.insert(minterm) {
            distinct.push(minterm);
        }
    }
    Ok(distinct)
}

/// Compute the prime implicants of a minterm list
///
/// Each minterm is expanded to a `num_vars`-bit term, the terms are reduced
/// and the resulting primes are returned in lexical order (`-` < `0` < `1`).
/// Repeated minterms count once; a minterm outside `0..2^num_vars` is an error.
///
/// An empty list yields no implicants.
///
/// # Examples
///
/// ```
/// use implicant_logic::prime_implicants;
///
/// // a>b over [a, b] is true in rows 0, 1 and 3
/// let primes = prime_implicants(2, &[0, 1, 3]).unwrap();
/// let rendered: Vec<String> = primes.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered, vec!["-1", "0-"]);
/// ```
pub fn prime_implicants(num_vars: usize, minterms: &[Minterm]) -> Result<Vec<Term>, CoverError> {
    let terms: Vec<Term> = distinct_minterms(num_vars, minterms)?
        .into_iter()
        .map(|minterm| Term::from_minterm(minterm, num_vars))
        .collect();

    let mut primes = reduce(terms);
    primes.sort();
    Ok(primes)
}

/// Run merge rounds until no merge happens, collecting the primes of each round
fn reduce(terms: Vec<Term>) -> Vec<Term> {
    let mut primes = Vec::new();
    let mut current = terms;
    let mut round = 0;

    while current.len() > 1 {
        round += 1;
        let (round_primes, merged) = merge_round(&current);
        debug!(
            "round {}: {} terms -> {} primes, {} merged",
            round,
            current.len(),
            round_primes.len(),
            merged.len()
        );
        primes.extend(round_primes);

        if merged.is_empty() {
            return primes;
        }
        current = merged;
    }

    // A lone term cannot merge with anything
    primes.extend(current);
    primes
}

/// Compare every pair of terms that could merge
///
/// Two terms can only merge when their counts of `1` positions differ by
/// exactly one, so terms are bucketed by that count and only neighbouring
/// buckets are compared.
///
/// Returns the terms that merged with nothing and the de-duplicated merges,
/// in discovery order.
fn merge_round(terms: &[Term]) -> (Vec<Term>, Vec<Term>) {
    let max_ones = terms.iter().map(Term::ones).max().unwrap_or(0);
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); max_ones + 1];
    for (index, term) in terms.iter().enumerate() {
        buckets[term.ones()].push(index);
    }

    let mut used = vec![false; terms.len()];
    let mut merged = Vec::new();
    let mut seen = HashSet::new();

    for pair in buckets.windows(2) {
        for &i in &pair[0] {
            for &j in &pair[1] {
                if let Some(term) = terms[i].combine(&terms[j]) {
                    used[i] = true;
                    used[j] = true;
                    if seen.insert(term.clone()) {
                        merged.push(term);
                    }
                }
            }
        }
    }

    let primes = terms
        .iter()
        .zip(used)
        .filter(|(_, used)| !used)
        .map(|(term, _)| term.clone())
        .collect();
    (primes, merged)
}
