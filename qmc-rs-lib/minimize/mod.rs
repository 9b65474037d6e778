//! The minimization pipeline: prime implicant generation, coverage
//! tabulation, essential implicant extraction, redundancy elimination, and
//! greedy minimum-cover selection. Each stage produces a new immutable
//! collection consumed by the next; no shared state crosses stage boundaries.

pub mod expression;
pub mod options;
pub mod reader;

mod cover;
mod generator;
mod table;

pub use expression::SumOfProducts;
pub use options::MinimizerOptions;
pub use reader::MintermReader;

use tracing::debug;

use crate::error::MinimizeError;
use crate::term::{Symbol, Term};
use crate::Result;

use table::CoverageTable;

/// Runs the Quine-McCluskey tabulation method over a set of minterms.
pub struct Minimizer {
    options: MinimizerOptions,
}

impl Minimizer {
    #[must_use]
    pub fn new(options: MinimizerOptions) -> Minimizer {
        Minimizer { options }
    }

    /// Minimize the function that is true exactly on the given minterms.
    ///
    /// Minterms are canonicalized first (sorted ascending, duplicates
    /// removed), so the same minterm *set* yields a byte-identical expression
    /// regardless of input order.
    ///
    /// # Errors
    /// Fails on an empty minterm set, on a minterm whose width disagrees with
    /// the configured variable count or which carries a don't-care position,
    /// and on an internal coverage inconsistency.
    pub fn minimize(&self, minterms: &[Term]) -> Result<SumOfProducts> {
        let variable_count = self.options.variable_count;
        if minterms.is_empty() {
            return Err(MinimizeError::EmptyInput);
        }

        for minterm in minterms {
            if minterm.len() != variable_count {
                return Err(MinimizeError::WrongTermLength {
                    term: minterm.to_string(),
                    expected: variable_count,
                    found: minterm.len(),
                });
            }
            if minterm.dont_cares() != 0 {
                return Err(MinimizeError::InvalidSymbol {
                    term: minterm.to_string(),
                    symbol: char::from(Symbol::DontCare),
                    position: minterm.to_string().find('.').unwrap_or(0),
                });
            }
        }

        let minterms = canonicalize(minterms);
        debug!(
            minterms = minterms.len(),
            variable_count, "starting minimization"
        );

        let primes = generator::prime_implicants(&minterms, variable_count);
        let coverage = CoverageTable::build(&primes, &minterms);
        let essentials = cover::essential_implicants(&coverage, &minterms)?;
        let retained = cover::eliminate_redundant(&coverage, &essentials);
        let selected = cover::minimum_cover(&coverage, &essentials, &retained, &primes, variable_count);

        let terms = selected
            .into_iter()
            .map(|implicant| primes[implicant.0].clone())
            .collect();

        Ok(SumOfProducts::new(terms, variable_count))
    }

    /// Minimize the function given by decimal minterm indices.
    ///
    /// # Errors
    /// Fails on an index wider than the variable count, plus everything
    /// [`Minimizer::minimize`] fails on.
    pub fn minimize_indices(&self, indices: &[u64]) -> Result<SumOfProducts> {
        let minterms = indices
            .iter()
            .map(|&index| Term::from_index(index, self.options.variable_count))
            .collect::<Result<Vec<Term>>>()?;

        self.minimize(&minterms)
    }
}

/// Sort ascending by binary value and drop duplicates. Downstream enumeration
/// orders (and therefore greedy tie-breaks) all derive from this order.
fn canonicalize(minterms: &[Term]) -> Vec<Term> {
    let mut minterms = minterms.to_vec();
    minterms.sort();
    minterms.dedup();
    minterms
}
