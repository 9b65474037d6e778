//! # Quine-McCluskey minimizer for Boolean functions.
//!
//! Minimize a Boolean function given as a set of minterms (input combinations
//! on which the function evaluates to true) into an equivalent, irreducible
//! sum-of-products expression via the
//! [Quine-McCluskey tabulation method](https://en.wikipedia.org/wiki/Quine%E2%80%93McCluskey_algorithm):
//!
//! * prime implicant generation by iterative pairwise merging,
//! * implicant/minterm coverage tabulation,
//! * essential implicant extraction,
//! * redundant implicant elimination,
//! * greedy minimum-cover selection over the remaining candidates.
//!
//! The following snippet minimizes the function of six variables which is true
//! exactly on the assignments 0, 4, 8, and 12:
//!
//! ```rust
//! use qmcrs::minimize::{Minimizer, MinimizerOptions};
//!
//! let options = MinimizerOptions::builder().variable_count(6).build();
//! let minimizer = Minimizer::new(options);
//!
//! let expression = minimizer.minimize_indices(&[0, 4, 8, 12]).unwrap();
//! assert_eq!(expression.to_string(), "-x0-x1-x4-x5");
//! ```
//!
//! Minterms can also be supplied as fixed-width binary strings via
//! [`crate::term::Term::parse`], or read from a text file of decimal indices
//! with [`crate::minimize::MintermReader`].

pub mod error;
pub mod literal;
pub mod minimize;
pub mod term;


pub type Result<T> = std::result::Result<T, error::MinimizeError>;
