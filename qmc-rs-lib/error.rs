use thiserror::Error;

/// Failures surfaced by the minimization pipeline. All of them are fail-fast:
/// no variant is recoverable and no partial expression is ever returned.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MinimizeError {
    #[error("term '{term}' must be exactly {expected} symbols long, found {found}")]
    WrongTermLength {
        term: String,
        expected: usize,
        found: usize,
    },

    #[error("term '{term}' contains invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        term: String,
        symbol: char,
        position: usize,
    },

    #[error("at least one minterm is required")]
    EmptyInput,

    /// Internal invariant violation: every original minterm must be covered
    /// by at least one prime implicant.
    #[error("minterm '{minterm}' is not covered by any prime implicant")]
    CoverageInconsistency { minterm: String },

    #[error("minterm index '{token}' is not a decimal number")]
    InvalidIndex { token: String },

    #[error("minterm index {index} does not fit into {variable_count} variables")]
    IndexOutOfRange { index: u64, variable_count: usize },

    #[error("could not read minterm list: {0}")]
    Read(String),
}
