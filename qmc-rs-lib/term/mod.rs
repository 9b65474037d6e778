use std::fmt::Display;

use crate::error::MinimizeError;
use crate::literal::{Literal, Polarity, VariableIdx};
use crate::Result;

/// One position of a product term over the three-valued alphabet.
#[derive(Hash, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Symbol {
    Zero,
    One,
    DontCare,
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        match symbol {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::DontCare => '.',
        }
    }
}

/// A product term: an ordered, fixed-length sequence of [`Symbol`]s, one per
/// variable. A term with no don't-care positions is a minterm; a term with at
/// least one is a merged implicant.
///
/// Positions are stored most significant variable first, so the term over six
/// variables covering exactly the assignment 5 reads `000101`. Position `p`
/// (0-based from the left) belongs to variable `N - 1 - p`.
///
/// Equality, ordering, and hashing are value-based over the symbol sequence.
#[derive(Hash, Eq, PartialEq, PartialOrd, Ord, Clone, Debug)]
pub struct Term {
    symbols: Vec<Symbol>,
}

impl Term {
    /// Parse a minterm from a fixed-width binary string. Only `0` and `1` are
    /// accepted: input minterms carry no don't-care positions.
    ///
    /// # Errors
    /// Returns [`MinimizeError::WrongTermLength`] when the string is not
    /// exactly `variable_count` characters long and
    /// [`MinimizeError::InvalidSymbol`] on any character outside `{0, 1}`.
    pub fn parse(pattern: &str, variable_count: usize) -> Result<Term> {
        if pattern.chars().count() != variable_count {
            return Err(MinimizeError::WrongTermLength {
                term: pattern.to_owned(),
                expected: variable_count,
                found: pattern.chars().count(),
            });
        }

        let mut symbols = Vec::with_capacity(variable_count);
        for (position, ch) in pattern.chars().enumerate() {
            match ch {
                '0' => symbols.push(Symbol::Zero),
                '1' => symbols.push(Symbol::One),
                _ => {
                    return Err(MinimizeError::InvalidSymbol {
                        term: pattern.to_owned(),
                        symbol: ch,
                        position,
                    })
                }
            }
        }

        Ok(Term { symbols })
    }

    /// Construct the minterm for a decimal index, zero-extended to
    /// `variable_count` positions.
    ///
    /// # Errors
    /// Returns [`MinimizeError::IndexOutOfRange`] when the index does not fit
    /// into `variable_count` bits.
    pub fn from_index(index: u64, variable_count: usize) -> Result<Term> {
        let width = usize::try_from(u64::BITS).unwrap_or(usize::MAX);
        if variable_count < width && index >> variable_count != 0 {
            return Err(MinimizeError::IndexOutOfRange {
                index,
                variable_count,
            });
        }

        Ok(Term::from_bits(index, variable_count))
    }

    /// Minterm for the low `variable_count` bits of `index`, without the
    /// range check of [`Term::from_index`].
    pub(crate) fn from_bits(index: u64, variable_count: usize) -> Term {
        let symbols = (0..variable_count)
            .rev()
            .map(|position| {
                if bit_set(index, position) {
                    Symbol::One
                } else {
                    Symbol::Zero
                }
            })
            .collect();

        Term { symbols }
    }

    /// Parse a ternary pattern, `.` marking don't-care positions. Used by
    /// tests to spell out expected implicants; input minterms go through
    /// [`Term::parse`] instead.
    #[allow(unused)]
    pub(crate) fn parse_pattern(pattern: &str) -> Term {
        let symbols = pattern
            .chars()
            .map(|ch| match ch {
                '0' => Symbol::Zero,
                '1' => Symbol::One,
                '.' => Symbol::DontCare,
                _ => unreachable!("pattern symbols are limited to '0', '1' and '.'"),
            })
            .collect();

        Term { symbols }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Count of `1` symbols. Used to group terms for adjacency comparison
    /// during prime implicant generation.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.symbols
            .iter()
            .filter(|&&symbol| symbol == Symbol::One)
            .count()
    }

    /// Count of don't-care positions.
    #[must_use]
    pub fn dont_cares(&self) -> usize {
        self.symbols
            .iter()
            .filter(|&&symbol| symbol == Symbol::DontCare)
            .count()
    }

    /// Merge two terms differing in exactly one position into a term with a
    /// don't-care at that position.
    ///
    /// The differing position must hold `0` on one side and `1` on the other;
    /// a bit facing a don't-care makes the pair non-mergeable, as does any
    /// second difference.
    #[must_use]
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.len() != other.len() {
            return None;
        }

        let mut merged = Vec::with_capacity(self.len());
        let mut difference = false;
        for (&ours, &theirs) in self.symbols.iter().zip(other.symbols.iter()) {
            if ours == theirs {
                merged.push(ours);
                continue;
            }

            if difference || ours == Symbol::DontCare || theirs == Symbol::DontCare {
                return None;
            }

            difference = true;
            merged.push(Symbol::DontCare);
        }

        difference.then_some(Term { symbols: merged })
    }

    /// Symbol-wise cover test: true iff the minterm agrees with this term at
    /// every position that is not a don't-care.
    #[must_use]
    pub fn covers(&self, minterm: &Term) -> bool {
        self.len() == minterm.len()
            && self
                .symbols
                .iter()
                .zip(minterm.symbols.iter())
                .all(|(&ours, &theirs)| ours == Symbol::DontCare || ours == theirs)
    }

    /// The term's literal conjunction, ascending by variable index (least
    /// significant variable first). Don't-care positions contribute nothing,
    /// so the all-don't-care term yields no literals at all.
    #[must_use]
    pub fn literals(&self) -> Vec<Literal> {
        if self.is_empty() {
            return Vec::new();
        }

        let last = self.len() - 1;
        (0..self.len())
            .filter_map(|variable| match self.symbols[last - variable] {
                Symbol::DontCare => None,
                symbol => {
                    let polarity = Polarity::from(symbol == Symbol::One);
                    let variable = u32::try_from(variable).expect("variable index fits into u32");
                    Some(Literal::new(polarity, VariableIdx(variable)))
                }
            })
            .collect()
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", char::from(symbol))?;
        }
        Ok(())
    }
}

fn bit_set(index: u64, position: usize) -> bool {
    u32::try_from(position).is_ok_and(|position| position < u64::BITS)
        && (index >> position) & 1 == 1
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Term;
    use crate::error::MinimizeError;

    #[test]
    fn parse_minterm() {
        let term = Term::parse("000101", 6).unwrap();
        assert_eq!(term.to_string(), "000101");
        assert_eq!(term.weight(), 2);
        assert_eq!(term.dont_cares(), 0);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Term::parse("0001", 6),
            Err(MinimizeError::WrongTermLength {
                term: "0001".to_owned(),
                expected: 6,
                found: 4,
            })
        );
    }

    #[test]
    fn parse_rejects_invalid_symbol() {
        assert_eq!(
            Term::parse("00.100", 6),
            Err(MinimizeError::InvalidSymbol {
                term: "00.100".to_owned(),
                symbol: '.',
                position: 2,
            })
        );
    }

    #[test]
    fn from_index_zero_extends() {
        assert_eq!(Term::from_index(5, 6).unwrap().to_string(), "000101");
        assert_eq!(Term::from_index(0, 6).unwrap().to_string(), "000000");
        assert_eq!(Term::from_index(63, 6).unwrap().to_string(), "111111");
    }

    #[test]
    fn from_index_rejects_wide_index() {
        assert_eq!(
            Term::from_index(64, 6),
            Err(MinimizeError::IndexOutOfRange {
                index: 64,
                variable_count: 6,
            })
        );
    }

    #[test]
    fn merge_single_difference() {
        let lower = Term::parse("000010", 6).unwrap();
        let upper = Term::parse("000011", 6).unwrap();
        assert_eq!(lower.merge(&upper), Some(Term::parse_pattern("00001.")));
    }

    #[test]
    fn merge_fails_on_two_differences() {
        let lower = Term::parse("000001", 6).unwrap();
        let upper = Term::parse("000100", 6).unwrap();
        assert_eq!(lower.merge(&upper), None);
    }

    #[test]
    fn merge_fails_on_identical_terms() {
        let term = Term::parse("000001", 6).unwrap();
        assert_eq!(term.merge(&term.clone()), None);
    }

    #[test]
    fn merge_fails_on_dont_care_mismatch() {
        // The differing position faces a don't-care, not a bit.
        let lower = Term::parse_pattern("00.0");
        let upper = Term::parse_pattern("0010");
        assert_eq!(lower.merge(&upper), None);

        let lower = Term::parse_pattern("0.1");
        let upper = Term::parse_pattern("011");
        assert_eq!(lower.merge(&upper), None);
    }

    #[test]
    fn merge_of_merged_terms() {
        let left = Term::parse_pattern("000.00");
        let right = Term::parse_pattern("001.00");
        assert_eq!(left.merge(&right), Some(Term::parse_pattern("00..00")));
    }

    #[test]
    fn covers_ignores_dont_cares() {
        let implicant = Term::parse_pattern("00..00");
        assert!(implicant.covers(&Term::parse("000000", 6).unwrap()));
        assert!(implicant.covers(&Term::parse("001100", 6).unwrap()));
        assert!(!implicant.covers(&Term::parse("100000", 6).unwrap()));
    }

    #[test]
    fn literals_ascend_from_least_significant_variable() {
        let term = Term::parse("000101", 6).unwrap();
        let rendered: String = term.literals().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, "x0-x1x2-x3-x4-x5");
    }

    #[test]
    fn literals_skip_dont_cares() {
        let term = Term::parse_pattern("00..00");
        let rendered: String = term.literals().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, "-x0-x1-x4-x5");
    }

    #[test]
    fn all_dont_cares_has_no_literals() {
        assert!(Term::parse_pattern("......").literals().is_empty());
    }
}
