use std::fmt::Display;

use crate::term::Term;

/// A minimized sum-of-products expression: the selected cover, in selection
/// order (essentials first, then greedy picks).
///
/// Rendered as `+`-joined product terms, each term a concatenation of `xK` /
/// `-xK` literals ascending by variable index. The constant-true function
/// (a single all-don't-care implicant) renders as the empty string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SumOfProducts {
    terms: Vec<Term>,
    variable_count: usize,
}

impl SumOfProducts {
    pub(crate) fn new(terms: Vec<Term>, variable_count: usize) -> Self {
        SumOfProducts {
            terms,
            variable_count,
        }
    }

    /// Implicants of the cover, in selection order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Enumerate the minterms on which the expression is true, ascending by
    /// index. For a correct minimization this reproduces exactly the original
    /// input set.
    ///
    /// # Panics
    /// Panics when the expression ranges over 64 or more variables, as the
    /// full assignment domain is walked.
    #[must_use]
    pub fn satisfying_minterms(&self) -> Vec<Term> {
        assert!(
            u32::try_from(self.variable_count).is_ok_and(|count| count < u64::BITS),
            "assignment domain of {} variables cannot be enumerated",
            self.variable_count
        );

        (0..1_u64 << self.variable_count)
            .map(|index| Term::from_bits(index, self.variable_count))
            .filter(|minterm| self.terms.iter().any(|term| term.covers(minterm)))
            .collect()
    }
}

impl Display for SumOfProducts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let products: Vec<String> = self
            .terms
            .iter()
            .map(|term| term.literals().iter().map(ToString::to_string).collect())
            .collect();

        write!(f, "{}", products.join("+"))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::SumOfProducts;
    use crate::term::Term;

    #[test]
    fn renders_products_joined_by_plus() {
        let expression = SumOfProducts::new(
            vec![
                Term::parse("000001", 6).unwrap(),
                Term::parse("000100", 6).unwrap(),
            ],
            6,
        );

        assert_eq!(
            expression.to_string(),
            "x0-x1-x2-x3-x4-x5+-x0-x1x2-x3-x4-x5"
        );
    }

    #[test]
    fn constant_true_renders_empty() {
        let expression = SumOfProducts::new(vec![Term::parse_pattern("......")], 6);
        assert_eq!(expression.to_string(), "");
        assert_eq!(expression.satisfying_minterms().len(), 64);
    }

    #[test]
    fn satisfying_minterms_ascend() {
        let expression = SumOfProducts::new(vec![Term::parse_pattern("00..00")], 6);
        let minterms: Vec<String> = expression
            .satisfying_minterms()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(minterms, vec!["000000", "000100", "001000", "001100"]);
    }
}
