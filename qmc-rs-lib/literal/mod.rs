use std::fmt::Display;

use derive_more::derive::From;

/// Index of a Boolean variable, `0` being the least significant one.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, From)]
pub struct VariableIdx(pub u32);

impl Display for VariableIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Either true or false
#[derive(Hash, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Copy)]
pub enum Polarity {
    Positive,
    Negative,
}

impl From<bool> for Polarity {
    fn from(item: bool) -> Self {
        if item {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

impl std::ops::Not for Polarity {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// A variable or its negation, rendered as `x3` or `-x3`.
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct Literal {
    variable: VariableIdx,
    polarity: Polarity,
}

impl Literal {
    #[must_use]
    pub fn new(polarity: Polarity, variable: VariableIdx) -> Literal {
        Literal { variable, polarity }
    }

    #[must_use]
    pub fn negate(&self) -> Literal {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[must_use]
    pub fn variable(&self) -> VariableIdx {
        self.variable
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let polarity = if self.polarity == Polarity::Positive {
            ""
        } else {
            "-"
        };
        write!(f, "{}x{}", polarity, self.variable)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Literal, Polarity, VariableIdx};

    #[test]
    fn render() {
        assert_eq!(
            Literal::new(Polarity::Positive, VariableIdx(0)).to_string(),
            "x0"
        );
        assert_eq!(
            Literal::new(Polarity::Negative, VariableIdx(5)).to_string(),
            "-x5"
        );
    }

    #[test]
    fn negate() {
        let literal = Literal::new(Polarity::Positive, VariableIdx(2));
        assert_eq!(literal.negate().polarity(), Polarity::Negative);
        assert_eq!(literal.negate().negate(), literal);
    }
}
