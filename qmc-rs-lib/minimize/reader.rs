use std::io::BufRead;

use crate::error::MinimizeError;
use crate::term::Term;
use crate::Result;

/// Reads a list of decimal minterm indices from a text stream and converts
/// them to fixed-width minterms. Indices may be separated by commas, line
/// breaks, or any other whitespace; `13, 2 7` and `13,2,7` parse the same.
///
/// Parsing is fail-fast: a token that is not a decimal number or an index
/// that does not fit into the variable count aborts with an error instead of
/// being skipped.
pub struct MintermReader<'a> {
    reader: &'a mut dyn BufRead,
}

impl<'a> MintermReader<'a> {
    #[must_use]
    pub fn new(reader: &'a mut dyn BufRead) -> Self {
        MintermReader { reader }
    }

    /// Parse the whole stream into minterms of `variable_count` positions.
    ///
    /// # Errors
    /// Returns [`MinimizeError::Read`] on I/O failure,
    /// [`MinimizeError::InvalidIndex`] on a malformed token, and
    /// [`MinimizeError::IndexOutOfRange`] on an index wider than
    /// `variable_count` bits.
    pub fn parse_minterms(&mut self, variable_count: usize) -> Result<Vec<Term>> {
        let mut minterms = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|err| MinimizeError::Read(err.to_string()))?;
            if read == 0 {
                return Ok(minterms);
            }

            for token in line
                .split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|token| !token.is_empty())
            {
                let index = token
                    .parse::<u64>()
                    .map_err(|_| MinimizeError::InvalidIndex {
                        token: token.to_owned(),
                    })?;
                minterms.push(Term::from_index(index, variable_count)?);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use std::io::BufReader;

    use super::MintermReader;
    use crate::error::MinimizeError;

    fn parse(contents: &str, variable_count: usize) -> crate::Result<Vec<String>> {
        let mut reader = BufReader::new(contents.as_bytes());
        let minterms = MintermReader::new(&mut reader).parse_minterms(variable_count)?;
        Ok(minterms.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn comma_separated_indices() {
        assert_eq!(
            parse("0,4,8,12,", 6),
            Ok(vec![
                "000000".to_owned(),
                "000100".to_owned(),
                "001000".to_owned(),
                "001100".to_owned(),
            ])
        );
    }

    #[test]
    fn mixed_separators() {
        let contents = "13, 2\n7\t63";
        assert_eq!(
            parse(contents, 6),
            Ok(vec![
                "001101".to_owned(),
                "000010".to_owned(),
                "000111".to_owned(),
                "111111".to_owned(),
            ])
        );
    }

    #[test]
    fn empty_stream_yields_no_minterms() {
        assert_eq!(parse("", 6), Ok(vec![]));
        assert_eq!(parse(" \n \n", 6), Ok(vec![]));
    }

    #[test]
    fn malformed_token_fails() {
        assert_eq!(
            parse("3,x,5", 6),
            Err(MinimizeError::InvalidIndex {
                token: "x".to_owned(),
            })
        );
    }

    #[test]
    fn out_of_range_index_fails() {
        assert_eq!(
            parse("3,64", 6),
            Err(MinimizeError::IndexOutOfRange {
                index: 64,
                variable_count: 6,
            })
        );
    }
}
