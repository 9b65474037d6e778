use std::fmt::Display;

use bitvec::prelude::*;
use derive_more::derive::From;

use crate::term::Term;

/// Index into the prime implicant list.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, From)]
pub(crate) struct ImplicantIdx(pub usize);

impl Display for ImplicantIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index into the canonicalized minterm list.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, From)]
pub(crate) struct MintermIdx(pub usize);

impl Display for MintermIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense `covers(implicant, minterm)` relation, one bit row per prime
/// implicant. Built once and read-only afterwards.
pub(crate) struct CoverageTable {
    rows: Vec<BitVec>,
    minterm_count: usize,
}

impl CoverageTable {
    pub(crate) fn build(implicants: &[Term], minterms: &[Term]) -> CoverageTable {
        let rows = implicants
            .iter()
            .map(|implicant| {
                minterms
                    .iter()
                    .map(|minterm| implicant.covers(minterm))
                    .collect::<BitVec>()
            })
            .collect();

        CoverageTable {
            rows,
            minterm_count: minterms.len(),
        }
    }

    #[allow(unused)]
    pub(crate) fn covers(&self, implicant: ImplicantIdx, minterm: MintermIdx) -> bool {
        self.rows[implicant.0][minterm.0]
    }

    /// Minterm indices covered by the implicant.
    pub(crate) fn covered_by(
        &self,
        implicant: ImplicantIdx,
    ) -> impl Iterator<Item = MintermIdx> + '_ {
        self.rows[implicant.0].iter_ones().map(MintermIdx)
    }

    /// Implicant indices covering the minterm, ascending.
    pub(crate) fn covering(&self, minterm: MintermIdx) -> impl Iterator<Item = ImplicantIdx> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| row[minterm.0])
            .map(|(implicant, _)| ImplicantIdx(implicant))
    }

    pub(crate) fn implicant_count(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn minterm_count(&self) -> usize {
        self.minterm_count
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{CoverageTable, ImplicantIdx, MintermIdx};
    use crate::term::Term;

    fn table() -> CoverageTable {
        let implicants = vec![Term::parse_pattern("00..00"), Term::parse_pattern("00010.")];
        let minterms = vec![
            Term::parse("000000", 6).unwrap(),
            Term::parse("000100", 6).unwrap(),
            Term::parse("000101", 6).unwrap(),
        ];

        CoverageTable::build(&implicants, &minterms)
    }

    #[test]
    fn covers_relation() {
        let table = table();

        assert!(table.covers(ImplicantIdx(0), MintermIdx(0)));
        assert!(table.covers(ImplicantIdx(0), MintermIdx(1)));
        assert!(!table.covers(ImplicantIdx(0), MintermIdx(2)));

        assert!(!table.covers(ImplicantIdx(1), MintermIdx(0)));
        assert!(table.covers(ImplicantIdx(1), MintermIdx(1)));
        assert!(table.covers(ImplicantIdx(1), MintermIdx(2)));
    }

    #[test]
    fn covering_lists_implicants_of_minterm() {
        let table = table();

        let covering: Vec<_> = table.covering(MintermIdx(1)).collect();
        assert_eq!(covering, vec![ImplicantIdx(0), ImplicantIdx(1)]);

        let covering: Vec<_> = table.covering(MintermIdx(2)).collect();
        assert_eq!(covering, vec![ImplicantIdx(1)]);
    }

    #[test]
    fn covered_by_lists_minterms_of_implicant() {
        let table = table();

        let covered: Vec<_> = table.covered_by(ImplicantIdx(0)).collect();
        assert_eq!(covered, vec![MintermIdx(0), MintermIdx(1)]);
    }
}
