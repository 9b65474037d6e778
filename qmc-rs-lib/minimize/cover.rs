use bitvec::prelude::*;
use tracing::debug;

use super::table::{CoverageTable, ImplicantIdx, MintermIdx};
use crate::error::MinimizeError;
use crate::term::Term;
use crate::Result;

/// Find the essential prime implicants: for every minterm covered by exactly
/// one implicant, that implicant must appear in every valid cover.
///
/// # Errors
/// A minterm covered by zero implicants signals a bug in the generator and is
/// surfaced as [`MinimizeError::CoverageInconsistency`] rather than silently
/// producing an incomplete expression.
pub(crate) fn essential_implicants(
    table: &CoverageTable,
    minterms: &[Term],
) -> Result<Vec<ImplicantIdx>> {
    let mut essentials: Vec<ImplicantIdx> = Vec::new();

    for (minterm, term) in minterms.iter().enumerate() {
        let mut covering = table.covering(MintermIdx(minterm));
        let Some(first) = covering.next() else {
            return Err(MinimizeError::CoverageInconsistency {
                minterm: term.to_string(),
            });
        };

        if covering.next().is_none() && !essentials.contains(&first) {
            essentials.push(first);
        }
    }

    debug!(essentials = essentials.len(), "essential selection finished");
    Ok(essentials)
}

/// Drop every non-essential prime implicant that contributes no minterm
/// beyond what the essential set already covers. The survivors are the
/// candidate pool for greedy cover selection.
pub(crate) fn eliminate_redundant(
    table: &CoverageTable,
    essentials: &[ImplicantIdx],
) -> Vec<ImplicantIdx> {
    let covered = covered_union(table, essentials);

    (0..table.implicant_count())
        .map(ImplicantIdx)
        .filter(|implicant| !essentials.contains(implicant))
        .filter(|&implicant| table.covered_by(implicant).any(|m| !covered[m.0]))
        .collect()
}

/// Complete the cover greedily: essentials are pre-selected, then candidates
/// are drawn group by group, most general implicants (highest don't-care
/// count) first, bare minterms last. Within a group the candidate covering
/// the most currently uncovered minterms is selected next, ties broken by
/// enumeration order; candidates contributing nothing are skipped. The
/// heuristic makes no optimality guarantee but is fully deterministic.
pub(crate) fn minimum_cover(
    table: &CoverageTable,
    essentials: &[ImplicantIdx],
    candidates: &[ImplicantIdx],
    implicants: &[Term],
    variable_count: usize,
) -> Vec<ImplicantIdx> {
    let mut covered = covered_union(table, essentials);
    let mut cover: Vec<ImplicantIdx> = essentials.to_vec();

    let groups = (1..=variable_count).rev().chain(std::iter::once(0));
    for dont_cares in groups {
        if covered.all() {
            break;
        }

        let group: Vec<ImplicantIdx> = candidates
            .iter()
            .copied()
            .filter(|&implicant| implicants[implicant.0].dont_cares() == dont_cares)
            .collect();
        let mut selected = vec![false; group.len()];

        loop {
            let mut best: Option<(usize, usize)> = None;
            for (position, &implicant) in group.iter().enumerate() {
                if selected[position] {
                    continue;
                }

                let gain = table
                    .covered_by(implicant)
                    .filter(|minterm| !covered[minterm.0])
                    .count();
                if gain > 0 && best.is_none_or(|(best_gain, _)| gain > best_gain) {
                    best = Some((gain, position));
                }
            }

            let Some((_, position)) = best else {
                break;
            };

            selected[position] = true;
            let implicant = group[position];
            for minterm in table.covered_by(implicant) {
                covered.set(minterm.0, true);
            }
            cover.push(implicant);
        }
    }

    debug_assert!(covered.all(), "prime implicants always admit a full cover");
    debug!(implicants = cover.len(), "cover selection finished");
    cover
}

fn covered_union(table: &CoverageTable, implicants: &[ImplicantIdx]) -> BitVec {
    let mut covered = bitvec![0; table.minterm_count()];
    for &implicant in implicants {
        for minterm in table.covered_by(implicant) {
            covered.set(minterm.0, true);
        }
    }

    covered
}
