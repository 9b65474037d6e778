use fxhash::FxHashSet;
use tracing::debug;

use crate::term::Term;

/// Compute all prime implicants of the minterm set by iterative pairwise
/// merging.
///
/// Terms are bucketed by weight so that merge candidates (which always differ
/// in weight by exactly one) are only searched for in adjacent buckets. A term
/// that participates in no merge during a round is promoted to the prime set;
/// merged results are deduplicated and become the next round's input. The loop
/// ends with the first round that produces no merges, which happens after at
/// most `variable_count` rounds since every merge introduces one more
/// don't-care position.
///
/// Prime implicants are returned in promotion order (ascending weight within
/// a round), which downstream stages rely on for deterministic tie-breaking.
pub(crate) fn prime_implicants(minterms: &[Term], variable_count: usize) -> Vec<Term> {
    let mut primes: Vec<Term> = Vec::new();
    let mut promoted: FxHashSet<Term> = FxHashSet::default();

    let mut buckets = group_by_weight(minterms.iter().cloned(), variable_count);
    let mut round = 0;

    loop {
        round += 1;

        // Rebuilt from scratch every round; merge participation never leaks
        // from one round into the next.
        let mut merged: FxHashSet<Term> = FxHashSet::default();
        let mut next: Vec<Term> = Vec::new();
        let mut seen: FxHashSet<Term> = FxHashSet::default();

        for weight in 0..variable_count {
            let (lower, upper) = (&buckets[weight], &buckets[weight + 1]);
            for candidate in lower {
                for partner in upper {
                    let Some(result) = candidate.merge(partner) else {
                        continue;
                    };

                    merged.insert(candidate.clone());
                    merged.insert(partner.clone());
                    if seen.insert(result.clone()) {
                        next.push(result);
                    }
                }
            }
        }

        for term in buckets.iter().flatten() {
            if !merged.contains(term) && promoted.insert(term.clone()) {
                primes.push(term.clone());
            }
        }

        if next.is_empty() {
            debug!(rounds = round, primes = primes.len(), "prime generation finished");
            return primes;
        }

        buckets = group_by_weight(next.into_iter(), variable_count);
    }
}

fn group_by_weight(terms: impl Iterator<Item = Term>, variable_count: usize) -> Vec<Vec<Term>> {
    let mut buckets = vec![Vec::new(); variable_count + 1];
    for term in terms {
        let weight = term.weight();
        buckets[weight].push(term);
    }

    buckets
}
