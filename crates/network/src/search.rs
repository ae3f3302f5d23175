//! Phase-permutation search over chains and rings.

use rayon::prelude::*;

use crate::chain::chain;
use crate::error::NetworkError;
use crate::ring::feedback_loop;

/// How the machines in a network are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// A single serial pass; see [`crate::Chain`].
    Chain,
    /// A cycle resumed until every machine halts; see [`crate::Ring`].
    Feedback,
}

impl Topology {
    /// Run `program` wired this way with the given phase order, from signal 0.
    pub fn run(&self, program: &[i64], phases: &[i64]) -> Result<i64, NetworkError> {
        match self {
            Topology::Chain => chain(program, phases),
            Topology::Feedback => feedback_loop(program, phases),
        }
    }
}

/// The strongest signal found by [`max_signal`] and the phase order producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Best {
    pub signal: i64,
    pub phases: Vec<i64>,
}

/// Every ordering of `items`, in lexicographic order of positions.
pub fn permutations(items: &[i64]) -> Vec<Vec<i64>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let first = rest.remove(i);
        for tail in permutations(&rest) {
            let mut order = Vec::with_capacity(items.len());
            order.push(first);
            order.extend(tail);
            out.push(order);
        }
    }
    out
}

/// Try every ordering of `phases` and return the one giving the largest signal.
///
/// Orderings are evaluated in parallel, each with its own machines. Ties go
/// to the lexicographically smallest phase order. Any failing ordering
/// aborts the search with that ordering's error.
pub fn max_signal(
    program: &[i64],
    phases: &[i64],
    topology: Topology,
) -> Result<Best, NetworkError> {
    if phases.is_empty() {
        return Err(NetworkError::EmptyPhases);
    }

    let results = permutations(phases)
        .into_par_iter()
        .map(|order| {
            topology
                .run(program, &order)
                .map(|signal| Best { signal, phases: order })
        })
        .collect::<Result<Vec<_>, _>>()?;

    results
        .into_iter()
        .reduce(|best, candidate| {
            let better = candidate.signal > best.signal
                || (candidate.signal == best.signal && candidate.phases < best.phases);
            if better {
                candidate
            } else {
                best
            }
        })
        .ok_or(NetworkError::NoSignal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_of_three() {
        assert_eq!(
            permutations(&[1, 2, 3]),
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn permutations_of_trivial_inputs() {
        assert_eq!(permutations(&[]), vec![Vec::<i64>::new()]);
        assert_eq!(permutations(&[4]), vec![vec![4]]);
    }

    #[test]
    fn ties_prefer_smallest_order() {
        // Ignores the phase entirely: IN, IN, OUT #7, HALT.
        let constant = [3, 0, 3, 0, 104, 7, 99];
        let best = max_signal(&constant, &[2, 1, 0], Topology::Chain).unwrap();
        assert_eq!(best.signal, 7);
        assert_eq!(best.phases, vec![0, 1, 2]);
    }

    #[test]
    fn empty_phases_rejected() {
        assert_eq!(
            max_signal(&[99], &[], Topology::Feedback),
            Err(NetworkError::EmptyPhases)
        );
    }

    #[test]
    fn topology_dispatch() {
        let program = [3, 15, 3, 16, 1002, 16, 10, 16, 1, 16, 15, 15, 4, 15, 99, 0, 0];
        assert_eq!(Topology::Chain.run(&program, &[1, 2]), Ok(12));
        assert_eq!(Topology::Feedback.run(&program, &[1, 2]), Ok(12));
    }
}
