//! Intcode networks — schedulers for several machines running one program.
//!
//! The VM knows nothing about topology. This crate owns the machines and
//! decides who runs next:
//!
//! - [`Chain`] — a line of machines, each run to halt once
//! - [`Ring`] — a feedback cycle, resumed round-robin until all halt
//! - [`max_signal`] — phase-permutation search over either topology
//!
//! # Usage
//!
//! ```
//! use intcode_network::{feedback_loop, max_signal, Topology};
//!
//! let program = [
//!     3, 26, 1001, 26, -4, 26, 3, 27, 1002, 27, 2, 27, 1, 27, 26, 27, 4, 27, 1001, 28, -1, 28,
//!     1005, 28, 6, 99, 0, 0, 5,
//! ];
//! assert_eq!(feedback_loop(&program, &[9, 8, 7, 6, 5]).unwrap(), 139629729);
//!
//! let best = max_signal(&program, &[5, 6, 7, 8, 9], Topology::Feedback).unwrap();
//! assert_eq!(best.phases, vec![9, 8, 7, 6, 5]);
//! ```

pub mod chain;
pub mod error;
pub mod ring;
pub mod search;

pub use chain::{chain, Chain};
pub use error::NetworkError;
pub use ring::{feedback_loop, Ring};
pub use search::{max_signal, permutations, Best, Topology};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every permutation is a rearrangement of the input, and there are n! of them.
        #[test]
        fn permutations_are_complete(items in prop::collection::vec(-50i64..50, 0..6)) {
            let perms = permutations(&items);
            let factorial: usize = (1..=items.len()).product();
            prop_assert_eq!(perms.len(), factorial);

            let mut sorted = items.clone();
            sorted.sort_unstable();
            for p in &perms {
                let mut q = p.clone();
                q.sort_unstable();
                prop_assert_eq!(&q, &sorted);
            }
        }

        /// A one-shot program gives the same signal chained or looped.
        #[test]
        fn one_shot_program_ignores_topology(phases in prop::collection::vec(0i64..10, 1..6)) {
            let program = [3, 15, 3, 16, 1002, 16, 10, 16, 1, 16, 15, 15, 4, 15, 99, 0, 0];
            prop_assert_eq!(
                chain(&program, &phases),
                feedback_loop(&program, &phases)
            );
        }
    }
}
