//! Feedback ring: machines resumed round-robin until every one halts.
//!
//! The ring is a queue of machines. The front machine is resumed with the
//! current signal. If it emits a value, that value becomes the signal and
//! the machine goes to the back of the queue. If it halts, it leaves the
//! ring and the signal passes unchanged to the next machine. The result is
//! the last value emitted by any machine.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::NetworkError;
use intcode_vm::{OutputOrHalt, VM};

#[derive(Debug, Clone)]
struct Node {
    /// Position in the original phase list, for error reporting.
    id: usize,
    vm: VM,
}

/// Machines wired output-to-input in a cycle.
#[derive(Debug, Clone)]
pub struct Ring {
    nodes: VecDeque<Node>,
}

impl Ring {
    /// One machine per phase, each seeded with its phase as first input.
    pub fn new(program: &[i64], phases: &[i64]) -> Result<Self, NetworkError> {
        if phases.is_empty() {
            return Err(NetworkError::EmptyPhases);
        }
        let machines = phases.iter().map(|&phase| {
            let mut vm = VM::new(program);
            vm.push_input(phase);
            vm
        });
        Ok(Self::from_machines(machines))
    }

    /// Build a ring from already configured machines, in scheduling order.
    pub fn from_machines<I: IntoIterator<Item = VM>>(machines: I) -> Self {
        let nodes = machines
            .into_iter()
            .enumerate()
            .map(|(id, vm)| Node { id, vm })
            .collect();
        Self { nodes }
    }

    /// Apply a step limit to every machine.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        for node in self.nodes.iter_mut() {
            node.vm = node.vm.clone().with_step_limit(limit);
        }
        self
    }

    /// Number of machines still in the ring.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no machine remains.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Feed `seed` to the front machine and run until every machine halts.
    pub fn run(mut self, seed: i64) -> Result<i64, NetworkError> {
        let mut signal = seed;
        let mut last = None;

        while let Some(mut node) = self.nodes.pop_front() {
            let step = node
                .vm
                .step_until_output_or_halt(Some(signal))
                .map_err(|source| NetworkError::Node {
                    node: node.id,
                    source,
                })?;

            match step {
                OutputOrHalt::Output(value) => {
                    signal = value;
                    last = Some(value);
                    self.nodes.push_back(node);
                }
                OutputOrHalt::Halted => {
                    debug!(node = node.id, remaining = self.nodes.len(), "amplifier halted");
                }
            }
        }

        last.ok_or(NetworkError::NoSignal)
    }
}

/// Run the feedback loop described by `phases`, starting from signal 0.
pub fn feedback_loop(program: &[i64], phases: &[i64]) -> Result<i64, NetworkError> {
    Ring::new(program, phases)?.run(0)
}
