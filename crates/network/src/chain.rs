//! Serial amplifier chain: each machine runs to completion once.

use tracing::debug;

use crate::error::NetworkError;
use intcode_vm::VM;

/// Machines wired output-to-input in a line, each run a single time.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<VM>,
}

impl Chain {
    /// One machine per phase, each seeded with its phase as first input.
    pub fn new(program: &[i64], phases: &[i64]) -> Result<Self, NetworkError> {
        if phases.is_empty() {
            return Err(NetworkError::EmptyPhases);
        }
        let nodes = phases
            .iter()
            .map(|&phase| {
                let mut vm = VM::new(program);
                vm.push_input(phase);
                vm
            })
            .collect();
        Ok(Self { nodes })
    }

    /// Apply a step limit to every machine.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.nodes = self
            .nodes
            .into_iter()
            .map(|vm| vm.with_step_limit(limit))
            .collect();
        self
    }

    /// Number of machines.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the chain has no machines.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Feed `seed` to the first machine and return the last machine's final output.
    ///
    /// Each machine runs to halt with its queued phase followed by the
    /// previous machine's last output.
    pub fn run(self, seed: i64) -> Result<i64, NetworkError> {
        let mut signal = seed;
        for (node, mut vm) in self.nodes.into_iter().enumerate() {
            let outputs = vm
                .run_to_halt([signal])
                .map_err(|source| NetworkError::Node { node, source })?;
            signal = *outputs.last().ok_or(NetworkError::NoSignal)?;
            debug!(node, signal, "forwarded");
        }
        Ok(signal)
    }
}

/// Run the chain described by `phases`, starting from signal 0.
pub fn chain(program: &[i64], phases: &[i64]) -> Result<i64, NetworkError> {
    Chain::new(program, phases)?.run(0)
}
