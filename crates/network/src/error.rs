//! Errors raised while scheduling a network of machines.

use intcode_vm::RuntimeError;
use thiserror::Error;

/// Errors that occur while running a chain or ring of machines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A network needs at least one phase setting.
    #[error("no phase settings given")]
    EmptyPhases,

    /// Every machine halted (or one finished) without emitting a signal.
    #[error("network produced no signal")]
    NoSignal,

    /// A machine failed; `node` is its position in the phase list.
    #[error("amplifier {node}: {source}")]
    Node { node: usize, source: RuntimeError },
}
