//! VM state management: memory, registers, input queue, step accounting.

use std::collections::VecDeque;

use crate::error::RuntimeError;
use crate::memory::Memory;
use intcode_common::{Instruction, Mode, Program};

/// The Intcode virtual machine.
///
/// Each instance exclusively owns its memory, instruction pointer, relative
/// base and input queue. Instances never share state, so independent VMs may
/// be moved to and run on different threads.
#[derive(Debug, Clone)]
pub struct VM {
    /// Program memory, seeded with a copy of the program.
    pub(crate) memory: Memory,
    /// Instruction pointer.
    pub(crate) ip: usize,
    /// Offset added to relative-mode operands. Changed only by ARB.
    pub(crate) relative_base: i64,
    /// Pending inputs, consumed front first.
    pub(crate) inputs: VecDeque<i64>,
    /// Set once HALT executes; every later run returns immediately.
    pub(crate) halted: bool,
    /// Instructions executed so far.
    pub(crate) steps: u64,
    /// Abort with `StepLimitExceeded` after this many instructions.
    pub(crate) step_limit: Option<u64>,
}

impl VM {
    /// Create a new VM with a private copy of `program`.
    pub fn new(program: &[i64]) -> Self {
        Self {
            memory: Memory::from_image(program),
            ip: 0,
            relative_base: 0,
            inputs: VecDeque::new(),
            halted: false,
            steps: 0,
            step_limit: None,
        }
    }

    /// Limit execution to `limit` instructions over the VM's lifetime.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Queue one input value.
    pub fn push_input(&mut self, value: i64) {
        self.inputs.push_back(value);
    }

    /// Queue several input values, in order.
    pub fn extend_inputs<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        self.inputs.extend(values);
    }

    /// Number of queued inputs not yet consumed.
    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Read memory directly, outside of program execution.
    pub fn peek(&self, addr: usize) -> i64 {
        self.memory.get(addr)
    }

    /// Write memory directly, e.g. to patch inputs into a program before running it.
    pub fn poke(&mut self, addr: usize, value: i64) {
        self.memory.set(addr, value);
    }

    /// The VM's memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Current instruction pointer.
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Current relative base.
    pub fn relative_base(&self) -> i64 {
        self.relative_base
    }

    /// Whether HALT has executed.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Convert a computed address, rejecting negatives.
    pub(crate) fn address(&self, address: i64) -> Result<usize, RuntimeError> {
        usize::try_from(address).map_err(|_| RuntimeError::NegativeAddress { at: self.ip, address })
    }

    /// Literal word of parameter `param` (1-based) of the current instruction.
    fn literal(&self, param: usize) -> i64 {
        self.memory.get(self.ip + param)
    }

    fn relative(&self, literal: i64) -> Result<i64, RuntimeError> {
        literal
            .checked_add(self.relative_base)
            .ok_or(RuntimeError::Overflow { at: self.ip })
    }

    /// Resolve read operand `param` through its mode.
    pub(crate) fn operand(&self, instr: &Instruction, param: usize) -> Result<i64, RuntimeError> {
        let literal = self.literal(param);
        match instr.mode(param) {
            Mode::Position => Ok(self.memory.get(self.address(literal)?)),
            Mode::Immediate => Ok(literal),
            Mode::Relative => Ok(self.memory.get(self.address(self.relative(literal)?)?)),
        }
    }

    /// Resolve destination operand `param` to an address.
    pub(crate) fn destination(
        &self,
        instr: &Instruction,
        param: usize,
    ) -> Result<usize, RuntimeError> {
        let literal = self.literal(param);
        match instr.mode(param) {
            Mode::Position => self.address(literal),
            Mode::Relative => self.address(self.relative(literal)?),
            Mode::Immediate => Err(RuntimeError::ImmediateDestination { at: self.ip }),
        }
    }
}

impl From<&Program> for VM {
    fn from(program: &Program) -> Self {
        Self::new(&program.words)
    }
}
