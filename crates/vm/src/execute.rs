//! Main execution loop and opcode dispatch for the Intcode VM.

use tracing::{debug, trace};

use crate::error::RuntimeError;
use crate::machine::VM;
use intcode_common::{Instruction, Opcode};

/// What a single [`VM::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// An instruction executed with no externally visible effect.
    Continue,
    /// OUTPUT executed and produced this value.
    Output(i64),
    /// INPUT is pending with an empty queue. Nothing was executed.
    AwaitingInput,
    /// The VM is halted.
    Halted,
}

/// Result of [`VM::step_until_output_or_halt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputOrHalt {
    /// The program produced a value and is suspended just after the OUTPUT.
    Output(i64),
    /// The program executed HALT.
    Halted,
}

/// Why [`VM::run_until_blocked`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// INPUT is pending; push a value and resume.
    AwaitingInput,
    /// The program executed HALT.
    Halted,
}

impl VM {
    /// Execute one instruction.
    ///
    /// An INPUT with an empty queue is reported as [`Event::AwaitingInput`]
    /// and leaves the VM untouched.
    pub fn step(&mut self) -> Result<Event, RuntimeError> {
        if self.halted {
            return Ok(Event::Halted);
        }
        if let Some(limit) = self.step_limit {
            if self.steps >= limit {
                return Err(RuntimeError::StepLimitExceeded { limit });
            }
        }

        let at = self.ip;
        let raw = self.memory.get(at);
        let instr = Instruction::decode(raw).map_err(|e| RuntimeError::from_decode(e, at, raw))?;
        trace!(ip = at, raw, opcode = ?instr.opcode, base = self.relative_base, "exec");

        let event = match instr.opcode {
            // Arithmetic
            Opcode::Add => self.exec_binary(&instr, i64::checked_add)?,
            Opcode::Mul => self.exec_binary(&instr, i64::checked_mul)?,

            // Comparison
            Opcode::LessThan => self.exec_binary(&instr, |a, b| Some((a < b) as i64))?,
            Opcode::Equals => self.exec_binary(&instr, |a, b| Some((a == b) as i64))?,

            // I/O
            Opcode::Input => {
                let dst = self.destination(&instr, 1)?;
                let Some(value) = self.inputs.pop_front() else {
                    return Ok(Event::AwaitingInput);
                };
                self.memory.set(dst, value);
                self.ip += instr.width();
                Event::Continue
            }
            Opcode::Output => {
                let value = self.operand(&instr, 1)?;
                self.ip += instr.width();
                Event::Output(value)
            }

            // Control flow
            Opcode::JumpIfTrue => self.exec_jump(&instr, |cond| cond != 0)?,
            Opcode::JumpIfFalse => self.exec_jump(&instr, |cond| cond == 0)?,

            // Addressing
            Opcode::AdjustRelativeBase => {
                let delta = self.operand(&instr, 1)?;
                self.relative_base = self
                    .relative_base
                    .checked_add(delta)
                    .ok_or(RuntimeError::Overflow { at })?;
                self.ip += instr.width();
                Event::Continue
            }

            // VM control
            Opcode::Halt => {
                self.halted = true;
                Event::Halted
            }
        };

        self.steps += 1;
        Ok(event)
    }

    /// Queue `inputs`, then run until HALT, returning every output produced.
    ///
    /// # Errors
    ///
    /// An INPUT with nothing queued is [`RuntimeError::InputUnderflow`]; any
    /// other failure is returned as-is. Outputs produced before the error
    /// are discarded.
    pub fn run_to_halt<I: IntoIterator<Item = i64>>(
        &mut self,
        inputs: I,
    ) -> Result<Vec<i64>, RuntimeError> {
        self.extend_inputs(inputs);
        let mut outputs = Vec::new();

        loop {
            match self.step()? {
                Event::Continue => {}
                Event::Output(value) => outputs.push(value),
                Event::AwaitingInput => {
                    return Err(RuntimeError::InputUnderflow { at: self.ip });
                }
                Event::Halted => {
                    debug!(steps = self.steps, outputs = outputs.len(), "halted");
                    return Ok(outputs);
                }
            }
        }
    }

    /// Queue `next_input` (if any), then run until the next OUTPUT or HALT.
    ///
    /// On `Output` the VM is suspended just past the OUTPUT instruction and
    /// the next call resumes there. Once halted, every call returns `Halted`.
    ///
    /// # Errors
    ///
    /// An INPUT with nothing queued returns [`RuntimeError::InputUnderflow`]
    /// with the VM still positioned on that INPUT, so the caller may push a
    /// value and call again.
    pub fn step_until_output_or_halt(
        &mut self,
        next_input: Option<i64>,
    ) -> Result<OutputOrHalt, RuntimeError> {
        if let Some(value) = next_input {
            self.push_input(value);
        }

        loop {
            match self.step()? {
                Event::Continue => {}
                Event::Output(value) => {
                    debug!(ip = self.ip, value, "suspended on output");
                    return Ok(OutputOrHalt::Output(value));
                }
                Event::AwaitingInput => {
                    debug!(ip = self.ip, "suspended awaiting input");
                    return Err(RuntimeError::InputUnderflow { at: self.ip });
                }
                Event::Halted => return Ok(OutputOrHalt::Halted),
            }
        }
    }

    /// Run until the program needs input it does not have, or halts.
    ///
    /// Returns the outputs produced during this call together with the
    /// reason it stopped. Interactive callers push one input per
    /// `AwaitingInput` and read back each batch of outputs.
    pub fn run_until_blocked(&mut self) -> Result<(Vec<i64>, Blocked), RuntimeError> {
        let mut outputs = Vec::new();

        loop {
            match self.step()? {
                Event::Continue => {}
                Event::Output(value) => outputs.push(value),
                Event::AwaitingInput => {
                    debug!(ip = self.ip, outputs = outputs.len(), "blocked on input");
                    return Ok((outputs, Blocked::AwaitingInput));
                }
                Event::Halted => return Ok((outputs, Blocked::Halted)),
            }
        }
    }

    // ---- Instruction groups ----

    /// ADD, MUL, LT, EQ: `mem[dst] = op(a, b)`.
    fn exec_binary<F>(&mut self, instr: &Instruction, op: F) -> Result<Event, RuntimeError>
    where
        F: Fn(i64, i64) -> Option<i64>,
    {
        let a = self.operand(instr, 1)?;
        let b = self.operand(instr, 2)?;
        let dst = self.destination(instr, 3)?;
        let value = op(a, b).ok_or(RuntimeError::Overflow { at: self.ip })?;
        self.memory.set(dst, value);
        self.ip += instr.width();
        Ok(Event::Continue)
    }

    /// JT, JF: jump to `b` when `taken(a)`, otherwise fall through.
    fn exec_jump<F>(&mut self, instr: &Instruction, taken: F) -> Result<Event, RuntimeError>
    where
        F: Fn(i64) -> bool,
    {
        let cond = self.operand(instr, 1)?;
        let target = self.operand(instr, 2)?;
        if taken(cond) {
            self.ip = self.address(target)?;
        } else {
            self.ip += instr.width();
        }
        Ok(Event::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_reports_each_event() {
        let mut vm = VM::new(&[3, 0, 104, 5, 99]);
        assert_eq!(vm.step(), Ok(Event::AwaitingInput));
        assert_eq!(vm.ip(), 0);
        vm.push_input(1);
        assert_eq!(vm.step(), Ok(Event::Continue));
        assert_eq!(vm.step(), Ok(Event::Output(5)));
        assert_eq!(vm.step(), Ok(Event::Halted));
        assert_eq!(vm.step(), Ok(Event::Halted));
        assert_eq!(vm.steps(), 3);
    }

    #[test]
    fn awaiting_input_does_not_count_a_step() {
        let mut vm = VM::new(&[3, 0, 99]);
        assert_eq!(vm.step(), Ok(Event::AwaitingInput));
        assert_eq!(vm.steps(), 0);
    }

    #[test]
    fn jump_taken_and_not_taken() {
        // JT #1, #7 jumps to 7; JF #1, #0 falls through.
        let mut vm = VM::new(&[1105, 1, 7, 99, 0, 0, 0, 1106, 1, 0, 99]);
        vm.step().unwrap();
        assert_eq!(vm.ip(), 7);
        vm.step().unwrap();
        assert_eq!(vm.ip(), 10);
    }

    #[test]
    fn negative_jump_target_is_rejected() {
        let mut vm = VM::new(&[1105, 1, -4, 99]);
        assert_eq!(
            vm.step(),
            Err(RuntimeError::NegativeAddress { at: 0, address: -4 })
        );
    }

    #[test]
    fn overflow_is_reported() {
        let mut vm = VM::new(&[1102, i64::MAX, 2, 0, 99]);
        assert_eq!(vm.step(), Err(RuntimeError::Overflow { at: 0 }));
    }

    #[test]
    fn step_limit_stops_infinite_loop() {
        // JT #1, #0 loops forever.
        let mut vm = VM::new(&[1105, 1, 0]).with_step_limit(50);
        assert_eq!(
            vm.run_to_halt([]),
            Err(RuntimeError::StepLimitExceeded { limit: 50 })
        );
        assert_eq!(vm.steps(), 50);
    }
}
