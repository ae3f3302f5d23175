//! Intcode virtual machine — executes programs over a sparse, growable memory.
//!
//! The VM is a register machine with:
//! - A zero-default memory seeded from the program
//! - An instruction pointer and a relative base
//! - A FIFO input queue
//!
//! It runs either to completion ([`VM::run_to_halt`]) or cooperatively,
//! suspending after each output ([`VM::step_until_output_or_halt`]) or
//! whenever it needs input ([`VM::run_until_blocked`]).
//!
//! # Usage
//!
//! ```
//! use intcode_common::Program;
//! use intcode_vm::{run, OutputOrHalt, VM};
//!
//! // Output 1 if the input equals 8, else 0.
//! let program: Program = "3,9,8,9,10,9,4,9,99,-1,8".parse().unwrap();
//! assert_eq!(run(&program, &[8]).unwrap(), vec![1]);
//!
//! let mut vm = VM::from(&program);
//! assert_eq!(vm.step_until_output_or_halt(Some(7)).unwrap(), OutputOrHalt::Output(0));
//! assert_eq!(vm.step_until_output_or_halt(None).unwrap(), OutputOrHalt::Halted);
//! ```

pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;

pub use error::RuntimeError;
pub use execute::{Blocked, Event, OutputOrHalt};
pub use machine::VM;
pub use memory::Memory;

use intcode_common::Program;

/// Run a program to completion with the given inputs and return its outputs.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution fails (invalid opcode, negative
/// address, input underflow, etc.).
pub fn run(program: &Program, inputs: &[i64]) -> Result<Vec<i64>, RuntimeError> {
    let mut vm = VM::from(program);
    vm.run_to_halt(inputs.iter().copied())
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Reads a count, then echoes that many inputs back doubled.
    ///
    /// ```text
    /// 0:  IN 100
    /// 2:  JF 100, #20
    /// 5:  IN 101
    /// 7:  MUL 101, #2, 101
    /// 11: OUT 101
    /// 13: ADD 100, #-1, 100
    /// 17: JT #1, #2
    /// 20: HALT
    /// ```
    fn doubler() -> Vec<i64> {
        vec![
            3, 100, 1006, 100, 20, 3, 101, 1002, 101, 2, 101, 4, 101, 1001, 100, -1, 100, 1105, 1,
            2, 99,
        ]
    }

    proptest! {
        /// Batch and resumable runs produce identical output streams.
        #[test]
        fn batch_matches_resumable(values in prop::collection::vec(-1_000_000i64..1_000_000, 0..20)) {
            let program = doubler();
            let mut inputs = vec![values.len() as i64];
            inputs.extend(&values);

            let batch = VM::new(&program).run_to_halt(inputs.clone()).unwrap();

            let mut vm = VM::new(&program);
            vm.extend_inputs(inputs);
            let mut resumed = Vec::new();
            while let OutputOrHalt::Output(v) = vm.step_until_output_or_halt(None).unwrap() {
                resumed.push(v);
            }

            prop_assert_eq!(&batch, &resumed);
            let expected: Vec<i64> = values.iter().map(|v| v * 2).collect();
            prop_assert_eq!(batch, expected);
        }

        /// Feeding inputs one at a time through the resumable interface
        /// matches seeding them all up front.
        #[test]
        fn incremental_inputs_match_seeded(values in prop::collection::vec(-1_000i64..1_000, 0..10)) {
            let program = doubler();
            let mut seeded_inputs = vec![values.len() as i64];
            seeded_inputs.extend(&values);
            let seeded = VM::new(&program).run_to_halt(seeded_inputs).unwrap();

            let mut vm = VM::new(&program);
            vm.push_input(values.len() as i64);
            let mut incremental = Vec::new();
            for &v in &values {
                match vm.step_until_output_or_halt(Some(v)).unwrap() {
                    OutputOrHalt::Output(out) => incremental.push(out),
                    OutputOrHalt::Halted => break,
                }
            }
            prop_assert_eq!(vm.step_until_output_or_halt(None).unwrap(), OutputOrHalt::Halted);
            prop_assert_eq!(seeded, incremental);
        }
    }
}
