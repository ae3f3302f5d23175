//! CLI command implementations.

use std::fs;
use std::path::Path;

use intcode_common::Program;
use intcode_network::{max_signal as search, Chain, NetworkError, Ring, Topology};
use intcode_vm::VM;

/// Execute a program and print its outputs, one per line.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: intcode run <prog> [--input a,b,..] [--max-steps N]");
        return Err(1);
    }

    let program = read_program(&args[0])?;
    let opts = Options::parse(&args[1..])?;

    let mut vm = VM::from(&program);
    if let Some(limit) = opts.max_steps {
        vm = vm.with_step_limit(limit);
    }

    match vm.run_to_halt(opts.inputs) {
        Ok(outputs) => {
            for value in outputs {
                println!("{value}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Print the mnemonic listing of a program.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: disassemble requires an input file");
        eprintln!("Usage: intcode disassemble <prog>");
        return Err(1);
    }

    let program = read_program(&args[0])?;
    print!("{}", intcode_asm::disassemble(&program));
    Ok(())
}

/// Assemble mnemonic text into a comma-separated program file.
pub fn assemble(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: assemble requires an input file");
        eprintln!("Usage: intcode assemble <input.asm> [-o output.intcode]");
        return Err(1);
    }

    let input = &args[0];
    let opts = Options::parse(&args[1..])?;
    let output = opts.output.unwrap_or_else(|| {
        Path::new(input)
            .with_extension("intcode")
            .to_string_lossy()
            .into_owned()
    });

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let program = intcode_asm::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    fs::write(&output, format!("{program}\n")).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        1
    })?;

    eprintln!("assembled {} words -> {output}", program.len());
    Ok(())
}

/// Run one amplifier network and print the final signal.
pub fn amplify(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: amplify requires an input file and --phases");
        eprintln!("Usage: intcode amplify <prog> --phases a,b,.. [--feedback] [--max-steps N]");
        return Err(1);
    }

    let program = read_program(&args[0])?;
    let opts = Options::parse(&args[1..])?;
    let phases = opts.require_phases()?;

    let result = if opts.feedback {
        Ring::new(&program.words, &phases).and_then(|ring| match opts.max_steps {
            Some(limit) => ring.with_step_limit(limit).run(0),
            None => ring.run(0),
        })
    } else {
        Chain::new(&program.words, &phases).and_then(|chain| match opts.max_steps {
            Some(limit) => chain.with_step_limit(limit).run(0),
            None => chain.run(0),
        })
    };

    let signal = result.map_err(report_network)?;
    println!("{signal}");
    Ok(())
}

/// Try every ordering of the phases and print the best signal and ordering.
pub fn max_signal(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: max-signal requires an input file and --phases");
        eprintln!("Usage: intcode max-signal <prog> --phases a,b,.. [--feedback]");
        return Err(1);
    }

    let program = read_program(&args[0])?;
    let opts = Options::parse(&args[1..])?;
    let phases = opts.require_phases()?;
    let topology = if opts.feedback {
        Topology::Feedback
    } else {
        Topology::Chain
    };

    let best = search(&program.words, &phases, topology).map_err(report_network)?;
    let order = best
        .phases
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    println!("{} {order}", best.signal);
    Ok(())
}

// ---- Helpers ----

/// Flags shared by the subcommands. Unused flags are accepted and ignored.
#[derive(Debug, Default)]
struct Options {
    inputs: Vec<i64>,
    phases: Option<Vec<i64>>,
    feedback: bool,
    max_steps: Option<u64>,
    output: Option<String>,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, i32> {
        let mut opts = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--feedback" => opts.feedback = true,
                flag @ ("--input" | "--phases" | "--max-steps" | "-o") => {
                    let Some(value) = args.get(i + 1) else {
                        eprintln!("error: {flag} requires a value");
                        return Err(1);
                    };
                    match flag {
                        "--input" => opts.inputs = parse_list(flag, value)?,
                        "--phases" => opts.phases = Some(parse_list(flag, value)?),
                        "--max-steps" => {
                            let limit = value.parse().map_err(|_| {
                                eprintln!("error: --max-steps expects a non-negative integer, got '{value}'");
                                1
                            })?;
                            opts.max_steps = Some(limit);
                        }
                        _ => opts.output = Some(value.clone()),
                    }
                    i += 1;
                }
                other => {
                    eprintln!("error: unexpected argument '{other}'");
                    return Err(1);
                }
            }
            i += 1;
        }
        Ok(opts)
    }

    fn require_phases(&self) -> Result<Vec<i64>, i32> {
        self.phases.clone().ok_or_else(|| {
            eprintln!("error: --phases is required");
            1
        })
    }
}

/// Parse a comma-separated integer list with the program grammar.
fn parse_list(flag: &str, value: &str) -> Result<Vec<i64>, i32> {
    Program::parse(value).map(|p| p.words).map_err(|e| {
        eprintln!("error: invalid {flag} list: {e}");
        1
    })
}

/// Read and parse a comma-separated program file.
fn read_program(path: &str) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;

    Program::parse(&text).map_err(|e| {
        eprintln!("error: invalid program: {e}");
        1
    })
}

fn report_network(err: NetworkError) -> i32 {
    match err {
        NetworkError::EmptyPhases => {
            eprintln!("error: {err}");
            1
        }
        _ => {
            eprintln!("runtime error: {err}");
            3
        }
    }
}
