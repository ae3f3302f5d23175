//! Intcode CLI — run, assemble, disassemble, and wire amplifiers.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/parse/assembly/usage error
//! - 3: Runtime error

mod commands;

use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
        "assemble" => commands::assemble(&args[2..]),
        "amplify" => commands::amplify(&args[2..]),
        "max-signal" => commands::max_signal(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage: intcode <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <prog> [--input a,b,..] [--max-steps N]      Execute a program");
    eprintln!("  disassemble <prog>                               Print a mnemonic listing");
    eprintln!("  assemble <input.asm> [-o output.intcode]         Assemble text to program");
    eprintln!("  amplify <prog> --phases a,b,.. [--feedback]      Run an amplifier network");
    eprintln!("  max-signal <prog> --phases a,b,.. [--feedback]   Search phase orderings");
}
