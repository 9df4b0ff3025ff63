//! Line-driven stand-in for the interactive page.
//!
//! Reads commands from stdin and prints the history after each step:
//!
//! ```text
//! validate 0.707 0 0.707 0
//! h
//! undo
//! measure
//! shots 1000
//! history
//! quit
//! ```
//!
//! Set `RUST_LOG=qsphere=debug` to follow the engine.

use qsphere::{GateLabel, QsphereError, Session, SessionConfig};
use std::io::{self, BufRead, Write};

fn print_help() {
    println!("Commands:");
    println!("  validate a b c d   set c0 = a+bi, c1 = c+di");
    println!("  x | y | z | h | s | t | i");
    println!("  measure            collapse the latest state");
    println!("  shots N            sample N measurements without collapsing");
    println!("  undo               step back once");
    println!("  history            print the circuit");
    println!("  step N             show one history entry");
    println!("  quit");
}

fn run_command(session: &mut Session, line: &str) -> Result<bool, QsphereError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(true);
    };

    match command {
        "quit" | "exit" => return Ok(false),
        "help" => print_help(),
        "validate" => {
            let fields: Vec<&str> = parts.collect();
            let [a, b, c, d] = fields[..] else {
                println!("validate expects four numbers");
                return Ok(true);
            };
            let entry = session.validate_text([a, b, c, d])?;
            println!("Initial state {} bloch={}", entry.state, entry.vector);
        }
        "measure" | "m" => {
            let result = session.measure()?;
            println!("{}", result);
        }
        "shots" => {
            let shots = parts.next().and_then(|n| n.parse::<usize>().ok()).unwrap_or(1000);
            let counts = session.sample(shots)?;
            print!("{}", counts);
            println!("Chart: {}", counts.as_probabilities());
        }
        "undo" => match session.undo()? {
            Some(entry) => println!("Back to {} bloch={}", entry.state, entry.vector),
            None => println!("Nothing to undo past the initial state"),
        },
        "history" => print!("{}", session.history()),
        "step" => {
            let index = parts.next().and_then(|n| n.parse::<usize>().ok()).unwrap_or(0);
            match session.history().get(index) {
                Some(entry) => println!("[{}] {} bloch={}", index, entry.state, entry.vector),
                None => println!("No step {}", index),
            }
        }
        label => {
            let gate: GateLabel = label.parse()?;
            let entry = session.apply_gate(gate)?;
            println!("{} -> {} bloch={}", gate, entry.state, entry.vector);
        }
    }
    Ok(true)
}

fn main() -> io::Result<()> {
    let _ = env_logger::builder().format_timestamp_millis().try_init();
    println!("--- qsphere: interactive single-qubit session ---");
    print_help();

    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    let config = match seed {
        Some(seed) => SessionConfig::builder().seed(seed).build(),
        None => SessionConfig::default(),
    };
    let mut session = Session::with_config(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match run_command(&mut session, line.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {}", e),
        }
    }
    Ok(())
}
