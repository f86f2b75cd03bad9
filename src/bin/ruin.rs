//! Risk-of-ruin simulation CLI.
//!
//! Runs a single simulated trade sequence and prints a text chart of the
//! portfolio trajectory plus a survival verdict.
//!
//! Usage:
//!   cargo run --bin ruin
//!   cargo run --bin ruin -- --seed 42

use ruinbook::{SeededRng, SimulationConfig, report, simulate};
use std::io::{self, Write};
use std::process;

fn main() {
    let mut seed: Option<u64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => match args.next().map(|s| s.parse::<u64>()) {
                Some(Ok(s)) => seed = Some(s),
                _ => {
                    eprintln!("--seed requires an unsigned integer value");
                    process::exit(2);
                }
            },
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                eprintln!("Unknown argument: '{other}'. Try --help.");
                process::exit(2);
            }
        }
    }

    // A deliberately aggressive book: 30% win rate, 3:1 payoff, 5% of the
    // portfolio at risk per trade.
    let config = match SimulationConfig::new(1_000.0, 0.3, 3.0, 0.7, 0.05, 200) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(1);
        }
    };

    let mut rng = match seed {
        Some(s) => SeededRng::seed(s),
        None => SeededRng::from_entropy(),
    };
    let result = simulate(&config, &mut rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = report::write_report(&mut out, &result).and_then(|()| out.flush()) {
        eprintln!("failed to write report: {err}");
        process::exit(1);
    }
}

fn print_help() {
    println!("ruin — single-path risk-of-ruin simulation");
    println!();
    println!("Options:");
    println!("  --seed N    Seed the random source for a reproducible run");
    println!("  --help      Show this help");
}
