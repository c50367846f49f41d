//! VR4300 cycle-accurate pipeline simulator CLI.
//!
//! This binary provides a single entry point for running flat binaries on
//! the pipeline core. It performs:
//! 1. **Direct run:** Load a flat binary at the base of RDRAM and execute
//!    it through the uncached kseg1 window for a bounded cycle budget.
//! 2. **Configuration:** Built-in defaults, optionally overridden from a
//!    JSON config file.

use clap::{Parser, Subcommand};
use std::process;

use vr4300_core::config::Config;
use vr4300_core::sim::loader;
use vr4300_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "vr4300",
    author,
    version,
    about = "VR4300 cycle-accurate pipeline simulator",
    long_about = "Run a flat binary on the five-stage VR4300 pipeline core.\n\nExamples:\n  vr4300 run -f boot.bin\n  vr4300 run -f boot.bin --cycles 500000 --trace\n  vr4300 run -f boot.bin --config sim.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a flat binary.
    Run {
        /// Binary image to execute.
        #[arg(short, long)]
        file: String,

        /// JSON configuration file (defaults used when omitted).
        #[arg(long)]
        config: Option<String>,

        /// Cycle budget for the run.
        #[arg(long, default_value_t = 100_000)]
        cycles: u64,

        /// Emit per-stage trace lines on stderr.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            cycles,
            trace,
        } => cmd_run(file, config, cycles, trace),
    }
}

/// Loads the configuration, places the binary, and runs the tick loop.
fn cmd_run(file: String, config_path: Option<String>, cycles: u64, trace: bool) {
    let mut config = match config_path {
        Some(path) => load_config(&path),
        None => Config::default(),
    };
    config.general.trace |= trace;

    println!(
        "[*] VR4300 pipeline simulator: start PC {:#x}, RDRAM {} MB",
        config.general.start_pc,
        config.memory.rdram_size / 1024 / 1024
    );

    let data = loader::load_binary(&file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read '{}': {}", file, e);
        process::exit(1);
    });

    let mut sim = Simulator::new(&config);
    loader::load_flat_binary(&mut sim.cpu, &data, config.memory.rdram_base);

    println!("[*] Direct execution: {} ({} bytes)", file, data.len());
    sim.run(cycles);

    println!();
    sim.cpu.dump_state();
    sim.cpu.stats.print();
}

/// Reads and parses a JSON configuration file.
fn load_config(path: &str) -> Config {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read config '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: bad config '{}': {}", path, e);
        process::exit(1);
    })
}
