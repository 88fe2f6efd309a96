//! Orientation Swap CLI
//!
//! Usage:
//!   orientation-swap [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --orientation <columns|rows>  Target orientation
//!   -m, --message <JSON>              Raw UI message instead of --orientation
//!   -c, --config <FILE>               Swap configuration (TOML format)
//!   -l, --lint                        Report layout defects after the swap
//!   -d, --debug                       Print classified layout to stderr
//!   -h, --help                        Print help

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use orientation_swap::{
    layout_dump, run_canvas, Canvas, Message, Orientation, Outcome, RunConfig, SwapConfig,
};

#[derive(Parser)]
#[command(name = "orientation-swap")]
#[command(about = "Swap a sticky-note grid between rows and columns")]
struct Cli {
    /// Canvas JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Target orientation
    #[arg(short, long, value_parser = ["columns", "rows"], conflicts_with = "message")]
    orientation: Option<String>,

    /// Raw UI message as JSON
    #[arg(short, long)]
    message: Option<String>,

    /// Swap configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report layout defects after the swap
    #[arg(short, long)]
    lint: bool,

    /// Debug mode: print node roles and positions
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let orientation = cli.orientation.as_deref().and_then(Orientation::parse);
    let message = match (&cli.message, orientation) {
        (Some(raw), _) => raw.clone(),
        (None, Some(o)) => match serde_json::to_string(&Message::orientation_swap(o)) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Error encoding message: {}", e);
                std::process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Error: one of --orientation or --message is required");
            std::process::exit(2);
        }
    };

    let swap = match &cli.config {
        Some(path) => match SwapConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SwapConfig::default(),
    };

    let canvas = match &cli.input {
        Some(path) => match Canvas::from_file(path) {
            Ok(canvas) => canvas,
            Err(e) => {
                eprintln!("Error loading canvas '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match Canvas::from_json(&buffer) {
                Ok(canvas) => canvas,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RunConfig::new().with_swap(swap).with_lint(cli.lint);
    let output = run_canvas(canvas, &message, &config);

    match &output.outcome {
        Outcome::Applied(report) => {
            if cli.debug {
                eprintln!("=== Swap Debug ===");
                eprintln!("{}", layout_dump(&output.canvas.selection, report));
                eprintln!("==================");
            }
        }
        Outcome::Ignored(reason) => eprintln!("Nothing swapped: {}", reason),
    }

    for warning in &output.warnings {
        eprintln!("warning[{}]: {}", warning.category, warning.message);
    }

    match output.canvas.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
