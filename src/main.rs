//! `qttt` binary — play quantum tic-tac-toe in the terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin qttt
//! cargo run --bin qttt -- --seed 7 --log-level debug
//! ```
//!
//! Enter `a` to place your mark in cell `a`, or `a,b` to put it into
//! superposition across cells `a` and `b`. Cells are numbered 0-8 row by row.

use clap::Parser;
use qttt::core::DEFAULT_NORM_TOLERANCE;
use qttt::game::LineSource;
use qttt::{Game, GameConfig, GameError, Session};
use std::io;
use tracing::{error, info};

/// Command-line arguments for the game binary.
#[derive(Parser, Debug)]
#[command(name = "qttt", version, about = "Quantum tic-tac-toe", long_about = None)]
struct Args {
    /// Fix the collapse sampler seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Allowed deviation of the total probability from 1.0 before measuring.
    #[arg(long, default_value_t = DEFAULT_NORM_TOLERANCE)]
    norm_tolerance: f64,

    /// Log level (trace, debug, info, warn, error). Logs go to stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level_filter = args
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN);

    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("qttt v{}", qttt::VERSION);

    let config = GameConfig {
        seed: args.seed,
        norm_tolerance: args.norm_tolerance,
    };

    if let Err(e) = run(config) {
        error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(config: GameConfig) -> Result<(), GameError> {
    let game = Game::new(config)?;
    let stdin = io::stdin();
    let mut session = Session::new(game, LineSource::new(stdin.lock()), io::stdout());
    let result = session.run()?;
    info!(?result, "finished");
    Ok(())
}
