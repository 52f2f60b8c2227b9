//! Terminal chess against the minimax engine.
//!
//! ```bash
//! # Human (White) against the engine at the default depth
//! cargo run -p chess_cli
//!
//! # Engine plays both sides for 40 plies, with search logging
//! RUST_LOG=minimax_engine=debug cargo run -p chess_cli -- --white engine --max-plies 40
//!
//! # Settings from a file, depth overridden on the command line
//! cargo run -p chess_cli -- --config chess.toml --depth 4
//! ```

mod config;
mod console;
mod render;
mod session;

use std::io;

use anyhow::{Context, Result};
use chess_core::Game;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Args, Config};
use crate::console::{Console, HELP};
use crate::session::{Session, SessionEnd};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = Config::resolve(&args)?;

    let game = match &config.start_fen {
        Some(fen) => Game::from_fen(fen).context("invalid start position")?,
        None => Game::new(),
    };

    println!("{HELP}");
    println!();

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(game, config, console);

    match session.run()? {
        SessionEnd::EngineStalled => anyhow::bail!("engine returned no move in a live position"),
        SessionEnd::GameOver(_) | SessionEnd::PlyLimit | SessionEnd::Abandoned => Ok(()),
    }
}
