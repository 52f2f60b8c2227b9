//! Session configuration: TOML file, command-line overrides, defaults.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use minimax_engine::{PieceValues, DEFAULT_DEPTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who makes the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Engine,
}

#[derive(Debug, Parser)]
#[command(
    name = "chess_cli",
    about = "Play chess in the terminal against a fixed-depth minimax opponent"
)]
pub struct Args {
    /// TOML config file; flags given here take precedence over it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays White
    #[arg(long, value_enum)]
    pub white: Option<PlayerKind>,

    /// Who plays Black
    #[arg(long, value_enum)]
    pub black: Option<PlayerKind>,

    /// Engine search depth in plies
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    pub fen: Option<String>,

    /// Stop after this many plies
    #[arg(long)]
    pub max_plies: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("piece values must be nonnegative, got {0:?}")]
    NegativePieceValue(PieceValues),
}

/// Everything a session needs to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub depth: u8,
    pub start_fen: Option<String>,
    pub max_plies: Option<u32>,
    pub piece_values: PieceValues,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Engine,
            depth: DEFAULT_DEPTH,
            start_fen: None,
            max_plies: None,
            piece_values: PieceValues::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file (if any), then flags, then validation.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(args);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(white) = args.white {
            self.white = white;
        }
        if let Some(black) = args.black {
            self.black = black;
        }
        if let Some(depth) = args.depth {
            self.depth = depth;
        }
        if let Some(fen) = &args.fen {
            self.start_fen = Some(fen.clone());
        }
        if let Some(max_plies) = args.max_plies {
            self.max_plies = Some(max_plies);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !self.piece_values.is_valid() {
            return Err(ConfigError::NegativePieceValue(self.piece_values));
        }
        Ok(())
    }

    pub fn player(&self, color: chess_core::Color) -> PlayerKind {
        match color {
            chess_core::Color::White => self.white,
            chess_core::Color::Black => self.black,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
