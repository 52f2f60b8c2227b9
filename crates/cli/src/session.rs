//! The turn loop: render, check for game end, then let the side to move play.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chess_core::{
    needs_promotion, try_apply_human_move, try_apply_with_prompt, Game, Move, Outcome, RulesEngine,
};
use minimax_engine::MoveSelector;
use tracing::{info, warn};

use crate::config::{Config, PlayerKind};
use crate::console::{parse_command, Command, Console, HELP};
use crate::render::{render_board, MoveHistory};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver(Outcome),
    PlyLimit,
    /// Quit command or end of input.
    Abandoned,
    /// The engine found nothing to play in a position not seen as terminal.
    EngineStalled,
}

pub struct Session<R, W> {
    game: Game,
    config: Config,
    selector: MoveSelector,
    history: MoveHistory,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, config: Config, console: Console<R, W>) -> Self {
        let selector = MoveSelector::with_values(config.piece_values, config.depth);
        let history = MoveHistory::new(game.side_to_move());
        Self {
            game,
            config,
            selector,
            history,
            console,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        info!(
            white = ?self.config.white,
            black = ?self.config.black,
            depth = self.selector.depth(),
            fen = %self.game.fen(),
            "session started"
        );

        loop {
            self.console.say(&render_board(&self.game))?;

            if let Some(outcome) = self.game.outcome() {
                self.console.say(&format!("Game over: {outcome}"))?;
                self.console.say(&self.history.format())?;
                info!(%outcome, plies = self.history.len(), "game over");
                return Ok(SessionEnd::GameOver(outcome));
            }

            if let Some(limit) = self.config.max_plies {
                if self.history.len() >= limit as usize {
                    self.console.say(&format!("Stopping after {limit} plies."))?;
                    self.console.say(&self.history.format())?;
                    return Ok(SessionEnd::PlyLimit);
                }
            }

            let side = self.game.side_to_move();
            let played = match self.config.player(side) {
                PlayerKind::Engine => match self.engine_turn()? {
                    Some(mv) => mv,
                    None => return Ok(SessionEnd::EngineStalled),
                },
                PlayerKind::Human => match self.human_turn()? {
                    Some(mv) => mv,
                    None => return Ok(SessionEnd::Abandoned),
                },
            };
            self.history.push(played);
        }
    }

    fn engine_turn(&mut self) -> Result<Option<Move>> {
        let side = self.game.side_to_move();
        let Some(mv) = self.selector.choose_and_apply_move(&mut self.game) else {
            warn!(fen = %self.game.fen(), "engine found no move");
            self.console.say("Engine has no move to play.")?;
            return Ok(None);
        };
        info!(%side, mv = %mv, "engine move");
        self.console.say(&format!("Engine ({side}) plays {mv}"))?;
        Ok(Some(mv))
    }

    /// Reads commands until a legal move is played. `None` on quit or end
    /// of input.
    fn human_turn(&mut self) -> Result<Option<Move>> {
        let side = self.game.side_to_move();
        loop {
            let Some(line) = self
                .console
                .ask(&format!("{side} to move> "))
                .context("failed to read move")?
            else {
                return Ok(None);
            };

            match parse_command(&line) {
                Command::Move { from, to, promo } => {
                    let promotes = needs_promotion(&self.game, from, to);
                    let applied = match promo {
                        Some(kind) => try_apply_human_move(&mut self.game, from, to, Some(kind)),
                        None => try_apply_with_prompt(&mut self.game, from, to, &mut self.console),
                    };
                    if applied {
                        // A prompted promotion piece now stands on `to`.
                        let promo = match promo {
                            None if promotes => self.game.piece_at(to).map(|pc| pc.kind),
                            typed => typed,
                        };
                        return Ok(Some(Move { from, to, promo }));
                    }
                    self.console.say("Illegal move, try again.")?;
                }
                Command::Moves => {
                    let moves: Vec<String> =
                        self.game.legal_moves().iter().map(|m| m.to_string()).collect();
                    self.console.say(&moves.join(" "))?;
                }
                Command::History => self.console.say(&self.history.format())?,
                Command::Help => self.console.say(HELP)?,
                Command::Quit => return Ok(None),
                Command::Unknown(text) => {
                    self.console
                        .say(&format!("Unrecognised input {text:?}. Type help for commands."))?;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
