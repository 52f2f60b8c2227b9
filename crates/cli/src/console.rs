//! Line-oriented terminal input.

use std::io::{self, BufRead, Write};

use chess_core::{PieceKind, PromotionPrompt, Square};
use tracing::warn;

/// A parsed line of human input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Two squares, plus a promotion piece if one was typed (`e7e8q`).
    Move {
        from: Square,
        to: Square,
        promo: Option<PieceKind>,
    },
    Moves,
    History,
    Help,
    Quit,
    Unknown(String),
}

/// Accepts `e2e4`, `e2 e4`, `e2-e4` and `e7e8q`, plus a few words.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "quit" | "exit" | "q" => return Command::Quit,
        "moves" => return Command::Moves,
        "history" => return Command::History,
        "help" | "?" => return Command::Help,
        _ => {}
    }

    let compact: String = line
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    match compact.parse::<chess_core::Move>() {
        Ok(mv) => Command::Move {
            from: mv.from,
            to: mv.to,
            promo: mv.promo,
        },
        Err(_) => Command::Unknown(line),
    }
}

pub const HELP: &str = "\
Enter a move as two squares: e2e4 or e2 e4 (add q/r/b/n to promote, e.g. e7e8q).
Other commands: moves, history, help, quit";

/// Terminal wrapper over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> PromotionPrompt for Console<R, W> {
    /// Asks until a promotion piece is named. End of input or a read error
    /// falls back to a queen.
    fn choose_promotion(&mut self) -> PieceKind {
        loop {
            match self.ask("Promote to [q/r/b/n]: ") {
                Ok(Some(answer)) => {
                    let choice = answer
                        .chars()
                        .next()
                        .and_then(PieceKind::from_letter)
                        .filter(|kind| PieceKind::PROMOTIONS.contains(kind));
                    if let Some(kind) = choice {
                        return kind;
                    }
                }
                Ok(None) => return PieceKind::Queen,
                Err(err) => {
                    warn!(%err, "promotion prompt failed, promoting to queen");
                    return PieceKind::Queen;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod console_tests;
