//! Text rendering of the board and the move list.

use std::fmt::Write;

use chess_core::{Color, Move, RulesEngine, Square};

/// Board diagram with rank 8 at the top. White pieces are upper case,
/// empty squares are dots.
pub fn render_board<R: RulesEngine + ?Sized>(board: &R) -> String {
    let mut out = String::new();
    for rank in (0..8u8).rev() {
        let _ = write!(out, "{} ", rank + 1);
        for file in 0..8u8 {
            let symbol = Square::from_coords(file, rank)
                .and_then(|sq| board.piece_at(sq))
                .map_or('.', |pc| pc.symbol());
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

/// Moves played so far, numbered the usual way.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    first_to_move: Color,
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new(first_to_move: Color) -> Self {
        Self {
            first_to_move,
            moves: Vec::new(),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// One line per full move, e.g. `1. e2e4 e7e5`. A game that starts with
    /// Black to move opens with `1... `.
    pub fn format(&self) -> String {
        let mut lines = Vec::new();
        let mut rest = self.moves.as_slice();
        let mut number = 1;

        if self.first_to_move == Color::Black {
            if let Some((first, tail)) = rest.split_first() {
                lines.push(format!("{number}... {first}"));
                rest = tail;
                number += 1;
            }
        }

        for pair in rest.chunks(2) {
            let line = match pair {
                [white, black] => format!("{number}. {white} {black}"),
                [white] => format!("{number}. {white}"),
                _ => continue,
            };
            lines.push(line);
            number += 1;
        }
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
