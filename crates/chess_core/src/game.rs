//! Reversible game state backed by the `cozy-chess` rules engine.
//!
//! cozy-chess boards are plain values that only move forward, so undo is a
//! stack of previous boards. The adapter also translates between cozy-chess
//! move encoding (castling as king-takes-own-rook) and the player-facing
//! encoding used everywhere else (castling as the king's two-square move).

use std::fmt;

use cozy_chess::{Board, File};

use crate::error::{ChessError, ChessResult};
use crate::types::*;
use crate::RulesEngine;

/// Why a game cannot continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    Repetition,
    InsufficientMaterial,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate => f.write_str("draw by stalemate"),
            Outcome::FiftyMoveRule => f.write_str("draw by the fifty-move rule"),
            Outcome::Repetition => f.write_str("draw by threefold repetition"),
            Outcome::InsufficientMaterial => f.write_str("draw by insufficient material"),
        }
    }
}

/// A chess game that supports in-place apply and exact undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    /// Boards preceding each outstanding apply, most recent last.
    previous: Vec<Board>,
    /// Hash of every position reached, including the current one.
    hashes: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl Game {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        let hashes = vec![board.hash()];
        Self {
            board,
            previous: Vec::new(),
            hashes,
        }
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of applies not yet undone since this game was created.
    pub fn plies(&self) -> usize {
        self.previous.len()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    /// Reason the game is over, or `None` while play continues.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.has_legal_moves() {
            return Some(if self.in_check() {
                Outcome::Checkmate {
                    winner: color_from_cozy(self.board.side_to_move()).other(),
                }
            } else {
                Outcome::Stalemate
            });
        }
        if self.board.halfmove_clock() >= 100 {
            return Some(Outcome::FiftyMoveRule);
        }
        if self.is_threefold_repetition() {
            return Some(Outcome::Repetition);
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        None
    }

    /// Current position has occurred at least three times. Only positions
    /// since the last capture or pawn move can repeat.
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.hash();
        let window = self.board.halfmove_clock() as usize + 1;
        self.hashes
            .iter()
            .rev()
            .take(window)
            .filter(|&&h| h == current)
            .count()
            >= 3
    }

    /// Neither side can possibly mate: bare kings, a single minor piece,
    /// or bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        use cozy_chess::Piece::*;

        let heavy = self.board.pieces(Pawn) | self.board.pieces(Rook) | self.board.pieces(Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = self.board.pieces(Knight);
        let bishops = self.board.pieces(Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let mut shades = bishops.into_iter().map(|sq| {
            let sq = square_from_cozy(sq);
            (sq.file() + sq.rank()) % 2
        });
        match shades.next() {
            Some(first) => shades.all(|shade| shade == first),
            None => true,
        }
    }

    fn move_from_cozy(&self, mv: cozy_chess::Move) -> Move {
        let mut to = mv.to;
        let stm = self.board.side_to_move();
        if self.board.piece_on(mv.from) == Some(cozy_chess::Piece::King)
            && self.board.color_on(mv.to) == Some(stm)
        {
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
                File::G
            } else {
                File::C
            };
            to = cozy_chess::Square::new(file, mv.from.rank());
        }
        Move {
            from: square_from_cozy(mv.from),
            to: square_from_cozy(to),
            promo: mv.promotion.map(kind_from_cozy),
        }
    }

    fn move_to_cozy(&self, mv: Move) -> cozy_chess::Move {
        let from = square_to_cozy(mv.from);
        let mut to = square_to_cozy(mv.to);
        let stm = self.board.side_to_move();
        let is_castle = self.board.piece_on(from) == Some(cozy_chess::Piece::King)
            && self.board.color_on(from) == Some(stm)
            && mv.from.rank() == mv.to.rank()
            && mv.from.file().abs_diff(mv.to.file()) == 2;
        if is_castle {
            let rights = self.board.castle_rights(stm);
            let rook_file = if mv.to.file() > mv.from.file() {
                rights.short
            } else {
                rights.long
            };
            if let Some(file) = rook_file {
                to = cozy_chess::Square::new(file, from.rank());
            }
        }
        cozy_chess::Move {
            from,
            to,
            promotion: mv.promo.map(kind_to_cozy),
        }
    }
}

impl RulesEngine for Game {
    fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        self.board.generate_moves(|moves| {
            out.extend(moves.into_iter().map(|mv| self.move_from_cozy(mv)));
            false
        });
    }

    fn apply(&mut self, mv: Move) {
        let cozy_mv = self.move_to_cozy(mv);
        debug_assert!(
            self.board.is_legal(cozy_mv),
            "illegal move {mv} applied to {}",
            self.fen()
        );
        self.previous.push(self.board.clone());
        self.board.play_unchecked(cozy_mv);
        self.hashes.push(self.board.hash());
    }

    fn undo(&mut self) {
        let Some(board) = self.previous.pop() else {
            panic!("undo called with no outstanding apply");
        };
        self.hashes.pop();
        self.board = board;
    }

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    fn side_to_move(&self) -> Color {
        color_from_cozy(self.board.side_to_move())
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        let sq = square_to_cozy(sq);
        let kind = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece::new(color_from_cozy(color), kind_from_cozy(kind)))
    }
}

// Helpers

fn square_to_cozy(sq: Square) -> cozy_chess::Square {
    cozy_chess::Square::index(sq.index() as usize)
}

fn square_from_cozy(sq: cozy_chess::Square) -> Square {
    Square::masked(sq as u8)
}

fn color_from_cozy(c: cozy_chess::Color) -> Color {
    match c {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

fn kind_from_cozy(p: cozy_chess::Piece) -> PieceKind {
    match p {
        cozy_chess::Piece::Pawn => PieceKind::Pawn,
        cozy_chess::Piece::Knight => PieceKind::Knight,
        cozy_chess::Piece::Bishop => PieceKind::Bishop,
        cozy_chess::Piece::Rook => PieceKind::Rook,
        cozy_chess::Piece::Queen => PieceKind::Queen,
        cozy_chess::Piece::King => PieceKind::King,
    }
}

fn kind_to_cozy(p: PieceKind) -> cozy_chess::Piece {
    match p {
        PieceKind::Pawn => cozy_chess::Piece::Pawn,
        PieceKind::Knight => cozy_chess::Piece::Knight,
        PieceKind::Bishop => cozy_chess::Piece::Bishop,
        PieceKind::Rook => cozy_chess::Piece::Rook,
        PieceKind::Queen => cozy_chess::Piece::Queen,
        PieceKind::King => cozy_chess::Piece::King,
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
