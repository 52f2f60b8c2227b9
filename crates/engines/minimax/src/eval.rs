//! Material-based position evaluation

use chess_core::{Color, PieceKind, RulesEngine, Square};
use serde::{Deserialize, Serialize};

/// Static score of a board, positive when White is better.
pub trait Evaluator<B: ?Sized> {
    fn evaluate(&self, board: &B) -> i32;
}

/// Material value of each piece kind.
///
/// Built once at startup and handed to the evaluator; missing fields in a
/// config file fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    /// Zero by default; both kings are always on the board.
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 1,
            knight: 3,
            bishop: 3,
            rook: 5,
            queen: 9,
            king: 0,
        }
    }
}

impl PieceValues {
    #[inline]
    pub fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    /// True if every value is nonnegative.
    pub fn is_valid(&self) -> bool {
        PieceKind::ALL.iter().all(|&kind| self.value(kind) >= 0)
    }
}

/// Sums piece values over the board: White's pieces count positive,
/// Black's negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialEvaluator {
    values: PieceValues,
}

impl MaterialEvaluator {
    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl<B: RulesEngine + ?Sized> Evaluator<B> for MaterialEvaluator {
    fn evaluate(&self, board: &B) -> i32 {
        let mut score = 0i32;
        for sq in Square::all() {
            if let Some(pc) = board.piece_at(sq) {
                let v = self.values.value(pc.kind);
                score += if pc.color == Color::White { v } else { -v };
            }
        }
        score
    }
}

/// Evaluates `board` with the default piece values.
pub fn evaluate<B: RulesEngine + ?Sized>(board: &B) -> i32 {
    MaterialEvaluator::default().evaluate(board)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
