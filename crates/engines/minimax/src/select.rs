//! Move choice for the automated side.

use chess_core::{needs_promotion, Color, Move, PieceKind, RulesEngine};
use tracing::debug;

use crate::eval::{Evaluator, MaterialEvaluator, PieceValues};
use crate::search::{Searcher, INFINITY};

/// Search depth in plies used when none is configured.
pub const DEFAULT_DEPTH: u8 = 3;

/// Picks and plays the automated side's move: a fixed-depth search over an
/// open window, then auto-promotion to a queen for a pawn move that reaches
/// the last rank without a promotion piece.
#[derive(Debug, Clone)]
pub struct MoveSelector<E = MaterialEvaluator> {
    evaluator: E,
    depth: u8,
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(MaterialEvaluator::default(), DEFAULT_DEPTH)
    }
}

impl MoveSelector {
    pub fn with_values(values: PieceValues, depth: u8) -> Self {
        Self::new(MaterialEvaluator::new(values), depth)
    }
}

impl<E> MoveSelector<E> {
    pub fn new(evaluator: E, depth: u8) -> Self {
        Self { evaluator, depth }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Searches `board` and returns the move to play, without playing it.
    /// The board is left exactly as it was.
    pub fn select<R>(&self, board: &mut R) -> Option<Move>
    where
        R: RulesEngine,
        E: Evaluator<R>,
    {
        let maximizing = board.side_to_move() == Color::White;
        let mut searcher = Searcher::new(&self.evaluator);
        let result = searcher.search(board, self.depth, -INFINITY, INFINITY, maximizing);

        debug!(
            depth = self.depth,
            nodes = searcher.nodes(),
            score = result.score,
            best = ?result.best_move.map(|mv| mv.to_string()),
            "search complete"
        );

        result.best_move.map(|mv| auto_promote(board, mv))
    }

    /// Searches `board` and commits the chosen move. Returns `None`, leaving
    /// the board untouched, when there is nothing to play.
    pub fn choose_and_apply_move<R>(&self, board: &mut R) -> Option<Move>
    where
        R: RulesEngine,
        E: Evaluator<R>,
    {
        let Some(mv) = self.select(board) else {
            debug!("no move found, skipping turn");
            return None;
        };
        board.apply(mv);
        Some(mv)
    }
}

/// Gives a queen to a pawn move onto the last rank that carries no piece.
pub fn auto_promote<R: RulesEngine + ?Sized>(board: &R, mv: Move) -> Move {
    if mv.promo.is_none() && needs_promotion(board, mv.from, mv.to) {
        Move {
            promo: Some(PieceKind::Queen),
            ..mv
        }
    } else {
        mv
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
