//! Depth-limited minimax search with alpha-beta pruning
//!
//! The board is mutated in place: each child is visited through a scoped
//! apply guard, so it is back in its original state whenever a call returns.
//! Moves are searched in the order the rules engine produces them; there is
//! no move ordering and no transposition table. Both would slot in around
//! the move loop in [`Searcher::search`] without changing its results.

use chess_core::{Move, RulesEngine};

use crate::eval::Evaluator;

/// Bound used for an open search window. `-INFINITY` does not overflow.
pub const INFINITY: i32 = i32::MAX;

/// Score of a node and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at depth 0, at terminal positions, and when no move was searched.
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Runs searches with a borrowed evaluator and counts visited nodes.
pub struct Searcher<'a, E: ?Sized> {
    evaluator: &'a E,
    nodes: u64,
}

impl<'a, E: ?Sized> Searcher<'a, E> {
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` to `depth` plies within `[alpha, beta]`.
    ///
    /// White maximizes when `maximizing` is true. Ties keep the first move
    /// in enumeration order. With an open window the score and move are
    /// those of a full minimax over the same tree; pruning only skips nodes.
    pub fn search<R>(
        &mut self,
        board: &mut R,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult
    where
        R: RulesEngine,
        E: Evaluator<R>,
    {
        debug_assert!(alpha <= beta, "search window inverted: {alpha} > {beta}");
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(self.evaluator.evaluate(board));
        }

        let mut moves = Vec::with_capacity(64);
        board.legal_moves_into(&mut moves);
        if moves.is_empty() {
            return SearchResult::leaf(self.evaluator.evaluate(board));
        }

        let mut best: Option<(i32, Move)> = None;

        for mv in moves {
            let score = {
                let mut child = board.apply_scoped(mv);
                self.search(&mut *child, depth - 1, alpha, beta, !maximizing)
                    .score
            };

            let improves = match best {
                None => true,
                Some((best_score, _)) if maximizing => score > best_score,
                Some((best_score, _)) => score < best_score,
            };
            if improves {
                best = Some((score, mv));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break; // cutoff
            }
        }

        match best {
            Some((score, mv)) => SearchResult {
                score,
                best_move: Some(mv),
            },
            None => SearchResult::leaf(self.evaluator.evaluate(board)),
        }
    }
}

/// One-shot search with a fresh [`Searcher`].
pub fn search<R, E>(
    board: &mut R,
    evaluator: &E,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> SearchResult
where
    R: RulesEngine,
    E: Evaluator<R> + ?Sized,
{
    Searcher::new(evaluator).search(board, depth, alpha, beta, maximizing)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
