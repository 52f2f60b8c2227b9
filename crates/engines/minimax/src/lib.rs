//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material evaluation.
//! Searches run against any [`chess_core::RulesEngine`]; the engine never
//! looks at chess rules itself.
//!
//! The pieces:
//! - [`Evaluator`] / [`MaterialEvaluator`]: static score, White positive
//! - [`Searcher`]: recursive minimax with alpha-beta pruning
//! - [`MoveSelector`]: per-turn entry point, auto-promotion, committing apply

mod eval;
mod search;
mod select;

#[cfg(test)]
mod test_tree;

pub use eval::{evaluate, Evaluator, MaterialEvaluator, PieceValues};
pub use search::{search, SearchResult, Searcher, INFINITY};
pub use select::{auto_promote, MoveSelector, DEFAULT_DEPTH};
