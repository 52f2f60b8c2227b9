pub mod error;
pub mod game;
pub mod guard;
pub mod input;
pub mod perft;
pub mod types;

pub use error::*;
pub use game::{Game, Outcome};
pub use guard::Applied;
pub use input::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// RulesEngine trait: the legality collaborator every search runs against
// =============================================================================

/// Owner of the board state and the rules of the game.
///
/// Search code never inspects the rules directly; it enumerates moves,
/// applies and undoes them, and asks for terminal status through this trait.
/// `apply` and `undo` form a strict stack: every `undo` reverts the most
/// recent outstanding `apply`, restoring the previous state exactly.
pub trait RulesEngine {
    /// Fills `out` with the legal moves for the side to move, in the
    /// engine's own order. `out` is cleared first.
    fn legal_moves_into(&self, out: &mut Vec<Move>);

    /// Plays `mv` in place and flips the side to move.
    ///
    /// `mv` must be one of the current legal moves.
    fn apply(&mut self, mv: Move);

    /// Reverts the most recent `apply`.
    ///
    /// # Panics
    /// If there is no outstanding `apply`.
    fn undo(&mut self);

    /// True once no further play is possible (mate, stalemate or a draw rule).
    fn is_terminal(&self) -> bool;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, sq: Square) -> Option<Piece>;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Applies `mv` and returns a guard that undoes it when dropped.
    fn apply_scoped(&mut self, mv: Move) -> Applied<'_, Self>
    where
        Self: Sized,
    {
        Applied::new(self, mv)
    }
}
