//! Validation of moves proposed by a human player.
//!
//! A proposal is two squares plus, for a pawn reaching its last rank, the
//! piece to promote to. It is accepted only if it is exactly one of the
//! current legal moves; anything else is dropped without touching the board.

use crate::{Move, PieceKind, RulesEngine, Square};

/// Source of the promotion piece when a human move needs one.
pub trait PromotionPrompt {
    fn choose_promotion(&mut self) -> PieceKind;
}

/// Always answers with the same piece.
#[derive(Debug, Clone, Copy)]
pub struct FixedPromotion(pub PieceKind);

impl PromotionPrompt for FixedPromotion {
    fn choose_promotion(&mut self) -> PieceKind {
        self.0
    }
}

/// True if moving the piece on `from` to `to` would take a pawn of the side
/// to move onto its last rank.
pub fn needs_promotion<R: RulesEngine + ?Sized>(board: &R, from: Square, to: Square) -> bool {
    let side = board.side_to_move();
    match board.piece_at(from) {
        Some(pc) => {
            pc.kind == PieceKind::Pawn && pc.color == side && to.rank() == side.promotion_rank()
        }
        None => false,
    }
}

/// Applies the proposed move if it is legal. Returns whether it was applied.
pub fn try_apply_human_move<R: RulesEngine + ?Sized>(
    board: &mut R,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> bool {
    let candidate = Move {
        from,
        to,
        promo: promotion,
    };
    if !board.legal_moves().contains(&candidate) {
        return false;
    }
    board.apply(candidate);
    true
}

/// Like [`try_apply_human_move`], asking `prompt` for the promotion piece
/// first when the move needs one.
pub fn try_apply_with_prompt<R, P>(board: &mut R, from: Square, to: Square, prompt: &mut P) -> bool
where
    R: RulesEngine + ?Sized,
    P: PromotionPrompt + ?Sized,
{
    let promotion = needs_promotion(board, from, to).then(|| prompt.choose_promotion());
    try_apply_human_move(board, from, to, promotion)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
