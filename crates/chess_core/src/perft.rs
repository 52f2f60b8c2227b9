use crate::{Move, RulesEngine};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, walking
/// the tree with scoped apply/undo so the board comes back unchanged.
pub fn perft<R: RulesEngine>(board: &mut R, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner<R: RulesEngine>(board: &mut R, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        board.legal_moves_into(buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = board.apply_scoped(mv);
            nodes += inner(&mut *child, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}
