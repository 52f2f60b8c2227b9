//! Scoped apply/undo.

use std::ops::{Deref, DerefMut};

use crate::{Move, RulesEngine};

/// A move applied to a board for the lifetime of this value.
///
/// Dropping the guard undoes the move, so the matching `undo` runs on every
/// exit path out of the scope that created it: normal fall-through, `break`
/// out of a move loop, early `return`, or unwinding. While the guard is alive
/// the board is reachable only through it, which keeps nested applies LIFO.
pub struct Applied<'a, R: RulesEngine + ?Sized> {
    board: &'a mut R,
}

impl<'a, R: RulesEngine + ?Sized> Applied<'a, R> {
    pub fn new(board: &'a mut R, mv: Move) -> Self {
        board.apply(mv);
        Self { board }
    }
}

impl<R: RulesEngine + ?Sized> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.board
    }
}

impl<R: RulesEngine + ?Sized> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.board
    }
}

impl<R: RulesEngine + ?Sized> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.board.undo();
    }
}
