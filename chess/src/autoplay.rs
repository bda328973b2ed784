//! Automatic move selection
//!
//! The auto-player picks uniformly at random among every move available to its side. The
//! random source is injected by the caller, so a seeded generator makes the whole thing
//! deterministic. Scheduling (the "thinking" delay before the move is shown) is the caller's
//! business; everything here is synchronous.

use crate::board::Board;
use crate::movegen;
use crate::moves::{self, Move};
use crate::types::Color;

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a random move for `side`, without performing it
///
/// Returns [`None`] if `side` is not the side to move (so a stale invocation after a reset is
/// a harmless no-op), or if `side` has no moves at all. The latter is not an error: this rule
/// set has no checkmate or stalemate signalling.
pub fn choose_move<R: Rng>(b: &Board, side: Color, rng: &mut R) -> Option<Move> {
    if b.side != side {
        return None;
    }
    movegen::gen_side(b, side).choose(rng).copied()
}

/// Picks a random move for `side` and performs it
///
/// Returns the move that was made. When [`choose_move`] yields nothing, the board is left
/// completely untouched.
pub fn choose_and_execute<R: Rng>(b: &mut Board, side: Color, rng: &mut R) -> Option<Move> {
    let mv = choose_move(b, side, rng)?;
    moves::make_move_unchecked(b, mv);
    Some(mv)
}
