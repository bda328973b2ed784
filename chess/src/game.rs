//! Game session: a board together with the transient selection state
//!
//! [`Game`] is the handle a front-end talks to. It owns the board and the "currently selected
//! square" state, so several independent games can coexist in one process. The cycle per turn
//! is: select a square of the side to move, read the offered destinations, then either perform
//! one of them or let the auto-player act.

use crate::autoplay;
use crate::board::Board;
use crate::movegen::{self, MoveList};
use crate::moves::{self, Move, ValidateError};
use crate::types::{Color, Coord};

use rand::Rng;
use thiserror::Error;

/// Error performing a move through [`Game::try_move`]
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// No square is currently selected
    #[error("no square is selected")]
    NoSelection,
    /// The move failed validation
    #[error("invalid move: {0}")]
    Validate(#[from] ValidateError),
}

/// A selected square together with the destinations offered for it
///
/// The offered set is produced by the move generator at selection time and recomputed on every
/// selection; it is never stored across moves.
#[derive(Debug, Clone)]
pub struct Selection {
    src: Coord,
    targets: MoveList,
}

impl Selection {
    #[inline]
    pub fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub fn targets(&self) -> &[Move] {
        &self.targets
    }
}

/// A single game
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    selection: Option<Selection>,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game {
            board,
            selection: None,
        }
    }

    pub fn new_initial() -> Game {
        Game::new(Board::initial())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    ///
    /// Front-ends use this to render the status line and to decide whether a click should
    /// select anything at all.
    #[inline]
    pub fn side(&self) -> Color {
        self.board.side
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Selects the square `src`
    ///
    /// Only a square holding a piece of the side to move can be selected; anything else (an
    /// empty square, an opposing piece) drops the current selection instead. A successful
    /// selection replaces the previous one and carries a freshly generated destination set,
    /// which may be empty.
    pub fn select(&mut self, src: Coord) -> Option<&Selection> {
        let cell = self.board.get(src);
        if cell.color() != Some(self.board.side) {
            self.selection = None;
            return None;
        }
        self.selection = Some(Selection {
            src,
            targets: movegen::destinations(&self.board, src, cell),
        });
        self.selection.as_ref()
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Moves the selected piece to `dst`
    ///
    /// `dst` must be among the destinations offered by the current selection. On success the
    /// selection is dropped and the turn passes to the opponent; on error both the board and
    /// the selection stay as they were.
    pub fn try_move(&mut self, dst: Coord) -> Result<Move, MoveError> {
        let sel = self.selection.as_ref().ok_or(MoveError::NoSelection)?;
        let mv = Move::new(sel.src, dst);
        if !sel.targets.contains(&mv) {
            return Err(ValidateError::NotLegal.into());
        }
        moves::make_move_unchecked(&mut self.board, mv);
        self.selection = None;
        Ok(mv)
    }

    /// Lets the auto-player pick and perform a move for `side`
    ///
    /// No-ops (returning [`None`]) when `side` is not the side to move or has no moves; see
    /// [`autoplay::choose_and_execute`]. A performed move drops the current selection.
    pub fn auto_move<R: Rng>(&mut self, side: Color, rng: &mut R) -> Option<Move> {
        let mv = autoplay::choose_and_execute(&mut self.board, side, rng)?;
        self.selection = None;
        Some(mv)
    }

    /// Puts the game back to the initial position and drops the selection
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.selection = None;
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new_initial()
    }
}
