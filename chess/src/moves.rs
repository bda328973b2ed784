//! Moves, move execution and validation

use crate::board::Board;
use crate::geometry;
use crate::movegen;
use crate::types::{Cell, Coord, CoordParseError, Piece};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Move validation error
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// The source square doesn't hold a piece of the side to move
    #[error("source square doesn't hold a piece of the moving side")]
    NotSane,
    /// The destination is not among the legal destinations of the source piece
    #[error("destination is not reachable")]
    NotLegal,
}

/// Error parsing [`Move`] from a string
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum RawParseError {
    #[error("bad string length")]
    BadLength,
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
}

/// A move from one square to another
///
/// The move carries no piece or capture information; both are recovered from the board it is
/// applied to. Promotion isn't encoded either, as a pawn reaching the far rank always becomes
/// a queen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Coord,
    dst: Coord,
}

impl Move {
    #[inline]
    pub const fn new(src: Coord, dst: Coord) -> Move {
        Move { src, dst }
    }

    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Returns `true` if performing this move on `b` captures a piece
    ///
    /// The flag is derived, not stored: it holds iff the destination currently belongs to the
    /// side opposite the piece on the source square.
    pub fn is_capture(&self, b: &Board) -> bool {
        match b.get(self.src).color() {
            Some(c) => b.get(self.dst).color() == Some(c.inv()),
            None => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl FromStr for Move {
    type Err = RawParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if s.len() != 4 {
            return Err(RawParseError::BadLength);
        }
        let src = Coord::from_str(&s[0..2]).map_err(RawParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(RawParseError::BadDst)?;
        Ok(Move::new(src, dst))
    }
}

/// Applies `mv` to the board without validating it
///
/// The caller must ensure that the source square holds a piece of the side to move and that the
/// destination was produced by [`movegen::destinations`] for that source. The function itself
/// only performs the effects, in order: the destination contents are discarded, the piece is
/// relocated (a pawn arriving at the promotion rank of its color is replaced by a queen of the
/// same color), and the turn flips.
///
/// Use [`make_move`] if the move may not be pre-validated.
pub fn make_move_unchecked(b: &mut Board, mv: Move) {
    let mut cell = b.get(mv.src());
    if let (Some(c), Some(Piece::Pawn)) = (cell.color(), cell.piece()) {
        if mv.dst().rank() == geometry::promotion_rank(c) {
            cell = Cell::from_parts(c, Piece::Queen);
        }
    }
    b.put(mv.dst(), cell);
    b.put(mv.src(), Cell::EMPTY);
    b.side = b.side.inv();
}

/// Checks that `mv` can be performed on `b`
///
/// The source square must hold a piece of the side to move, and the destination must be among
/// the legal destinations of that piece.
pub fn validate(b: &Board, mv: Move) -> Result<(), ValidateError> {
    let cell = b.get(mv.src());
    if cell.color() != Some(b.side) {
        return Err(ValidateError::NotSane);
    }
    if !movegen::destinations(b, mv.src(), cell).contains(&mv) {
        return Err(ValidateError::NotLegal);
    }
    Ok(())
}

/// Validates `mv` and applies it to the board
///
/// This is the entry point for callers that cannot guarantee pre-validated input; the board is
/// left untouched on error.
pub fn make_move(b: &mut Board, mv: Move) -> Result<(), ValidateError> {
    validate(b, mv)?;
    make_move_unchecked(b, mv);
    Ok(())
}
