//! Move generation
//!
//! The generator implements the reduced rule set: piece movement, blocking and capture, but no
//! check detection. A move that leaves the mover's own king capturable is still generated, and
//! the opposing king's square is an ordinary capture target.

use crate::board::Board;
use crate::geometry;
use crate::moves::Move;
use crate::types::{Cell, Color, Coord, Piece};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// The 8 knight jumps. Knights ignore blocking, so each on-board landing square is checked
/// directly.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The 8 king steps.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// List of moves, stored inline
///
/// The backing store is an [`ArrayVec`], so collecting moves never allocates.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 256>);

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

impl Deref for MoveList {
    type Target = ArrayVec<Move, 256>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sink for generated moves
///
/// Implemented for the common collection types, so callers can collect moves into their own
/// buffers instead of going through [`MoveList`].
pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl<const N: usize> MovePush for ArrayVec<Move, N> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

fn gen_pawn<P: MovePush>(b: &Board, src: Coord, c: Color, dst: &mut P) {
    let forward = geometry::pawn_forward(c);
    if let Some(step) = src.try_shift(0, forward) {
        if b.get(step).is_empty() {
            dst.push(Move::new(src, step));
            if src.rank() == geometry::pawn_home_rank(c) {
                if let Some(double) = step.try_shift(0, forward) {
                    if b.get(double).is_empty() {
                        dst.push(Move::new(src, double));
                    }
                }
            }
        }
    }
    for delta_file in [-1, 1] {
        if let Some(take) = src.try_shift(delta_file, forward) {
            if b.get(take).color() == Some(c.inv()) {
                dst.push(Move::new(src, take));
            }
        }
    }
}

fn gen_leaper<P: MovePush>(
    b: &Board,
    src: Coord,
    c: Color,
    offsets: &[(i8, i8)],
    dst: &mut P,
) {
    for &(delta_file, delta_rank) in offsets {
        if let Some(target) = src.try_shift(delta_file, delta_rank) {
            if b.get(target).color() != Some(c) {
                dst.push(Move::new(src, target));
            }
        }
    }
}

fn gen_slider<P: MovePush>(b: &Board, src: Coord, c: Color, dirs: &[(i8, i8)], dst: &mut P) {
    for &(delta_file, delta_rank) in dirs {
        let mut cur = src;
        while let Some(next) = cur.try_shift(delta_file, delta_rank) {
            match b.get(next).color() {
                None => {
                    dst.push(Move::new(src, next));
                    cur = next;
                }
                Some(owner) => {
                    if owner != c {
                        dst.push(Move::new(src, next));
                    }
                    break;
                }
            }
        }
    }
}

/// Pushes every legal destination for the piece `cell` standing on `src` into `dst`
///
/// `cell` must be equal to `b.get(src)`; the generator trusts the caller-supplied occupant and
/// doesn't re-fetch it. An empty `cell` produces nothing.
///
/// Destinations come out in a fixed order: for sliders, direction by direction with increasing
/// distance along each ray; for pawns, single step, double step, then the two captures. The
/// order carries no priority, it just makes the output reproducible.
pub fn destinations_into<P: MovePush>(b: &Board, src: Coord, cell: Cell, dst: &mut P) {
    let (c, piece) = match (cell.color(), cell.piece()) {
        (Some(c), Some(p)) => (c, p),
        _ => return,
    };
    match piece {
        Piece::Pawn => gen_pawn(b, src, c, dst),
        Piece::Knight => gen_leaper(b, src, c, &KNIGHT_OFFSETS, dst),
        Piece::King => gen_leaper(b, src, c, &KING_OFFSETS, dst),
        Piece::Bishop => gen_slider(b, src, c, &BISHOP_DIRS, dst),
        Piece::Rook => gen_slider(b, src, c, &ROOK_DIRS, dst),
        Piece::Queen => {
            gen_slider(b, src, c, &BISHOP_DIRS, dst);
            gen_slider(b, src, c, &ROOK_DIRS, dst);
        }
    }
}

/// Returns every legal destination for the piece `cell` standing on `src`
///
/// See [`destinations_into`] for the contract.
pub fn destinations(b: &Board, src: Coord, cell: Cell) -> MoveList {
    let mut res = MoveList::new();
    destinations_into(b, src, cell, &mut res);
    res
}

/// Pushes every move available to color `c` into `dst`, scanning squares in coordinate order
pub fn gen_side_into<P: MovePush>(b: &Board, c: Color, dst: &mut P) {
    for src in Coord::iter() {
        let cell = b.get(src);
        if cell.color() == Some(c) {
            destinations_into(b, src, cell, dst);
        }
    }
}

/// Returns every move available to color `c`
pub fn gen_side(b: &Board, c: Color) -> MoveList {
    let mut res = MoveList::new();
    gen_side_into(b, c, &mut res);
    res
}

/// Returns every move available to the side to move
#[inline]
pub fn gen_all(b: &Board) -> MoveList {
    gen_side(b, b.side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn dests(b: &Board, src: &str) -> BTreeSet<Coord> {
        let src = Coord::from_str(src).unwrap();
        destinations(b, src, b.get(src))
            .iter()
            .map(|m| m.dst())
            .collect()
    }

    fn coords(squares: &[&str]) -> BTreeSet<Coord> {
        squares.iter().map(|s| Coord::from_str(s).unwrap()).collect()
    }

    #[test]
    fn test_empty_cell() {
        let b = Board::initial();
        assert!(destinations(&b, Coord::from_str("e4").unwrap(), Cell::EMPTY).is_empty());
    }

    #[test]
    fn test_initial_pawn() {
        // The pawn on e2 (row 6, column 4) gets exactly the single and the double step.
        let b = Board::initial();
        let list = destinations(&b, Coord::from_str("e2").unwrap(), b.get2(File::E, Rank::R2));
        let got: Vec<_> = list.iter().map(|m| m.dst().to_string()).collect();
        assert_eq!(got, vec!["e3".to_string(), "e4".to_string()]);
        assert!(list.iter().all(|m| !m.is_capture(&b)));
    }

    #[test]
    fn test_pawn_blocked() {
        // Blocking the intermediate square kills both steps; blocking only the far square
        // kills just the double step.
        let b = Board::from_fen("8/8/8/8/8/4n3/4P3/8 w").unwrap();
        assert_eq!(dests(&b, "e2"), coords(&[]));

        let b = Board::from_fen("8/8/8/8/4n3/8/4P3/8 w").unwrap();
        assert_eq!(dests(&b, "e2"), coords(&["e3"]));

        // Away from the home rank there is no double step at all.
        let b = Board::from_fen("8/8/8/8/8/4P3/8/8 w").unwrap();
        assert_eq!(dests(&b, "e3"), coords(&["e4"]));
    }

    #[test]
    fn test_pawn_captures() {
        let b = Board::from_fen("8/8/8/8/3n1b2/4P3/8/8 w").unwrap();
        assert_eq!(dests(&b, "e3"), coords(&["e4", "d4", "f4"]));

        // Own pieces are not capturable, and the forward square is never a capture.
        let b = Board::from_fen("8/8/8/8/3N1n2/4P3/8/8 w").unwrap();
        assert_eq!(dests(&b, "e3"), coords(&["e4", "f4"]));

        // Black pawns go the other way.
        let b = Board::from_fen("8/8/4p3/3N1N2/8/8/8/8 b").unwrap();
        assert_eq!(dests(&b, "e6"), coords(&["e5", "d5", "f5"]));
    }

    #[test]
    fn test_pawn_edge_files() {
        // A pawn on the a-file has only one capture direction.
        let b = Board::from_fen("8/8/8/8/1n6/P7/8/8 w").unwrap();
        assert_eq!(dests(&b, "a3"), coords(&["a4", "b4"]));
    }

    #[test]
    fn test_knight() {
        let b = Board::from_fen("8/8/8/8/4N3/8/8/8 w").unwrap();
        assert_eq!(
            dests(&b, "e4"),
            coords(&["d6", "f6", "c5", "g5", "c3", "g3", "d2", "f2"])
        );

        // Jumps ignore blockers; own pieces mask targets, enemies stay capturable.
        let b = Board::from_fen("8/8/8/2P1p3/4N3/2p5/3P4/8 w").unwrap();
        assert_eq!(
            dests(&b, "e4"),
            coords(&["d6", "f6", "g5", "c3", "g3", "f2"])
        );
    }

    #[test]
    fn test_knight_corner() {
        let b = Board::from_fen("N7/8/8/8/8/8/8/8 w").unwrap();
        assert_eq!(dests(&b, "a8"), coords(&["b6", "c7"]));
    }

    #[test]
    fn test_king() {
        let b = Board::from_fen("8/8/8/8/4K3/8/8/8 w").unwrap();
        assert_eq!(
            dests(&b, "e4"),
            coords(&["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"])
        );

        let b = Board::from_fen("8/8/8/3pP3/3K4/3P4/8/8 w").unwrap();
        assert_eq!(dests(&b, "d4"), coords(&["c3", "c4", "c5", "d5", "e3", "e4"]));

        let b = Board::from_fen("8/8/8/8/8/8/8/K7 w").unwrap();
        assert_eq!(dests(&b, "a1"), coords(&["a2", "b1", "b2"]));
    }

    #[test]
    fn test_rook_rays() {
        // An enemy three squares to the right ends the ray and is included; a friend two
        // squares above blocks without being included.
        let b = Board::from_fen("8/8/8/1P6/8/1R2n3/8/8 w").unwrap();
        assert_eq!(
            dests(&b, "b3"),
            coords(&["a3", "c3", "d3", "e3", "b4", "b1", "b2"])
        );
    }

    #[test]
    fn test_bishop_rays() {
        let b = Board::from_fen("8/8/8/2p5/8/4B3/8/2P5 w").unwrap();
        assert_eq!(
            dests(&b, "e3"),
            coords(&["d4", "c5", "f4", "g5", "h6", "d2", "f2", "g1"])
        );
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let b = Board::from_fen("8/8/8/2p5/8/1Pq5/8/8 b").unwrap();
        let queen = dests(&b, "c3");
        let mut split = MoveList::new();
        let src = Coord::from_str("c3").unwrap();
        gen_slider(&b, src, Color::Black, &BISHOP_DIRS, &mut split);
        gen_slider(&b, src, Color::Black, &ROOK_DIRS, &mut split);
        let split: BTreeSet<_> = split.iter().map(|m| m.dst()).collect();
        assert_eq!(queen, split);
    }

    #[test]
    fn test_slider_ray_order() {
        // Each ray comes out closest square first, rays in direction-table order.
        let b = Board::from_fen("8/8/8/8/8/8/8/R7 w").unwrap();
        let list = destinations(&b, Coord::from_str("a1").unwrap(), b.get2(File::A, Rank::R1));
        let got: Vec<_> = list.iter().map(|m| m.dst().to_string()).collect();
        let expected = [
            "b1", "c1", "d1", "e1", "f1", "g1", "h1", // along the rank
            "a2", "a3", "a4", "a5", "a6", "a7", "a8", // up the file
        ];
        assert_eq!(got, expected.map(str::to_string).to_vec());
    }

    #[test]
    fn test_all_destinations_on_board() {
        let boards = [
            Board::initial(),
            Board::from_fen("q6k/8/8/3N4/8/8/P7/K6Q w").unwrap(),
            Board::from_fen("8/P6p/8/2b5/2B5/8/p6P/8 b").unwrap(),
        ];
        for b in &boards {
            for color in [Color::White, Color::Black] {
                for m in &gen_side(b, color) {
                    assert!(m.dst().index() < 64);
                    assert_ne!(b.get(m.dst()).color(), Some(color));
                }
            }
        }
    }

    #[test]
    fn test_king_is_capturable() {
        // No check rule: the opposing king is a regular capture target.
        let b = Board::from_fen("8/8/8/8/8/4k3/8/4R3 w").unwrap();
        assert!(dests(&b, "e1").contains(&Coord::from_str("e3").unwrap()));
    }

    #[test]
    fn test_gen_all_initial() {
        // 16 pawn moves plus 4 knight moves per side.
        let b = Board::initial();
        assert_eq!(gen_all(&b).len(), 20);
        assert_eq!(gen_side(&b, Color::Black).len(), 20);
    }
}
