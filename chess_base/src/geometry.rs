use crate::types::{Color, Rank};

pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// Rank on which the pawns of color `c` start, and from which the double step is allowed.
pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Rank on which a pawn of color `c` is replaced by a queen.
pub const fn promotion_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R8,
        Color::Black => Rank::R1,
    }
}

/// Rank delta of a single forward pawn step for color `c`.
pub const fn pawn_forward(c: Color) -> i8 {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}
