//! Board and related things

use crate::types::{self, Cell, Color, Coord, File, Piece, Rank};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing the piece placement part of a position string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Error parsing [`Board`] from a position string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum FenParseError {
    /// Position contains non-ASCII characters
    #[error("non-ASCII data in position")]
    NonAscii,
    /// Position doesn't have a board part
    #[error("board not specified")]
    NoBoard,
    /// Error parsing the board part
    #[error("bad board: {0}")]
    Board(#[from] CellsParseError),
    /// Position doesn't have a move side part
    #[error("no move side")]
    NoMoveSide,
    /// Error parsing the move side part
    #[error("bad move side: {0}")]
    MoveSide(#[from] types::ColorParseError),
    /// Position contains extra data
    #[error("extra data in position")]
    ExtraData,
}

/// Game board
///
/// The board holds the full state of a game under this rule set: the contents of the 64 squares
/// plus the side to move. There is no castling, en passant or move counter state, and no
/// validation layer either: any arrangement of pieces is playable, including positions with
/// missing or capturable kings.
///
/// The board is mutated in place by the move execution functions in [`crate::moves`]; everything
/// else only reads it.
///
/// # Example
///
/// ```
/// # use parkchess::{Board, Cell, Color, File, Piece, Rank};
/// #
/// let mut board = Board::empty();
/// board.put2(File::B, Rank::R2, Cell::from_parts(Color::White, Piece::King));
/// board.put2(File::D, Rank::R5, Cell::from_parts(Color::Black, Piece::King));
///
/// assert_eq!(board.as_fen(), "8/8/8/3k4/8/8/1K6/8 w");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    /// Contents of the board
    ///
    /// The indices in this array are the indices of coordinates. You might probably want to use
    /// the functions like [`Board::get()`] or [`Board::put()`] instead of indexing this array
    /// directly.
    pub cells: [Cell; 64],
    /// Side to move
    pub side: Color,
}

impl Board {
    /// Returns an empty board with White to move
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
            side: Color::White,
        }
    }

    /// Returns a board with the initial position
    ///
    /// Each side gets 8 pawns and 8 back-rank pieces; White moves first.
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Cell::from_parts(Color::White, Piece::Pawn));
            res.put2(file, Rank::R7, Cell::from_parts(Color::Black, Piece::Pawn));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            res.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            res.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::C, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::D, rank, Cell::from_parts(color, Piece::Queen));
            res.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            res.put2(File::F, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
        }
        res
    }

    /// Parses a board from a position string
    ///
    /// The notation is the first two fields of FEN: piece placement and side to move. The
    /// remaining FEN fields describe state this rule set doesn't have.
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Board, FenParseError> {
        Board::from_str(fen)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `cell` to the square with coordinate `c`
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    /// Puts `cell` to the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use parkchess::board::PrettyStyle;
    /// # use parkchess::Board;
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    /// W|abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    /// Converts the board into a position string
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this function instead of
    /// `to_string()` for better readability.
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

impl PrettyStyle {
    fn cell_char(&self, cell: Cell) -> char {
        match *self {
            PrettyStyle::Ascii => cell.as_char(),
            PrettyStyle::Utf8 => cell.as_utf8_char(),
        }
    }

    fn frame_chars(&self) -> [char; 3] {
        match *self {
            PrettyStyle::Ascii => ['-', '|', '+'],
            PrettyStyle::Utf8 => ['\u{2500}', '\u{2502}', '\u{253c}'],
        }
    }

    fn indicator_char(&self, side: Color) -> char {
        match (*self, side) {
            (PrettyStyle::Ascii, Color::White) => 'W',
            (PrettyStyle::Ascii, Color::Black) => 'B',
            (PrettyStyle::Utf8, Color::White) => '\u{25cb}',
            (PrettyStyle::Utf8, Color::Black) => '\u{25cf}',
        }
    }
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let [horz, vert, angle] = self.style.frame_chars();
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, vert)?;
            for file in File::iter() {
                write!(f, "{}", self.style.cell_char(self.board.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", horz, angle)?;
        for _ in File::iter() {
            write!(f, "{}", horz)?;
        }
        writeln!(f)?;
        write!(f, "{}{}", self.style.indicator_char(self.board.side), vert)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

fn parse_cells(s: &str) -> Result<[Cell; 64], CellsParseError> {
    let mut cells = [Cell::EMPTY; 64];
    let mut chunks = s.split('/');
    for rank in Rank::iter() {
        let chunk = chunks.next().ok_or(CellsParseError::Underflow)?;
        let mut file = 0_usize;
        for c in chunk.chars() {
            match c {
                '1'..='8' => {
                    file += (c as u8 - b'0') as usize;
                    if file > 8 {
                        return Err(CellsParseError::RankOverflow(rank));
                    }
                }
                _ => {
                    let cell =
                        Cell::from_char(c).ok_or(CellsParseError::UnexpectedChar(c))?;
                    if file >= 8 {
                        return Err(CellsParseError::RankOverflow(rank));
                    }
                    cells[Coord::from_parts(File::from_index(file), rank).index()] = cell;
                    file += 1;
                }
            }
        }
        if file < 8 {
            return Err(CellsParseError::RankUnderflow(rank));
        }
    }
    if chunks.next().is_some() {
        return Err(CellsParseError::Overflow);
    }
    Ok(cells)
}

fn format_cells(cells: &[Cell; 64], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    for rank in Rank::iter() {
        if rank.index() != 0 {
            write!(f, "/")?;
        }
        let mut empty = 0;
        for file in File::iter() {
            let cell = cells[Coord::from_parts(file, rank).index()];
            if cell.is_empty() {
                empty += 1;
                continue;
            }
            if empty != 0 {
                write!(f, "{}", empty)?;
                empty = 0;
            }
            write!(f, "{}", cell)?;
        }
        if empty != 0 {
            write!(f, "{}", empty)?;
        }
    }
    Ok(())
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        if !s.is_ascii() {
            return Err(FenParseError::NonAscii);
        }
        let mut iter = s.split(' ').fuse();
        let cells = parse_cells(iter.next().ok_or(FenParseError::NoBoard)?)?;
        let side = Color::from_str(iter.next().ok_or(FenParseError::NoMoveSide)?)?;
        if iter.next().is_some() {
            return Err(FenParseError::ExtraData);
        }
        Ok(Board { cells, side })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        format_cells(&self.cells, f)?;
        write!(f, " {}", self.side)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        const INI_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

        let b = Board::initial();
        assert_eq!(b.to_string(), INI_FEN);
        assert_eq!(Board::from_str(INI_FEN), Ok(b));
        assert_eq!(b.side, Color::White);
        assert_eq!(
            b.get2(File::E, Rank::R1),
            Cell::from_parts(Color::White, Piece::King)
        );
        assert_eq!(
            b.get2(File::D, Rank::R8),
            Cell::from_parts(Color::Black, Piece::Queen)
        );
        assert_eq!(
            Coord::iter().filter(|&c| b.get(c).is_occupied()).count(),
            32
        );
    }

    #[test]
    fn test_midgame() {
        const FEN: &str = "1rq1r1k1/1p3ppp/p4n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K b";

        let board = Board::from_fen(FEN).unwrap();
        assert_eq!(board.as_fen(), FEN);
        assert_eq!(
            board.get2(File::B, Rank::R4),
            Cell::from_parts(Color::Black, Piece::Bishop)
        );
        assert_eq!(
            board.get2(File::F, Rank::R2),
            Cell::from_parts(Color::White, Piece::Queen)
        );
        assert_eq!(board.get2(File::D, Rank::R3), Cell::EMPTY);
        assert_eq!(board.side, Color::Black);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenParseError::NoMoveSide)
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::ExtraData)
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w"),
            Err(FenParseError::Board(CellsParseError::Underflow))
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenParseError::Board(CellsParseError::Overflow))
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenParseError::Board(CellsParseError::RankOverflow(
                Rank::R7
            )))
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenParseError::Board(CellsParseError::RankUnderflow(
                Rank::R7
            )))
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/ppppppXp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenParseError::Board(CellsParseError::UnexpectedChar('X')))
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x"),
            Err(FenParseError::MoveSide(
                types::ColorParseError::UnexpectedChar('x')
            ))
        );
    }

    #[test]
    fn test_pretty() {
        let b = Board::from_fen("8/8/8/3k4/8/8/1K6/8 b").unwrap();

        let ascii = r#"
8|........
7|........
6|........
5|...k....
4|........
3|........
2|.K......
1|........
-+--------
B|abcdefgh
"#;
        assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), ascii.trim());

        let utf8 = b.pretty(PrettyStyle::Utf8).to_string();
        assert!(utf8.contains('\u{265a}'));
        assert!(utf8.contains('\u{2654}'));
        assert!(utf8.starts_with("8\u{2502}"));
    }
}
