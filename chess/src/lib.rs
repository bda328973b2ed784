//! # parkchess
//!
//! A rule engine for casual chess, the way it gets played on a park bench: pieces move and
//! capture as usual, pawns promote straight to queens, and nobody checks for check. The king
//! is just another piece and can be captured, there is no castling, no en passant, and the
//! game simply goes on until the players stop.
//!
//! What the crate gives you:
//!
//! - [`Board`]: the 8×8 grid plus the side to move, with a two-field FEN notation and
//!   pretty-printing
//! - [`movegen`]: legal destinations for a piece under this rule set
//! - [`moves`]: move execution (with auto-queen promotion) and validation
//! - [`autoplay`]: a random opponent driven by an injected RNG
//! - [`Game`]: a session object tying board and selection state together for front-ends
//!
//! # Example
//!
//! ```
//! # use parkchess::{Board, Coord, Game};
//! # use std::str::FromStr;
//! #
//! let mut game = Game::new_initial();
//! let sel = game.select(Coord::from_str("e2").unwrap()).unwrap();
//! assert_eq!(sel.targets().len(), 2);
//! game.try_move(Coord::from_str("e4").unwrap()).unwrap();
//! assert_eq!(game.board().as_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b");
//! ```

pub mod autoplay;
pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;

pub use parkchess_base::{geometry, types};

pub use board::Board;
pub use game::Game;
pub use movegen::MoveList;
pub use moves::Move;
pub use types::{Cell, Color, Coord, File, Piece, Rank};
