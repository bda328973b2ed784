// Simple command-line application to play against the random mover

use parkchess::{board::PrettyStyle, Color, Game, Move};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() {
    let mut stdin = io::stdin().lock();

    let mut game = Game::new_initial();
    let mut rng = StdRng::from_entropy();

    loop {
        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        print!("White move (e.g. e2e4, or \"quit\"): ");
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();
        if s == "quit" {
            break;
        }

        let mv = match Move::from_str(s) {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad move: {}", e);
                println!();
                continue;
            }
        };

        // Going through the selection API instead of `moves::make_move()` directly, so the
        // error messages can tell an empty square apart from a bad destination.
        if game.select(mv.src()).is_none() {
            println!("No piece of yours on {}", mv.src());
            println!();
            continue;
        }
        if let Err(e) = game.try_move(mv.dst()) {
            println!("Bad move: {}", e);
            println!();
            continue;
        }

        match game.auto_move(Color::Black, &mut rng) {
            Some(reply) => println!("Black plays {}", reply),
            None => {
                println!("Black has no moves left, game over");
                break;
            }
        }
        println!();
    }
}
