mod board;
mod game_state;
mod input;
mod logic;
mod opponent;

pub use board::MoveError;
pub use game_state::{GameState, Turn, TurnError};
pub use input::{Move, SquareLayout};
pub use logic::Outcome;
pub use opponent::{DrawRng, OpponentRng};
