use crate::tictactoe::board::{Board, BoardPosition};
use rand::prelude::IteratorRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub trait DrawRng {
    fn draw<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T>;
}

#[derive(Debug)]
pub struct OpponentRng {
    rng: StdRng,
}

impl OpponentRng {
    pub fn seeded(seed: u64) -> Self {
        OpponentRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for OpponentRng {
    fn default() -> Self {
        OpponentRng {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DrawRng for OpponentRng {
    fn draw<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T> {
        iter.choose(&mut self.rng)
    }
}

// Uniform over the cells that are empty right now; None once the board is full
pub fn choose_move<R: DrawRng>(board: &Board, rng: &mut R) -> Option<BoardPosition> {
    rng.draw(board.empty_positions().into_iter())
}
