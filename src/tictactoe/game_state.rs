use crate::tictactoe::board::{Board, BoardPosition, Mark, MoveError};
use crate::tictactoe::input::Move;
use crate::tictactoe::logic::{self, Outcome};
use crate::tictactoe::opponent::{self, DrawRng};
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, PartialEq)]
pub enum TurnError {
    #[error("It is not the player's turn")]
    OutOfTurn,
    #[error("The game is already over")]
    GameOver,
    #[error("{0}")]
    InvalidMove(#[from] MoveError),
    #[error("No empty cell left for the opponent")]
    NoEmptyCell,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    Finished(Outcome),
}

#[derive(Debug)]
pub struct GameState<R: Debug> {
    board: Board,
    turn: Turn,
    rng: R,
}

impl<R: DrawRng + Default + Debug> Default for GameState<R> {
    fn default() -> Self {
        GameState::new(R::default())
    }
}

impl<R: DrawRng + Debug> GameState<R> {
    pub fn new(rng: R) -> Self {
        GameState {
            board: Board::default(),
            turn: Turn::AwaitingPlayerMove,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.turn {
            Turn::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    // Start a new game, keeping the rng
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Turn::AwaitingPlayerMove;
        info!("new game started");
    }

    pub fn player_move(&mut self, mv: Move) -> Result<Turn, TurnError> {
        match self.turn {
            Turn::AwaitingPlayerMove => {}
            Turn::AwaitingOpponentMove => return Err(TurnError::OutOfTurn),
            Turn::Finished(_) => return Err(TurnError::GameOver),
        }
        let pos = mv.position();
        self.board.place(pos.row(), pos.col(), Mark::Player)?;
        debug!(square = mv.get(), marks = self.board.mark_count(), "player moved");
        self.turn = self.next_turn(Mark::Player);
        Ok(self.turn)
    }

    pub fn opponent_move(&mut self) -> Result<BoardPosition, TurnError> {
        match self.turn {
            Turn::AwaitingOpponentMove => {}
            Turn::AwaitingPlayerMove => return Err(TurnError::OutOfTurn),
            Turn::Finished(_) => return Err(TurnError::GameOver),
        }
        let pos = opponent::choose_move(&self.board, &mut self.rng).ok_or(TurnError::NoEmptyCell)?;
        self.board.place(pos.row(), pos.col(), Mark::Opponent)?;
        debug!(
            square = Move::from(pos).get(),
            marks = self.board.mark_count(),
            "opponent moved"
        );
        self.turn = self.next_turn(Mark::Opponent);
        Ok(pos)
    }

    fn next_turn(&self, last_mover: Mark) -> Turn {
        match logic::outcome_after(&self.board, last_mover) {
            Some(outcome) => {
                info!(?outcome, "game finished");
                Turn::Finished(outcome)
            }
            None => match last_mover {
                Mark::Player => Turn::AwaitingOpponentMove,
                Mark::Opponent => Turn::AwaitingPlayerMove,
            },
        }
    }
}
