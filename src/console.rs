use crate::leaderboard::{LeaderboardError, ScoreStore};
use crate::tictactoe::{
    DrawRng, GameState, Move, MoveError, Outcome, SquareLayout, Turn, TurnError,
};
use std::fmt::{Debug, Display};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::{error, info, warn};

const MOVE_PROMPT: &str = "\nChoose your square: (1, 2, 3), (4, 5, 6), (7, 8, 9) ";

#[derive(Error, Debug, PartialEq)]
#[error("Invalid choice '{0}'. Please enter a valid option.")]
pub struct InvalidChoice(String);

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MenuChoice {
    Play,
    SaveScore,
    ShowLeaderboard,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(MenuChoice::Play),
            "2" => Ok(MenuChoice::SaveScore),
            "3" => Ok(MenuChoice::ShowLeaderboard),
            "q" => Ok(MenuChoice::Quit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

pub struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> Console<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Console { input, output }
    }

    pub fn show(&mut self, msg: impl Display) -> io::Result<()> {
        write!(self.output, "{}", msg)
    }

    pub fn say(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg)
    }

    // Returns None once input is exhausted
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
    }
}

pub struct App<R: Debug, I, W> {
    console: Console<I, W>,
    game: GameState<R>,
    store: ScoreStore,
    // Result of the last finished game, until it is saved
    unsaved_score: Option<i64>,
}

impl<R: DrawRng + Debug, I: BufRead, W: Write> App<R, I, W> {
    pub fn new(console: Console<I, W>, game: GameState<R>, store: ScoreStore) -> Self {
        App {
            console,
            game,
            store,
            unsaved_score: None,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.welcome()?;
        while let Some(choice) = self.menu()? {
            info!(?choice, "menu choice");
            match choice {
                MenuChoice::Play => {
                    self.play_game()?;
                    // No outcome means input ran out mid-game
                    match self.game.outcome() {
                        Some(outcome) => self.unsaved_score = Some(outcome.score()),
                        None => break,
                    }
                }
                MenuChoice::SaveScore => self.save_score()?,
                MenuChoice::ShowLeaderboard => self.display_leaderboard()?,
                MenuChoice::Quit => break,
            }
        }
        info!("session ended");
        Ok(())
    }

    fn welcome(&mut self) -> io::Result<()> {
        self.console
            .say("\nWelcome to the \"Unbeatable Noughts and Crosses\" game.")?;
        self.console.say("The board layout is shown below:")?;
        self.console.show(SquareLayout)?;
        self.console
            .say("When prompted, enter the number corresponding to the square you want.\n")
    }

    fn menu(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            self.console.say("\nEnter one of the following options: ")?;
            self.console.say("     1 - Play the game")?;
            self.console.say(format!(
                "     2 - Save score in file '{}'",
                self.store.path().display()
            ))?;
            self.console.say(format!(
                "     3 - Load and display the scores from '{}'",
                self.store.path().display()
            ))?;
            self.console.say("     q - End the program")?;
            let answer = match self.console.ask("1, 2, 3, or q? ")? {
                Some(answer) => answer,
                None => return Ok(None),
            };
            self.console.say("")?;
            match answer.parse::<MenuChoice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => self.console.say(err)?,
            }
        }
    }

    fn play_game(&mut self) -> io::Result<()> {
        self.game.reset();
        self.console.show(self.game.board())?;
        loop {
            match self.game.turn() {
                Turn::AwaitingPlayerMove => {
                    let answer = match self.console.ask(MOVE_PROMPT)? {
                        Some(answer) => answer,
                        None => {
                            warn!("input closed during a game");
                            return Ok(());
                        }
                    };
                    let mv: Move = match answer.parse() {
                        Ok(mv) => mv,
                        Err(err) => {
                            self.console.say(err)?;
                            continue;
                        }
                    };
                    match self.game.player_move(mv) {
                        Ok(_) => self.console.show(self.game.board())?,
                        Err(TurnError::InvalidMove(MoveError::Occupied(_))) => {
                            self.console.say("Cell already occupied. Choose another.")?
                        }
                        Err(err) => self.console.say(err)?,
                    }
                }
                Turn::AwaitingOpponentMove => {
                    self.console.say("\nComputer's move: ")?;
                    if let Err(err) = self.game.opponent_move() {
                        error!("opponent could not move: {}", err);
                        return Ok(());
                    }
                    self.console.show(self.game.board())?;
                }
                Turn::Finished(outcome) => {
                    self.console.say(match outcome {
                        Outcome::PlayerWin => "You win!",
                        Outcome::OpponentWin => "Computer's win!",
                        Outcome::Draw => "Draw!",
                    })?;
                    return Ok(());
                }
            }
        }
    }

    fn save_score(&mut self) -> io::Result<()> {
        let score = match self.unsaved_score {
            Some(score) => score,
            None => return self.console.say("No game result to save. Play a game first."),
        };
        let name = match self.console.ask("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };
        match self.store.save(&name, score) {
            Ok(leaderboard) => {
                self.unsaved_score = None;
                self.console.say(format!(
                    "Score saved successfully. {} now has {} point(s).",
                    name,
                    leaderboard.score(&name).unwrap_or(score)
                ))
            }
            Err(LeaderboardError::InvalidName(_)) => self
                .console
                .say("Invalid input. Please enter a valid name (letters only)."),
            Err(err) => {
                warn!("failed to save score: {}", err);
                self.console.say(err)
            }
        }
    }

    fn display_leaderboard(&mut self) -> io::Result<()> {
        match self.store.try_load() {
            Ok(_) => {}
            Err(LeaderboardError::NotFound(_)) => self.console.say("Leaderboard file not found.")?,
            Err(LeaderboardError::Corrupt(_)) => self
                .console
                .say("Error decoding JSON. Leaderboard file may be corrupted.")?,
            Err(err) => self.console.say(err)?,
        }
        // Falls back to an empty board for any of the failures reported above
        let leaderboard = self.store.load();
        self.console.say("Leaderboard:")?;
        if leaderboard.is_empty() {
            return self.console.say("No scores available.");
        }
        for (name, score) in leaderboard.ranked() {
            self.console.say(format!("{}: {}", name, score))?;
        }
        Ok(())
    }
}
