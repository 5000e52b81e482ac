use crate::config::Config;
use crate::console::{App, Console};
use crate::leaderboard::ScoreStore;
use crate::tictactoe::{GameState, OpponentRng};
use clap::Parser;
use std::error::Error;
use std::io;
use std::path::Path;
use tracing::info;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};

mod config;
mod console;
mod leaderboard;
mod tictactoe;

// Fails instead of panicking when the log directory cannot be created
fn log_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("noughts.log")
        .build(log_dir)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    // Logs go to a file so they never interleave with the game on the terminal
    let file_appender = log_appender(&config.log_dir)?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let rng = match config.seed {
        Some(seed) => OpponentRng::seeded(seed),
        None => OpponentRng::default(),
    };
    let store = ScoreStore::new(config.leaderboard);
    info!(leaderboard = %store.path().display(), seed = ?config.seed, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut app = App::new(console, GameState::new(rng), store);
    app.run()?;
    Ok(())
}
