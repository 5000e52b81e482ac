use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "noughts-crosses")]
#[command(about = "Play noughts and crosses against a random computer opponent")]
pub struct Config {
    #[arg(long, default_value = "leaderboard.txt", help = "JSON file holding cumulative scores")]
    pub leaderboard: PathBuf,

    #[arg(long, default_value = "./logs", help = "Directory for the daily log file")]
    pub log_dir: PathBuf,

    #[arg(long, help = "Seed the computer's moves for a reproducible session")]
    pub seed: Option<u64>,
}
