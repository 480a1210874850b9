use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "workshop", about = "Tic-tac-toe and pokemon lookup in the terminal")]
pub struct Cli {
    /// RON configuration file; defaults apply when it does not exist.
    #[arg(long, default_value = "workshop.ron")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub exercise: Exercise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Exercise {
    /// Play tic-tac-toe with persisted, time-travelling history.
    Tictactoe,
    /// Look up pokemon by name.
    Pokemon,
}
