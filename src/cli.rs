//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_greedy::{FirstMover, Opponent};

/// Tic-tac-toe against a greedy one-ply opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on stdin/stdout
    Play {
        /// Who moves first; asked each game if not given
        #[arg(long, value_enum)]
        first: Option<FirstMover>,

        /// Path to the config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,
    },

    /// Let two computer players play each other
    Auto {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Player for X
        #[arg(short, long, value_enum, default_value_t = Opponent::Greedy)]
        x: Opponent,

        /// Player for O
        #[arg(short, long, value_enum, default_value_t = Opponent::Greedy)]
        o: Opponent,
    },
}
