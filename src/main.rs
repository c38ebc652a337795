//! Tictactoe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use tictactoe_greedy::{Config, Console, FirstMover, GameEvent, Opponent, Orchestrator, Tally};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays the game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { first, config } => run_play(first, config),
        Command::Auto { games, x, o } => run_auto(games, x, o),
    }
}

/// Interactive games on stdin/stdout.
#[instrument]
fn run_play(first: Option<FirstMover>, config: std::path::PathBuf) -> Result<()> {
    let config = Config::from_file(&config)?.with_first(first);
    info!(?config, "Starting interactive play");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut console = Console::new(config, stdin, stdout);
    let outcomes = console.run()?;
    writeln!(console.output(), "Thanks for playing ({} games).", outcomes.len())?;
    Ok(())
}

/// Computer-versus-computer games with a final tally.
#[instrument]
fn run_auto(games: u32, x: Opponent, o: Opponent) -> Result<()> {
    let mut tally = Tally::default();
    let mut stdout = std::io::stdout().lock();

    let mut orchestrator = Orchestrator::new(x.build(format!("{x} X")), o.build(format!("{o} O")));

    for game in 1..=games {
        writeln!(stdout, "Game {game}: {x} (X) vs {o} (O)")?;
        orchestrator.restart();
        let mut transcript = Vec::new();
        let outcome = orchestrator.run(|event| match event {
            GameEvent::MoveMade { player, position, .. } => {
                transcript.push(format!("  {player} plays {}", position.label()));
            }
            GameEvent::GameOver { outcome, .. } => {
                transcript.push(format!("  {outcome}"));
            }
        })?;
        for line in transcript {
            writeln!(stdout, "{line}")?;
        }
        writeln!(stdout, "{}\n", orchestrator.board())?;
        tally.record(outcome);
    }

    info!(%tally, "Auto play finished");
    writeln!(stdout, "{tally}")?;
    Ok(())
}
