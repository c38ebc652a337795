//! Game orchestration between two players.

use super::players::Player;
use anyhow::Result;
use tictactoe_rules::{Board, GameOutcome, Mark, Position};
use tracing::{debug, info, instrument};

/// Things an observer can render while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Board after the move.
        board: Board,
    },
    /// The game reached a win or a draw.
    GameOver {
        /// Final outcome.
        outcome: GameOutcome,
        /// Winner's name, if any.
        winner: Option<String>,
    },
}

/// Plays one game between two players on a fresh board.
///
/// X always moves first. The orchestrator owns the board; players only see
/// it by reference.
#[derive(derive_new::new)]
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    #[new(default)]
    board: Board,
}

impl Orchestrator {
    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until a win or draw.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or proposes an occupied cell.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut observe: impl FnMut(&GameEvent)) -> Result<GameOutcome> {
        info!("Starting game orchestration");
        let mut to_move = Mark::X;

        loop {
            let outcome = self.board.outcome();
            if outcome.is_terminal() {
                let winner = outcome.winner().map(|mark| self.player(mark).name().to_string());
                info!(%outcome, ?winner, "Game over");
                observe(&GameEvent::GameOver { outcome, winner });
                return Ok(outcome);
            }

            let player = match to_move {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = %player.name(), mark = %to_move, "Waiting for move");
            let position = player.get_move(&self.board, to_move)?;
            let name = player.name().to_string();

            self.board.place_at(position, to_move)?;
            observe(&GameEvent::MoveMade {
                player: name,
                mark: to_move,
                position,
                board: self.board.clone(),
            });
            to_move = to_move.opponent();
        }
    }

    /// Restarts the game on an empty board.
    pub fn restart(&mut self) {
        self.board = Board::new();
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }
}

/// Win/draw counts over several games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{GreedyPlayer, SimplePlayer};

    #[test]
    fn test_run_reports_every_move() {
        let mut orchestrator = Orchestrator::new(
            Box::new(SimplePlayer::new("Simple")),
            Box::new(GreedyPlayer::new("Greedy")),
        );
        let mut events = Vec::new();
        let outcome = orchestrator.run(|e| events.push(e.clone())).unwrap();

        // Greedy blocks every threat; the scan-order player never makes one
        // it can finish.
        assert_eq!(outcome, GameOutcome::Draw);
        match events.last() {
            Some(GameEvent::GameOver { outcome: last, .. }) => assert_eq!(*last, outcome),
            other => panic!("expected GameOver, got {other:?}"),
        }
        let moves = events
            .iter()
            .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
            .count();
        assert_eq!(moves, orchestrator.board().occupied_count());
    }

    #[test]
    fn test_restart_clears_board() {
        let mut orchestrator = Orchestrator::new(
            Box::new(GreedyPlayer::new("A")),
            Box::new(GreedyPlayer::new("B")),
        );
        orchestrator.run(|_| {}).unwrap();
        orchestrator.restart();
        assert_eq!(orchestrator.board(), &Board::new());
    }

    #[test]
    fn test_tally_counts() {
        let mut tally = Tally::default();
        tally.record(GameOutcome::Win(Mark::X));
        tally.record(GameOutcome::Draw);
        tally.record(GameOutcome::Win(Mark::X));
        assert_eq!(tally.to_string(), "X wins: 2, O wins: 0, draws: 1");
    }
}
