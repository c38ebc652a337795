//! Computer-versus-computer games.

use tictactoe_greedy::{GameEvent, Opponent, Orchestrator, Tally};
use tictactoe_rules::{GameOutcome, Mark, Position};

fn play(x: Opponent, o: Opponent) -> (GameOutcome, Vec<Position>) {
    let mut orchestrator = Orchestrator::new(x.build("x"), o.build("o"));
    let mut moves = Vec::new();
    let outcome = orchestrator
        .run(|event| {
            if let GameEvent::MoveMade { position, .. } = event {
                moves.push(*position);
            }
        })
        .unwrap();
    (outcome, moves)
}

#[test]
fn test_greedy_mirror_match_x_wins() {
    let (outcome, moves) = play(Opponent::Greedy, Opponent::Greedy);
    assert_eq!(outcome, GameOutcome::Win(Mark::X));
    assert_eq!(moves.len(), 7);
    assert_eq!(moves[0], Position::TopLeft);
}

#[test]
fn test_greedy_as_x_beats_simple() {
    let (outcome, _) = play(Opponent::Greedy, Opponent::Simple);
    assert_eq!(outcome, GameOutcome::Win(Mark::X));
}

#[test]
fn test_tally_over_repeated_games_on_one_orchestrator() {
    let mut orchestrator = Orchestrator::new(Opponent::Simple.build("x"), Opponent::Greedy.build("o"));
    let mut tally = Tally::default();
    for _ in 0..3 {
        orchestrator.restart();
        let mut moves = 0;
        let outcome = orchestrator
            .run(|event| {
                if matches!(event, GameEvent::MoveMade { .. }) {
                    moves += 1;
                }
            })
            .unwrap();
        assert_eq!(moves, 9);
        tally.record(outcome);
    }
    assert_eq!(tally, Tally { x_wins: 0, o_wins: 0, draws: 3 });
}
