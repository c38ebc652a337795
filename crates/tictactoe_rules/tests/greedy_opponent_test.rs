//! End-to-end behavior of the greedy opponent.

use tictactoe_rules::{
    Board, GameOutcome, InvalidMove, Mark, Phase, Position, Session, SessionError, Strategy,
    choose_move, explain_move,
};

fn board_with(moves: &[(usize, usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(row, col, mark) in moves {
        board.place(row, col, mark).unwrap();
    }
    board
}

#[test]
fn test_empty_board_opens_top_left() {
    let board = Board::new();
    assert_eq!(choose_move(&board, Mark::X, Mark::O).coords(), (0, 0));
}

#[test]
fn test_completes_own_row() {
    // A at (0,0),(0,1); B elsewhere without a line.
    let board = board_with(&[
        (0, 0, Mark::X),
        (2, 0, Mark::O),
        (0, 1, Mark::X),
        (2, 2, Mark::O),
    ]);
    // B also threatens (2,1); winning outranks blocking.
    assert_eq!(
        explain_move(&board, Mark::X, Mark::O),
        Some((Position::TopRight, Strategy::Win))
    );
}

#[test]
fn test_blocks_middle_row() {
    // B at (1,0),(1,1); A has no immediate win.
    let board = board_with(&[
        (0, 0, Mark::X),
        (1, 0, Mark::O),
        (2, 1, Mark::X),
        (1, 1, Mark::O),
    ]);
    assert_eq!(choose_move(&board, Mark::X, Mark::O).coords(), (1, 2));
}

#[test]
fn test_occupied_cell_rejected() {
    let mut board = board_with(&[(1, 1, Mark::X)]);
    let before = board.clone();
    assert_eq!(
        board.place(1, 1, Mark::O),
        Err(InvalidMove::Occupied(Position::Center))
    );
    assert_eq!(board, before);
    assert_eq!(
        board.place(1, 3, Mark::O),
        Err(InvalidMove::OutOfRange { row: 1, col: 3 })
    );
}

#[test]
fn test_greedy_self_play_first_mover_wins() {
    let mut board = Board::new();
    let mut mark = Mark::X;
    let mut played = Vec::new();
    while board.outcome() == GameOutcome::InProgress {
        let pos = choose_move(&board, mark, mark.opponent());
        board.place_at(pos, mark).unwrap();
        played.push(pos.to_index());
        mark = mark.opponent();
    }
    // O's fallback never takes the center, so X forks and wins.
    assert_eq!(played, vec![0, 1, 2, 3, 4, 8, 6]);
    assert_eq!(board.outcome(), GameOutcome::Win(Mark::X));
    assert_eq!(board.empty_cells().count() + board.occupied_count(), 9);
}

#[test]
fn test_human_first_can_win_with_fork() {
    let mut session = Session::new();
    session.begin().unwrap();
    session.choose_first(true).unwrap();

    let replies: Vec<_> = [Position::TopLeft, Position::TopRight, Position::Center]
        .into_iter()
        .map(|pos| session.play_human(pos).unwrap()[1].position)
        .collect();
    assert_eq!(
        replies,
        vec![Position::TopCenter, Position::MiddleLeft, Position::BottomRight]
    );

    // Center forked both diagonals; the computer blocked only one.
    let turns = session.play_human(Position::BottomLeft).unwrap();
    assert_eq!(turns.len(), 1);
    assert_eq!(session.outcome(), GameOutcome::Win(Mark::X));
    assert_eq!(session.phase(), Phase::Finished);
}

#[test]
fn test_computer_first_can_lose() {
    let mut session = Session::new();
    session.begin().unwrap();
    session.choose_first(false).unwrap();

    for pos in [Position::TopCenter, Position::BottomLeft, Position::BottomCenter] {
        session.play_human(pos).unwrap();
    }
    session.play_human(Position::Center).unwrap();

    assert_eq!(session.outcome(), GameOutcome::Win(Mark::O));
    assert_eq!(session.human_mark(), Mark::O);
    assert_eq!(
        session.play_human(Position::MiddleRight),
        Err(SessionError::WrongPhase {
            expected: Phase::InProgress,
            actual: Phase::Finished,
        })
    );
}
