//! Tests for snapshot encoding and decoding.

use tictactoe_rules::{
    Board, DrawPolicy, GameState, Player, Position, RulesConfig, SNAPSHOT_LEN, Snapshot,
    SnapshotError,
};

/// Every prefix of a few games, including wins and a draw.
fn reachable_boards(config: RulesConfig) -> Vec<Board> {
    let games: [&[(i32, i32)]; 3] = [
        &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)],
        &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)],
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    ];

    let mut boards = Vec::new();
    for game in games {
        let mut board = Board::with_config(config);
        boards.push(board.clone());
        for &(row, col) in game {
            board.mark(row, col);
            boards.push(board.clone());
        }
    }
    boards
}

#[test]
fn test_round_trip_is_behaviourally_identical() {
    for config in [
        RulesConfig::default(),
        RulesConfig::new(DrawPolicy::Continue),
    ] {
        for board in reachable_boards(config) {
            let mut restored = Board::from_snapshot_with(&board.snapshot(), config).unwrap();
            assert_eq!(restored, board);

            let mut original = board.clone();
            for pos in Position::ALL {
                let (row, col) = (pos.row() as i32, pos.col() as i32);
                assert_eq!(restored.play(row, col), original.play(row, col));
                assert_eq!(restored, original);
            }
        }
    }
}

#[test]
fn test_restored_board_keeps_playing() {
    let mut board = Board::new();
    board.mark(0, 0);
    board.mark(1, 0);
    board.mark(0, 1);
    board.mark(1, 1);

    let mut restored = Board::from_snapshot(&board.snapshot()).unwrap();
    assert_eq!(restored.current_turn(), Player::X);
    assert_eq!(restored.mark(0, 2), Some(Player::X));
    assert_eq!(restored.winner(), Some(Player::X));
    assert_eq!(restored.state(), GameState::Finished);
}

#[test]
fn test_finished_snapshot_layout() {
    let mut board = Board::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        board.mark(row, col);
    }
    assert_eq!(
        board.snapshot().as_slice(),
        &[1, 1, 1, 2, 2, 0, 0, 0, 0, 1, 1, 1]
    );
}

fn decode(values: [i32; SNAPSHOT_LEN]) -> Result<Board, SnapshotError> {
    Board::from_snapshot(&Snapshot::new(values))
}

#[test]
fn test_rejects_unknown_cell() {
    assert_eq!(
        decode([0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 1]),
        Err(SnapshotError::UnknownCell { index: 4, code: 9 })
    );
}

#[test]
fn test_rejects_unknown_winner() {
    assert_eq!(
        decode([0, 0, 0, 0, 0, 0, 0, 0, 0, -3, 1, 1]),
        Err(SnapshotError::UnknownPlayer {
            field: "winner",
            code: -3
        })
    );
}

#[test]
fn test_rejects_unknown_state() {
    assert_eq!(
        decode([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1]),
        Err(SnapshotError::UnknownState(2))
    );
}

#[test]
fn test_rejects_bad_turn() {
    assert_eq!(
        decode([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Err(SnapshotError::MissingTurn)
    );
    assert!(matches!(
        decode([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]),
        Err(SnapshotError::UnknownPlayer { code: 5, .. })
    ));
}

#[test]
fn test_rejects_winner_in_progress() {
    assert_eq!(
        decode([1, 1, 1, 2, 2, 0, 0, 0, 0, 1, 0, 1]),
        Err(SnapshotError::WinnerInProgress)
    );
}

#[test]
fn test_rejects_wrong_length() {
    let err = Snapshot::from_slice(&[0, 0, 1]).unwrap_err();
    assert_eq!(err.to_string(), "Snapshot must hold 12 integers, got 3");
}

#[test]
fn test_finished_draw_decodes() {
    let board = decode([1, 2, 1, 1, 2, 2, 2, 1, 1, 0, 1, 1]).unwrap();
    assert!(board.is_draw());
}

fn inconsistent(reason: &'static str) -> Result<Board, SnapshotError> {
    Err(SnapshotError::Inconsistent { reason })
}

#[test]
fn test_rejects_winner_without_a_line() {
    assert_eq!(
        decode([0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1]),
        inconsistent("winner holds no complete line")
    );
    // O recorded as winner while only X holds a line.
    assert_eq!(
        decode([1, 1, 1, 2, 2, 0, 0, 0, 0, 2, 1, 2]),
        inconsistent("winner holds no complete line")
    );
}

#[test]
fn test_rejects_winner_that_is_not_to_move() {
    assert_eq!(
        decode([1, 1, 1, 2, 2, 0, 0, 0, 0, 1, 1, 2]),
        inconsistent("winner is not the player who moved last")
    );
}

#[test]
fn test_rejects_two_winning_players() {
    assert_eq!(
        decode([1, 1, 1, 2, 2, 2, 0, 0, 0, 1, 1, 1]),
        inconsistent("both players hold a complete line")
    );
}

#[test]
fn test_rejects_completed_line_in_progress() {
    let err = decode([1, 1, 1, 2, 2, 0, 0, 0, 0, 0, 0, 2]).unwrap_err();
    assert_eq!(
        err,
        SnapshotError::Inconsistent {
            reason: "complete line without a recorded winner"
        }
    );
    assert_eq!(
        err.to_string(),
        "Inconsistent snapshot: complete line without a recorded winner"
    );
}

#[test]
fn test_rejects_completed_line_on_finished_draw() {
    assert_eq!(
        decode([1, 1, 1, 2, 2, 0, 0, 0, 0, 0, 1, 2]),
        inconsistent("complete line without a recorded winner")
    );
}

#[test]
fn test_rejects_draw_with_empty_cells() {
    assert_eq!(
        decode([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1]),
        inconsistent("draw recorded with empty cells")
    );
    assert_eq!(
        Board::from_snapshot_with(
            &Snapshot::new([1, 2, 1, 1, 2, 2, 2, 1, 0, 0, 1, 1]),
            RulesConfig::new(DrawPolicy::Continue),
        ),
        inconsistent("draw recorded with empty cells")
    );
}

#[test]
fn test_full_board_in_progress_decodes_for_continue_policy() {
    let config = RulesConfig::new(DrawPolicy::Continue);
    let snapshot = Snapshot::new([1, 2, 1, 1, 2, 2, 2, 1, 1, 0, 0, 2]);
    let mut board = Board::from_snapshot_with(&snapshot, config).unwrap();
    assert_eq!(board.state(), GameState::InProgress);
    assert_eq!(board.mark(0, 0), Some(Player::X));
    assert_eq!(board.snapshot(), snapshot);
}
