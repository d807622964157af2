//! Session flow: scenarios, phase table, events

use blockfall::core::{is_legal, Board, GameState, Piece};
use blockfall::types::{CoreEvent, GameAction, Phase, PieceKind};

const ALL_ACTIONS: [GameAction; 9] = [
    GameAction::Start,
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::Rotate,
    GameAction::SoftDropPress,
    GameAction::SoftDropRelease,
    GameAction::HardDrop,
    GameAction::Pause,
    GameAction::Menu,
];

#[test]
fn scenario_a_o_spawns_legally_on_empty_board() {
    let board = Board::new();
    let o = Piece::spawn(PieceKind::O);
    assert_eq!((o.col, o.row), (4, 0));
    assert!(is_legal(&board, &o));
}

#[test]
fn scenario_b_i_completes_bottom_row() {
    let board = Board::from_rows(&["TTTTTT...."]);
    let i = Piece { col: 6, row: 0, ..Piece::spawn(PieceKind::I) };
    let mut state = GameState::from_position(1, 0, board, i, PieceKind::O);

    assert!(state.apply_action(GameAction::HardDrop));

    let events: Vec<_> = state.drain_events().collect();
    assert_eq!(
        events,
        vec![CoreEvent::Locked {
            lines_cleared: 1,
            points: 100
        }]
    );
    assert!(state.board().rows().last().unwrap().iter().all(|c| c.is_none()));
    assert_eq!(state.board().occupied_count(), 0);
}

#[test]
fn scenario_c_move_left_at_wall_is_rejected() {
    let board = Board::new();
    let t = Piece { col: 0, row: 5, ..Piece::spawn(PieceKind::T) };
    let mut state = GameState::from_position(1, 0, board, t, PieceKind::O);

    assert!(!state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active(), Some(t));
}

/// Board whose top row blocks every spawn position, plus `bottom` as row 19.
fn capped_board(bottom: &'static str) -> Board {
    let mut rows = [".........."; 20];
    rows[0] = "ZZZZZZZZZ.";
    rows[19] = bottom;
    Board::from_rows(&rows)
}

#[test]
fn scenario_d_blocked_spawn_ends_session() {
    let board = capped_board("..........");
    let o = Piece { col: 4, row: 10, ..Piece::spawn(PieceKind::O) };
    let mut state = GameState::from_position(1, 700, board, o, PieceKind::T);
    assert_eq!(state.phase(), Phase::Playing);

    state.apply_action(GameAction::HardDrop);

    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.active().is_none());
    assert_eq!(state.score(), 0);
    assert_eq!(state.high_score(), 700);

    let events: Vec<_> = state.drain_events().collect();
    assert_eq!(
        events.last(),
        Some(&CoreEvent::GameOver {
            score: 0,
            high_score: 700,
            new_record: false
        })
    );
}

#[test]
fn test_new_record_on_game_over() {
    // A vertical I finishes row 19 (100 points); the cap row slides down to
    // row 1, which still blocks the T spawn.
    let board = capped_board("ZZZZZZZZZ.");
    let vertical = Piece::spawn(PieceKind::I).rotate_cw();
    let i = Piece { col: 9, row: 16, ..vertical };
    let mut state = GameState::from_position(1, 50, board, i, PieceKind::T);

    state.apply_action(GameAction::HardDrop);

    assert_eq!(state.score(), 100);
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.high_score(), 100);
    let events: Vec<_> = state.drain_events().collect();
    assert_eq!(
        events,
        vec![
            CoreEvent::Locked {
                lines_cleared: 1,
                points: 100
            },
            CoreEvent::GameOver {
                score: 100,
                high_score: 100,
                new_record: true
            },
        ]
    );
}

#[test]
fn test_phase_table_is_closed() {
    // Menu: only Start.
    for action in ALL_ACTIONS {
        let mut state = GameState::new(1, 0);
        let changed = state.apply_action(action);
        assert_eq!(changed, action == GameAction::Start, "menu {action:?}");
    }

    // Paused: Pause resumes and Start restarts; a release with soft drop
    // already off is a no-op.
    for action in ALL_ACTIONS {
        let mut state = GameState::new(1, 0);
        state.apply_action(GameAction::Start);
        state.apply_action(GameAction::Pause);
        let before = state.snapshot();
        let changed = state.apply_action(action);
        let expected = matches!(action, GameAction::Start | GameAction::Pause);
        assert_eq!(changed, expected, "paused {action:?}");
        if !changed {
            assert_eq!(state.snapshot(), before);
        }
    }

    // GameOver: Start and Menu.
    let board = Board::from_rows(&["ZZZZZZZZZ."; 20]);
    let blocked = Piece::spawn(PieceKind::O);
    for action in ALL_ACTIONS {
        let mut state = GameState::from_position(1, 0, board.clone(), blocked, PieceKind::O);
        assert_eq!(state.phase(), Phase::GameOver);
        let changed = state.apply_action(action);
        let expected = matches!(action, GameAction::Start | GameAction::Menu);
        assert_eq!(changed, expected, "game over {action:?}");
    }
}

#[test]
fn test_pause_resume_keeps_piece_still() {
    let mut state = GameState::new(9, 0);
    state.apply_action(GameAction::Start);
    state.tick(600);
    let before = state.active();

    state.apply_action(GameAction::Pause);
    for _ in 0..50 {
        state.tick(1000);
    }
    state.apply_action(GameAction::Pause);

    assert_eq!(state.active(), before);
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn test_score_never_decreases_during_play() {
    let mut state = GameState::new(2024, 0);
    state.apply_action(GameAction::Start);
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
    ];

    let mut last = 0;
    for round in 0..40 {
        for action in script {
            state.step(16, [action]);
            assert!(state.score() >= last, "round {round}");
            last = state.score();
        }
        if state.phase() == Phase::GameOver {
            break;
        }
    }
    assert!(state.pieces_locked() > 0);
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut state = GameState::new(seed, 0);
        state.apply_action(GameAction::Start);
        for i in 0..300u32 {
            let action = match i % 5 {
                0 => GameAction::MoveLeft,
                1 => GameAction::Rotate,
                2 => GameAction::MoveRight,
                3 => GameAction::MoveRight,
                _ => GameAction::HardDrop,
            };
            state.step(120, [action]);
        }
        state.snapshot()
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn test_restart_after_game_over_keeps_high_score() {
    let board = Board::from_rows(&["ZZZZZZZZZ."; 20]);
    let mut state = GameState::from_position(1, 900, board, Piece::spawn(PieceKind::O), PieceKind::T);
    assert_eq!(state.phase(), Phase::GameOver);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.high_score(), 900);
    assert_eq!(state.board().occupied_count(), 0);
    assert_eq!(state.session_id(), 2);
}

#[test]
fn test_restart_from_pause_starts_fresh_session() {
    let mut state = GameState::new(5, 300);
    state.apply_action(GameAction::Start);
    state.apply_action(GameAction::HardDrop);
    state.apply_action(GameAction::SoftDropPress);
    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.pieces_locked(), 1);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.session_id(), 2);
    assert_eq!(state.pieces_locked(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.high_score(), 300);
    assert_eq!(state.board().occupied_count(), 0);
    assert!(!state.soft_drop());
    assert!(state.active().is_some());
    // Restarting does not end a session, so nothing is reported.
    assert!(!state
        .drain_events()
        .any(|e| matches!(e, CoreEvent::GameOver { .. })));
}

#[test]
fn test_snapshot_carries_new_record_until_restart() {
    let board = capped_board("ZZZZZZZZZ.");
    let vertical = Piece::spawn(PieceKind::I).rotate_cw();
    let i = Piece { col: 9, row: 16, ..vertical };
    let mut state = GameState::from_position(1, 50, board, i, PieceKind::T);
    state.apply_action(GameAction::HardDrop);

    let snap = state.snapshot();
    assert_eq!(snap.phase, Phase::GameOver);
    assert!(snap.new_record);
    assert_eq!(snap.lines, 1);

    state.apply_action(GameAction::Start);
    assert!(!state.snapshot().new_record);
}

#[test]
fn test_soft_drop_reaches_floor_quickly() {
    let mut state = GameState::new(3, 0);
    state.apply_action(GameAction::Start);
    state.apply_action(GameAction::SoftDropPress);

    let first = state.active().unwrap().kind;
    let mut ticks = 0;
    while state.pieces_locked() == 0 {
        state.tick(50);
        ticks += 1;
        assert!(ticks < 30, "soft drop should land within 30 intervals");
    }
    assert!(state.board().rows().last().unwrap().contains(&Some(first)));
}
