//! Rotation and collision properties over random boards

use rand::{rngs::StdRng, Rng, SeedableRng};

use blockfall::core::{drop_distance, ghost, is_legal, try_rotate, Board, Piece};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn random_board(rng: &mut StdRng, fill: f64) -> Board {
    let mut board = Board::new();
    // Keep the top rows clear so pieces have somewhere to live.
    for row in 6..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            if rng.random_bool(fill) {
                let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
                board.set(col, row, Some(kind));
            }
        }
    }
    board
}

fn random_piece(rng: &mut StdRng) -> Piece {
    let mut piece = Piece::spawn(PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]);
    for _ in 0..rng.random_range(0..4) {
        piece = piece.rotate_cw();
    }
    Piece {
        col: rng.random_range(-2..BOARD_WIDTH as i8),
        row: rng.random_range(-2..BOARD_HEIGHT as i8),
        ..piece
    }
}

#[test]
fn test_rotation_result_is_always_legal() {
    let mut rng = StdRng::seed_from_u64(0xB10C);
    let mut rotated = 0;

    for _ in 0..5_000 {
        let board = random_board(&mut rng, 0.35);
        let piece = random_piece(&mut rng);
        if !is_legal(&board, &piece) {
            continue;
        }

        if let Some(next) = try_rotate(&board, &piece) {
            rotated += 1;
            assert!(is_legal(&board, &next));
            assert_eq!(next.kind, piece.kind);
            assert_eq!(next.row, piece.row, "no vertical kicks");
            assert!((next.col - piece.col).abs() <= 2);
            assert_eq!(next.shape, piece.shape.rotate_cw());
        }
    }
    assert!(rotated > 100, "only {rotated} rotations exercised");
}

#[test]
fn test_kicks_are_tried_in_order() {
    // Vertical I in the leftmost column: flat needs cols 0..=3. Plain
    // rotation already fits, so no kick is applied.
    let board = Board::new();
    let vertical = Piece { col: 0, row: 4, ..Piece::spawn(PieceKind::I).rotate_cw() };
    let flat = try_rotate(&board, &vertical).unwrap();
    assert_eq!(flat.col, 0);

    // A block at col 4 stops the plain pose and the +1 kick; -1 fits.
    let mut board = Board::new();
    board.set(4, 4, Some(PieceKind::Z));
    let vertical = Piece { col: 1, row: 4, ..vertical };
    let flat = try_rotate(&board, &vertical).unwrap();
    assert_eq!(flat.col, 0);
}

#[test]
fn test_is_legal_does_not_mutate() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let board = random_board(&mut rng, 0.5);
        let before = board.clone();
        let piece = random_piece(&mut rng);
        let first = is_legal(&board, &piece);
        let second = is_legal(&board, &piece);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}

#[test]
fn test_ghost_is_legal_and_grounded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let board = random_board(&mut rng, 0.4);
        let piece = random_piece(&mut rng);
        if !is_legal(&board, &piece) {
            continue;
        }
        let landed = ghost(&board, &piece);
        assert!(is_legal(&board, &landed));
        assert!(!is_legal(&board, &landed.shifted(0, 1)));
        assert_eq!(landed.row - piece.row, drop_distance(&board, &piece) as i8);
    }
}
