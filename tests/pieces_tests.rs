//! Piece shapes, spawn placement and the spawner

use blockfall::core::{Piece, PieceSpawner, Shape};
use blockfall::types::{PieceKind, Rgb};

fn cells(kind: PieceKind) -> Vec<(i8, i8)> {
    Shape::canonical(kind).filled().collect()
}

// ============== Shape Tests ==============

#[test]
fn test_canonical_shapes() {
    assert_eq!(cells(PieceKind::I), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(cells(PieceKind::O), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(PieceKind::T), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(PieceKind::S), vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(PieceKind::Z), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(cells(PieceKind::J), vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(PieceKind::L), vec![(2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_rotating_i_stands_it_up() {
    let vertical = Shape::canonical(PieceKind::I).rotate_cw();
    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
    let filled: Vec<_> = vertical.filled().collect();
    assert_eq!(filled, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_rotating_o_is_a_no_op() {
    let o = Shape::canonical(PieceKind::O);
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn test_rotating_j() {
    // 100      11
    // 111  ->  10
    //          10
    let j = Shape::canonical(PieceKind::J).rotate_cw();
    let filled: Vec<_> = j.filled().collect();
    assert_eq!(filled, vec![(0, 0), (1, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_colors() {
    assert_eq!(PieceKind::I.color(), Rgb::new(0x06, 0xb6, 0xd4));
    assert_eq!(PieceKind::O.color(), Rgb::new(0xea, 0xb3, 0x08));
    assert_eq!(PieceKind::L.color(), Rgb::new(0xf9, 0x73, 0x16));
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_position() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let width = i8::try_from(piece.shape.cols()).unwrap();
        assert_eq!(piece.col, (10 - width) / 2, "{kind:?}");
        assert_eq!(piece.row, 0);
    }
}

#[test]
fn test_piece_cells_are_absolute() {
    let piece = Piece::spawn(PieceKind::O).shifted(-2, 7);
    let cells: Vec<_> = piece.cells().into_iter().collect();
    assert_eq!(cells, vec![(2, 7), (3, 7), (2, 8), (3, 8)]);
}

// ============== Spawner Tests ==============

#[test]
fn test_same_seed_same_sequence() {
    let mut a = PieceSpawner::new(99);
    let mut b = PieceSpawner::new(99);
    for _ in 0..200 {
        assert_eq!(a.next_kind(), b.next_kind());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = PieceSpawner::new(1);
    let mut b = PieceSpawner::new(2);
    let sa: Vec<_> = (0..50).map(|_| a.next_kind()).collect();
    let sb: Vec<_> = (0..50).map(|_| b.next_kind()).collect();
    assert_ne!(sa, sb);
}

#[test]
fn test_every_kind_eventually_appears() {
    let mut spawner = PieceSpawner::new(7);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let kind = spawner.next_kind();
        let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_spawned_piece_is_at_spawn_position() {
    let mut spawner = PieceSpawner::new(3);
    for _ in 0..20 {
        let piece = spawner.spawn();
        assert_eq!(piece, Piece::spawn(piece.kind));
    }
}
