//! Integration tests for the session registry.
//!
//! Covers the create/play contract end to end and concurrent use of one
//! registry from several threads.

use std::sync::Arc;
use std::thread;

use rookery_core::{Board, Coordinate, Move, Piece};
use rookery_session::{Registry, RegistryConfig, SessionError};

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

// ── Contract ─────────────────────────────────────────────────────────────────

#[test]
fn reply_lies_on_the_board() {
    let registry = Registry::new();
    let id = registry.create().unwrap();
    let reply = registry.play(id, "g1f3".parse().unwrap()).unwrap();
    assert!(reply.is_in_bounds());
    assert!(registry.board(id).unwrap().piece_at(reply.from).is_some());
}

#[test]
fn out_of_bounds_move_is_rejected_without_mutation() {
    let registry = Registry::new();
    let id = registry.create().unwrap();
    let mv = Move::new(Coordinate::new(4, 6), Coordinate::new(4, -2));
    assert!(matches!(
        registry.play(id, mv),
        Err(SessionError::Engine(rookery_core::EngineError::OutOfBounds { x: 4, y: -2 }))
    ));
    assert_eq!(registry.board(id).unwrap(), Board::starting_position());
}

#[test]
fn custom_position_without_replies() {
    let registry = Registry::new();
    let board: Board = "8/3P4/8/8/8/8/8/8".parse().unwrap();
    let id = registry.create_from(board).unwrap();
    assert!(matches!(
        registry.play(id, "d7d8".parse().unwrap()),
        Err(SessionError::Engine(rookery_core::EngineError::NoLegalMoves))
    ));
    // The session survives the error and stays usable.
    assert_eq!(
        registry.board(id).unwrap().piece_at(Coordinate::new(3, 0)),
        Some(Piece::WHITE_PAWN)
    );
}

#[test]
fn auto_reply_game_runs_many_plies() {
    let registry = Registry::with_config(RegistryConfig {
        auto_apply_reply: true,
        ..RegistryConfig::default()
    });
    let id = registry.create().unwrap();

    for file in FILES {
        let mv: Move = format!("{file}2{file}3").parse().unwrap();
        registry.play(id, mv).unwrap();
    }
    let board = registry.board(id).unwrap();
    for x in 0..8 {
        assert_eq!(board.piece_at(Coordinate::new(x, 5)), Some(Piece::WHITE_PAWN));
    }
    assert_eq!(board.occupied_count(), 32);
}

// ── Concurrency ──────────────────────────────────────────────────────────────

#[test]
fn parallel_sessions_do_not_interfere() {
    let registry = Arc::new(Registry::new());
    let ids: Vec<_> = (0..8).map(|_| registry.create().unwrap()).collect();

    let handles: Vec<_> = ids
        .iter()
        .zip(FILES)
        .map(|(&id, file)| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mv: Move = format!("{file}2{file}4").parse().unwrap();
                registry.play(id, mv).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let reply = handle.join().unwrap();
        assert_eq!(reply, "b8c6".parse::<Move>().unwrap());
    }

    for (id, x) in ids.into_iter().zip(0..8) {
        let board = registry.board(id).unwrap();
        assert_eq!(board.piece_at(Coordinate::new(x, 4)), Some(Piece::WHITE_PAWN));
        assert_eq!(board.pieces().filter(|(c, _)| c.y == 4).count(), 1);
    }
}

#[test]
fn same_session_calls_are_serialized() {
    let registry = Registry::new();
    let id = registry.create().unwrap();

    thread::scope(|s| {
        for file in FILES {
            let registry = &registry;
            s.spawn(move || {
                let mv: Move = format!("{file}2{file}3").parse().unwrap();
                registry.play(id, mv).unwrap();
            });
        }
    });

    // Every push landed; none was lost to a concurrent overwrite.
    let board = registry.board(id).unwrap();
    for x in 0..8 {
        assert_eq!(board.piece_at(Coordinate::new(x, 5)), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Coordinate::new(x, 6)), None);
    }
}

#[test]
fn concurrent_create_respects_cap() {
    let registry = Registry::with_config(RegistryConfig {
        max_sessions: 5,
        ..RegistryConfig::default()
    });

    let created: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..16).map(|_| s.spawn(|| registry.create().is_ok())).collect();
        handles.into_iter().map(|h| usize::from(h.join().unwrap())).sum()
    });

    assert_eq!(created, 5);
    assert_eq!(registry.len(), 5);
}
