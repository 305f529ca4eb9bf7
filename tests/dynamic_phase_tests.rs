//! Dynamic phase integration tests.
//!
//! Covers moving pieces, wins by movement, the stuck-player skip with its
//! bonus turn, the mutual-stall draw, and resetting a finished game.

use tatedrez::core::{GameState, Phase, PlayerColor, PlayerId, Position, RulesConfig};
use tatedrez::events::GameEvent;
use tatedrez::pieces::PieceKind;
use tatedrez::rules::{BonusTurn, GameResult};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn place_all(state: &mut GameState, placements: &[(PieceKind, i32, i32)]) {
    for &(kind, x, y) in placements {
        assert!(state.place_piece(kind, x, y), "placement at ({x}, {y}) failed");
    }
}

/// White is boxed in after placement; Black can still move its bishop and
/// knight.
///
/// ```text
///   y0:  W-Rook   B-Rook   W-Bishop
///   y1:  B-Knight W-Knight .
///   y2:  .        B-Bishop .
/// ```
const WHITE_STUCK: [(PieceKind, i32, i32); 6] = [
    (PieceKind::Knight, 1, 1),
    (PieceKind::Rook, 1, 0),
    (PieceKind::Rook, 0, 0),
    (PieceKind::Knight, 0, 1),
    (PieceKind::Bishop, 2, 0),
    (PieceKind::Bishop, 1, 2),
];

/// Nobody can move after placement.
const BOTH_STUCK: [(PieceKind, i32, i32); 6] = [
    (PieceKind::Knight, 1, 1),
    (PieceKind::Rook, 1, 0),
    (PieceKind::Rook, 0, 0),
    (PieceKind::Rook, 0, 1),
    (PieceKind::Bishop, 2, 0),
    (PieceKind::Bishop, 0, 2),
];

/// White can complete the top row by sliding its rook from (2, 2) to (2, 0).
const WHITE_TO_WIN: [(PieceKind, i32, i32); 6] = [
    (PieceKind::Knight, 0, 0),
    (PieceKind::Knight, 1, 1),
    (PieceKind::Bishop, 1, 0),
    (PieceKind::Rook, 0, 1),
    (PieceKind::Rook, 2, 2),
    (PieceKind::Bishop, 1, 2),
];

fn dynamic_game(placements: &[(PieceKind, i32, i32)]) -> GameState {
    let mut state = GameState::standard();
    place_all(&mut state, placements);
    assert_eq!(state.phase(), Phase::DynamicPhase);
    assert_eq!(state.current_player().color(), PlayerColor::White);
    state.drain_events();
    state
}

// =============================================================================
// Moves
// =============================================================================

/// Test that an illegal move is rejected without changing anything.
#[test]
fn test_illegal_move_changes_nothing() {
    let mut state = dynamic_game(&WHITE_TO_WIN);
    let board = state.board().clone();

    // Rook may not move diagonally; knight may not land on an occupied cell.
    assert!(!state.move_piece(2, 2, 1, 1));
    assert!(!state.move_piece(0, 0, 1, 2));
    // Off-board, empty source, and a null move.
    assert!(!state.move_piece(2, 2, 2, 3));
    assert!(!state.move_piece(2, 1, 2, 0));
    assert!(!state.move_piece(2, 2, 2, 2));

    assert_eq!(state.board(), &board);
    assert_eq!(state.total_moves(), 6);
    assert_eq!(state.current_player().color(), PlayerColor::White);
    assert!(state.events().is_empty());
}

/// Test that a piece keeps its identity when it moves.
#[test]
fn test_moved_piece_keeps_identity() {
    let mut state = dynamic_game(&WHITE_TO_WIN);
    let (id, _) = state.piece_at(2, 2).unwrap();

    assert!(state.move_piece(2, 2, 2, 1));

    assert!(state.piece_at(2, 2).is_none());
    assert_eq!(state.piece_at(2, 1).map(|(moved, _)| moved), Some(id));
    assert!(state.player(PlayerId::FIRST).owns(id));
    assert_eq!(state.current_player().color(), PlayerColor::Black);
}

/// Test that a line made by moving wins and keeps the turn with the winner.
#[test]
fn test_win_by_movement() {
    init_tracing();
    let mut state = dynamic_game(&WHITE_TO_WIN);

    assert!(state.move_piece(2, 2, 2, 0));

    assert_eq!(state.phase(), Phase::Completed);
    assert_eq!(state.winner(), Some(PlayerColor::White));
    assert_eq!(state.total_moves(), 7);
    assert_eq!(state.current_player().color(), PlayerColor::White);

    let cells: Vec<_> = state.get_winning_cells().iter().map(|&(p, _)| p).collect();
    assert_eq!(cells, vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]);

    assert_eq!(
        state.drain_events(),
        vec![
            GameEvent::PhaseChanged {
                from: Phase::DynamicPhase,
                to: Phase::Completed,
            },
            GameEvent::Won { color: PlayerColor::White },
        ]
    );

    // Black gets no reply.
    assert!(!state.move_piece(1, 1, 2, 1));
}

// =============================================================================
// Stuck players
// =============================================================================

/// Test that a stuck player's move attempt passes the turn and arms a bonus.
#[test]
fn test_stuck_player_is_skipped() {
    init_tracing();
    let mut state = dynamic_game(&WHITE_STUCK);

    assert!(!state.can_move(PlayerId::FIRST));
    assert!(state.can_move(PlayerId::SECOND));

    assert!(!state.move_piece(0, 0, 0, 1));

    assert_eq!(state.phase(), Phase::DynamicPhase);
    assert_eq!(state.total_moves(), 6);
    assert_eq!(state.current_player().color(), PlayerColor::Black);
    assert_eq!(
        state.turns().pending_bonus(),
        Some(BonusTurn {
            holder: PlayerId::SECOND,
            remaining: 1,
        })
    );
    assert_eq!(state.drain_events(), vec![GameEvent::TurnSwitched]);
}

/// Test that the opponent of a stuck player moves twice in a row.
#[test]
fn test_bonus_turn_after_skip() {
    let mut state = dynamic_game(&WHITE_STUCK);
    assert!(!state.move_piece(0, 0, 0, 1));
    state.drain_events();

    // First Black move: the bonus keeps Black on turn, so no switch is announced.
    assert!(state.move_piece(1, 2, 2, 1));
    assert_eq!(state.total_moves(), 7);
    assert_eq!(state.current_player().color(), PlayerColor::Black);
    assert_eq!(state.turns().pending_bonus(), None);
    assert!(state.drain_events().is_empty());

    // Second Black move frees White's rook.
    assert!(state.move_piece(0, 1, 2, 2));
    assert_eq!(state.total_moves(), 8);
    assert_eq!(state.current_player().color(), PlayerColor::White);
    assert!(state.player(PlayerId::FIRST).is_turn);
    assert_eq!(state.drain_events(), vec![GameEvent::TurnSwitched]);
    assert!(state.can_move(PlayerId::FIRST));

    // White completes the anti-diagonal.
    assert!(state.move_piece(0, 0, 0, 2));
    assert_eq!(state.winner(), Some(PlayerColor::White));
    let cells: Vec<_> = state.get_winning_cells().iter().map(|&(p, _)| p).collect();
    assert_eq!(cells, vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]);
}

/// Test that a zero bonus falls back to plain alternation after a skip.
#[test]
fn test_skip_without_bonus_turns() {
    let config = RulesConfig::standard().with_stuck_bonus_turns(0);
    let mut state = GameState::new(config);
    place_all(&mut state, &WHITE_STUCK);

    assert!(!state.move_piece(0, 0, 0, 1));
    assert_eq!(state.current_player().color(), PlayerColor::Black);
    assert_eq!(state.turns().pending_bonus(), None);

    assert!(state.move_piece(1, 2, 2, 1));
    assert_eq!(state.current_player().color(), PlayerColor::White);
}

/// Test that the game is drawn when neither player can move.
#[test]
fn test_mutual_stall_is_a_draw() {
    let mut state = dynamic_game(&BOTH_STUCK);

    assert!(!state.can_move(PlayerId::FIRST));
    assert!(!state.can_move(PlayerId::SECOND));

    assert!(!state.move_piece(0, 0, 0, 1));

    assert_eq!(state.phase(), Phase::Completed);
    assert_eq!(state.result(), Some(GameResult::Draw));
    assert_eq!(state.winner(), None);
    assert!(state.get_winning_cells().is_empty());
    assert_eq!(state.total_moves(), 6);
    assert_eq!(
        state.drain_events(),
        vec![
            GameEvent::PhaseChanged {
                from: Phase::DynamicPhase,
                to: Phase::Completed,
            },
            GameEvent::Stalemate,
        ]
    );
}

// =============================================================================
// Reset
// =============================================================================

/// Test that a finished game can be reset and replayed.
#[test]
fn test_reset_after_win() {
    let mut state = dynamic_game(&WHITE_TO_WIN);
    assert!(state.move_piece(2, 2, 2, 0));
    assert!(state.game_over());

    state.reset();

    assert_eq!(state.phase(), Phase::PlacementPhase);
    assert!(state.board().is_empty());
    assert!(state.pieces().is_empty());
    assert_eq!(state.total_moves(), 0);
    assert_eq!(state.result(), None);
    assert!(state.get_winning_cells().is_empty());
    assert_eq!(state.current_player().color(), PlayerColor::White);
    assert_eq!(state.events().last(), Some(&GameEvent::Reset));

    place_all(&mut state, &WHITE_TO_WIN);
    assert_eq!(state.phase(), Phase::DynamicPhase);
}

/// Test that reset clears a pending bonus.
#[test]
fn test_reset_clears_bonus() {
    let mut state = dynamic_game(&WHITE_STUCK);
    assert!(!state.move_piece(0, 0, 0, 1));
    assert!(state.turns().pending_bonus().is_some());

    state.reset();

    assert_eq!(state.turns().pending_bonus(), None);
    assert_eq!(state.current_id(), PlayerId::FIRST);
    assert!(state.player(PlayerId::FIRST).is_turn);
    assert!(!state.player(PlayerId::SECOND).is_turn);
}
