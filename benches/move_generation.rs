//! Move generation benchmarks.
//!
//! `can_move` runs before every dynamic-phase move, so it sits on the hot
//! path of any host that drives the engine in a loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tatedrez::core::{GameState, PlayerId, Position};
use tatedrez::pieces::PieceKind;

fn dynamic_state() -> GameState {
    let mut state = GameState::standard();
    for (kind, x, y) in [
        (PieceKind::Rook, 0, 0),
        (PieceKind::Rook, 1, 0),
        (PieceKind::Knight, 2, 0),
        (PieceKind::Knight, 0, 1),
        (PieceKind::Bishop, 1, 2),
        (PieceKind::Bishop, 2, 2),
    ] {
        state.place_piece(kind, x, y);
    }
    state
}

fn bench_can_move(c: &mut Criterion) {
    let state = dynamic_state();

    c.bench_function("can_move", |b| {
        b.iter(|| black_box(state.can_move(black_box(PlayerId::FIRST))))
    });
}

fn bench_candidate_destinations(c: &mut Criterion) {
    let state = dynamic_state();
    let board = state.board();
    let mut group = c.benchmark_group("candidate_destinations");

    for kind in PieceKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(kind.candidate_destinations(black_box(Position::new(1, 1)), board)))
        });
    }
    group.finish();
}

fn bench_placement_phase(c: &mut Criterion) {
    c.bench_function("placement_phase", |b| {
        b.iter(|| {
            let state = dynamic_state();
            black_box(state.total_moves())
        })
    });
}

criterion_group!(
    benches,
    bench_can_move,
    bench_candidate_destinations,
    bench_placement_phase
);
criterion_main!(benches);
