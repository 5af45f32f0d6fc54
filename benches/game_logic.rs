use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_lite::core::{is_valid_move, Board, GameState, Tetromino};
use tetris_lite::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.new_game();
    let mut now = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            state.tick(black_box(now));
            if state.game_over() {
                state.new_game();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                board.fill_row(y, PieceKind::I);
            }
            board.clear_full_rows()
        })
    });
}

fn bench_is_valid_move(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 12..20 {
        board.fill_row(y, PieceKind::S);
        board.set(4, y as i8, None);
    }
    let piece = Tetromino::new(PieceKind::T);

    c.bench_function("is_valid_move", |b| {
        b.iter(|| is_valid_move(black_box(&piece), &board, black_box(1), black_box(1)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.new_game();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.apply_action(GameAction::Rotate);
        })
    });
}

fn bench_hard_drop_and_lock(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.new_game();
    let mut now = 0u64;

    c.bench_function("hard_drop_and_lock", |b| {
        b.iter(|| {
            state.apply_action(GameAction::HardDrop);
            // A full interval later the blocked piece locks.
            now += 1_000;
            state.tick(now);
            if state.game_over() {
                state.new_game();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_is_valid_move,
    bench_rotate,
    bench_hard_drop_and_lock
);
criterion_main!(benches);
