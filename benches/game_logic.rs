use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockblast::core::{get_shape, is_game_over, GameState, Grid, PieceGenerator};
use blockblast::types::{BlockColor, ShapeKind};

/// Checkerboard: dense but with a free cell next to every filled one.
fn checkerboard() -> Grid {
    let mut grid = Grid::new();
    for r in 0..8i8 {
        for c in 0..8i8 {
            if (r + c) % 2 == 0 {
                grid.set(r, c, Some(BlockColor::Primary));
            }
        }
    }
    grid
}

fn bench_can_place(c: &mut Criterion) {
    let grid = checkerboard();
    let shape = get_shape(ShapeKind::T);

    c.bench_function("can_place_t", |b| {
        b.iter(|| grid.can_place(shape, black_box(3), black_box(2)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_row_and_col", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for i in 0..8i8 {
                grid.set(0, i, Some(BlockColor::Accent));
                grid.set(i, 0, Some(BlockColor::Accent));
            }
            grid.clear_lines()
        })
    });
}

fn bench_game_over_scan(c: &mut Criterion) {
    let grid = checkerboard();
    let mut generator = PieceGenerator::new(12345);
    let pieces = generator.generate_batch();

    c.bench_function("game_over_scan", |b| {
        b.iter(|| is_game_over(black_box(&grid), black_box(&pieces)))
    });
}

fn bench_generate_batch(c: &mut Criterion) {
    let mut generator = PieceGenerator::new(12345);

    c.bench_function("generate_batch", |b| b.iter(|| generator.generate_batch()));
}

fn bench_try_place(c: &mut Criterion) {
    c.bench_function("try_place_first_fit", |b| {
        let mut state = GameState::new(12345, Vec::new());
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            let slot = state.pieces().iter().position(|p| !p.used).unwrap_or(0);
            'search: for r in 0..8 {
                for col in 0..8 {
                    if state.try_place(slot, r, col) {
                        break 'search;
                    }
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_can_place,
    bench_line_clear,
    bench_game_over_scan,
    bench_generate_batch,
    bench_try_place
);
criterion_main!(benches);
