use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blocktris::core::{
    rotate, valid, FrameScheduler, GameLoop, Grid, NullRenderer, Piece, PieceFactory, Rules,
};
use blocktris::types::{GameAction, PieceKind, GameStatus, BOARD_COLS};

fn new_game(seed: u64) -> GameLoop<FrameScheduler, NullRenderer> {
    let mut game = GameLoop::new(
        Rules::default(),
        PieceFactory::random(seed),
        FrameScheduler::new(),
        NullRenderer,
    )
    .unwrap();
    game.play(0).unwrap();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = new_game(12345);
    let mut now = 0u64;

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            now += 801;
            if game.status() != GameStatus::Running {
                game.play(now).unwrap();
            }
            if let Some(tick) = game.scheduler_mut().take_due() {
                black_box(game.on_tick(tick, now).unwrap());
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, PieceKind::I.color_id());
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let grid = Grid::new(20, 10);
    let piece = Piece::spawn(PieceKind::T, grid.cols());

    c.bench_function("valid", |b| b.iter(|| valid(black_box(&piece), &grid)));
}

fn bench_rotate(c: &mut Criterion) {
    let piece = Piece::spawn(PieceKind::I, BOARD_COLS);

    c.bench_function("rotate", |b| b.iter(|| rotate(black_box(&piece))));
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = new_game(7);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.status() != GameStatus::Running {
                game.play(0).unwrap();
            }
            game.handle_action(GameAction::HardDrop, 0).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_rotate,
    bench_hard_drop
);
criterion_main!(benches);
