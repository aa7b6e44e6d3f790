use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{Board, SimpleRng};
use tui_2048::term::{BoardView, ScreenBuffer, Viewport};
use tui_2048::types::{BoxSize, Direction, GridSize, Tile};

fn busy_board() -> Board {
    let rows: &[&[Tile]] = &[
        &[2, 2, 4, 8],
        &[0, 4, 4, 16],
        &[2, 0, 2, 0],
        &[8, 8, 16, 16],
    ];
    Board::from_rows(rows, BoxSize::default(), SimpleRng::new(12345)).unwrap()
}

fn bench_make_move(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("make_move_left", |b| {
        b.iter(|| {
            let mut board = board.clone();
            black_box(board.make_move(black_box(Direction::Left)));
        })
    });
}

fn bench_all_directions(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("make_move_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                let mut board = board.clone();
                black_box(board.make_move(dir));
            }
        })
    });
}

fn bench_generate_piece(c: &mut Criterion) {
    c.bench_function("generate_piece", |b| {
        b.iter(|| {
            let mut board = Board::new(GridSize::new(4, 4), BoxSize::default(), 12345).unwrap();
            black_box(board.generate_piece(true));
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let board = busy_board();
    let view = BoardView::default();
    let mut screen = ScreenBuffer::new(80, 24, ' ').unwrap();

    c.bench_function("render_and_flush_80x24", |b| {
        b.iter(|| {
            screen.clear(' ');
            view.render(&board, &mut screen, (0, 0));
            black_box(screen.flush(Viewport::new(80, 24)));
        })
    });
}

criterion_group!(
    benches,
    bench_make_move,
    bench_all_directions,
    bench_generate_piece,
    bench_render_frame
);
criterion_main!(benches);
