use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_block_roll::core::{resolve_move, Block, GameState, LevelPack, PuzzleState};
use tui_block_roll::term::{Camera, FrameBuffer, GameView, Viewport};
use tui_block_roll::types::{Direction, Pos};

use tui_block_roll::types::Direction::{East as E, South as S};

const LEVEL_1: [Direction; 8] = [E, E, S, S, S, S, S, S];
const LEVEL_2: [Direction; 12] = [E, E, S, S, E, S, S, E, S, E, E, S];

fn bench_resolve_move(c: &mut Criterion) {
    let pack = LevelPack::builtin().unwrap();
    let level = pack.first();
    let mut state = PuzzleState::spawn(level);
    state.block = Block::upright(Pos::new(3, 3));

    c.bench_function("resolve_move", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(resolve_move(level, black_box(state), dir));
            }
        })
    });
}

fn bench_full_replay(c: &mut Criterion) {
    let pack = LevelPack::builtin().unwrap();

    c.bench_function("replay_both_levels", |b| {
        b.iter(|| {
            let mut game = GameState::new(pack.clone());
            for &dir in LEVEL_1.iter().chain(LEVEL_2.iter()) {
                game.roll(dir);
            }
            black_box(game.score())
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let game = GameState::new(LevelPack::builtin().unwrap());
    let snap = game.snapshot();
    let view = GameView::default();
    let camera = Camera::new();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &camera, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_move,
    bench_full_replay,
    bench_render_frame
);
criterion_main!(benches);
