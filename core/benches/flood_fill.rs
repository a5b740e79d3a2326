use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sapper_core::*;

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    // one mine in a corner: a single reveal opens almost the whole board
    for side in [16u8, 64, 255] {
        let layout = MineLayout::from_mine_coords((side, side), &[(0, 0)]).unwrap();
        group.bench_function(format!("open_{side}x{side}"), |b| {
            b.iter_batched(
                || Board::from_layout(layout.clone()),
                |mut board| black_box(board.reveal((side - 1, side - 1))),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_new_game(c: &mut Criterion) {
    let mut session = GameSession::with_seed(0).unwrap();
    for (name, config) in [
        ("beginner", GameConfig::beginner()),
        ("expert", GameConfig::expert()),
        ("dense", GameConfig::new_unchecked(255, 255, 65_000)),
    ] {
        c.bench_function(&format!("new_game_{name}"), |b| {
            b.iter(|| session.new_game_with_config(black_box(config)))
        });
    }
}

criterion_group!(benches, bench_flood_fill, bench_new_game);
criterion_main!(benches);
