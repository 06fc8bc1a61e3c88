use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use solitaire_rs::game::{DrawMode, Game, StockPolicy};

fn bench_deal(c: &mut Criterion) {
    let mut g = c.benchmark_group("deal");
    for seed in [1u64, 42, 123_456_789] {
        g.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, &seed| {
            b.iter(|| Game::new_seeded(DrawMode::One, StockPolicy::Recycle, black_box(seed)))
        });
    }
    g.finish();
}

fn bench_stock_cycle(c: &mut Criterion) {
    c.bench_function("draw_and_recycle_full_stock", |b| {
        b.iter(|| {
            let mut game =
                Game::new_seeded(DrawMode::Three, StockPolicy::Recycle, black_box(7));
            let mut drawn = 0;
            // Eight draws empty the stock, the ninth recycles it.
            for _ in 0..9 {
                drawn += game.draw_from_stock();
            }
            drawn
        })
    });
}

fn bench_legality_scan(c: &mut Criterion) {
    let game = Game::new_seeded(DrawMode::One, StockPolicy::Recycle, 42);
    c.bench_function("can_move_scan_all_tops", |b| {
        b.iter(|| {
            let mut legal = 0;
            for column in game.columns() {
                let Some(card) = column.top() else { continue };
                for dst in 0..game.columns().len() {
                    if game.can_move_to_tableau(black_box(card), dst) {
                        legal += 1;
                    }
                }
                if game.can_move_to_foundation(card, card.suit()) {
                    legal += 1;
                }
            }
            legal
        })
    });
}

criterion_group!(benches, bench_deal, bench_stock_cycle, bench_legality_scan);
criterion_main!(benches);
