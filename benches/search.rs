use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use grid_minimax::games::{Grid3Board, Grid6x7Board};
use grid_minimax::search::{Minimax, NaturalOrder, SearchConfig};

fn bench_grid3(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid3_full_depth");
    let board = Grid3Board::new();

    for alpha_beta in [true, false] {
        let config = SearchConfig::default().with_alpha_beta(alpha_beta);
        group.bench_with_input(
            BenchmarkId::from_parameter(if alpha_beta { "pruned" } else { "full" }),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut search = Minimax::with_ordering(config.clone(), NaturalOrder);
                    black_box(search.search(black_box(&board), true))
                });
            },
        );
    }
    group.finish();
}

fn bench_grid6x7(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid6x7_empty");
    let board = Grid6x7Board::new();

    for depth in [4, 5, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let config = SearchConfig::default().with_depth(depth).with_seed(42);
                let mut search = Minimax::new(config);
                black_box(search.search(black_box(&board), true))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid3, bench_grid6x7);
criterion_main!(benches);
