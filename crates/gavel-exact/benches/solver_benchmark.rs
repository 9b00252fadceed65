// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gavel_exact::{dp::DpSolver, generate::generate, merge::merge, monitor::no_op::NoOpMonitor};
use gavel_model::instance::AuctionInstance;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Budgets and bids are drawn uniformly from `0..=MAX_VALUE`.
const MAX_VALUE: i64 = 400;

fn random_instance(seed: u64, bidders: usize, items: u32) -> AuctionInstance<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let budgets = (0..bidders)
        .map(|_| rng.random_range(0..=MAX_VALUE))
        .collect();
    let bids = (0..bidders * items as usize)
        .map(|_| rng.random_range(0..=MAX_VALUE))
        .collect();
    AuctionInstance::new(bidders, items, budgets, bids).expect("benchmark instance must be valid")
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("dp_solve");

    // 20 bidders, 10 items is the reference workload.
    for &(bidders, items) in &[(20usize, 10u32), (20, 12), (8, 14)] {
        let instance = random_instance(42, bidders, items);
        let mut solver = DpSolver::preallocated(items);

        group.throughput(Throughput::Elements(
            (bidders as u64 - 1) * 3u64.pow(items),
        ));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", bidders, items)),
            &instance,
            |b, inst| {
                b.iter(|| {
                    let outcome = solver.solve(black_box(inst), NoOpMonitor::new());
                    black_box(outcome.revenue())
                })
            },
        );
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_merge");

    for items in [8u32, 10, 12] {
        let instance = random_instance(7, 2, items);
        let a = generate(items, instance.budgets()[0], &instance.bids()[..items as usize]);
        let b = generate(items, instance.budgets()[1], &instance.bids()[items as usize..]);

        group.throughput(Throughput::Elements(3u64.pow(items)));
        group.bench_with_input(BenchmarkId::from_parameter(items), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(merge(black_box(a), black_box(b))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve, bench_merge);
criterion_main!(benches);
