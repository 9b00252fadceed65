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

//! Randomised properties of the DP solver, cross-checked against the
//! exhaustive enumeration on instances small enough to enumerate.

use gavel_exact::{
    dp::{DpSolver, solve_revenue},
    exhaustive::ExhaustiveSolver,
    generate::generate,
    merge::merge,
    monitor::no_op::NoOpMonitor,
};
use gavel_model::{index::BidderIndex, instance::AuctionInstance};
use gavel_search::solver::AuctionSolver;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

type I = i64;

fn random_instance<R: Rng>(
    rng: &mut R,
    bidders: usize,
    items: u32,
    max_bid: I,
    max_budget: I,
) -> AuctionInstance<I> {
    let budgets = (0..bidders).map(|_| rng.random_range(0..=max_budget)).collect();
    let bids = (0..bidders * items as usize)
        .map(|_| rng.random_range(0..=max_bid))
        .collect();
    AuctionInstance::new(bidders, items, budgets, bids).unwrap()
}

#[test]
fn test_dp_matches_exhaustive_enumeration() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x6a7e1);
    let mut dp = DpSolver::<I>::new();
    let mut reference = ExhaustiveSolver::new();

    for case in 0..200 {
        let bidders = rng.random_range(1..=4);
        let items = rng.random_range(0..=5);
        let instance = random_instance(&mut rng, bidders, items, 20, 40);

        let expected = AuctionSolver::solve(&mut reference, &instance);
        let actual = AuctionSolver::solve(&mut dp, &instance);
        assert_eq!(
            actual.revenue, expected.revenue,
            "case {} disagrees on {:?}",
            case, instance
        );
    }
}

#[test]
fn test_revenue_is_bounded_by_budgets_and_bids() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..100 {
        let bidders = rng.random_range(1..=6);
        let items = rng.random_range(0..=8);
        let instance = random_instance(&mut rng, bidders, items, 50, 120);

        let revenue = solve_revenue(&instance);
        assert!(revenue >= 0);
        assert!(revenue <= instance.budget_sum());
        assert!(revenue <= instance.bid_sum());
    }
}

#[test]
fn test_fold_order_does_not_matter() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut solver = DpSolver::<I>::preallocated(8);

    for _ in 0..50 {
        let bidders = rng.random_range(2..=6);
        let items = rng.random_range(1..=8);
        let instance = random_instance(&mut rng, bidders, items, 30, 80);

        let forward = solver.solve(&instance, NoOpMonitor::new()).revenue();

        let mut order: Vec<BidderIndex> = instance.bidders().collect();
        order.reverse();
        let reversed = solver
            .solve_in_order(&instance, &order, NoOpMonitor::new())
            .revenue();

        order.shuffle(&mut rng);
        let shuffled = solver
            .solve_in_order(&instance, &order, NoOpMonitor::new())
            .revenue();

        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
    }
}

#[test]
fn test_merging_tables_directly_matches_solver() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let instance = random_instance(&mut rng, 3, 7, 25, 60);

    let tables: Vec<_> = instance
        .bidders()
        .map(|b| generate(instance.num_items(), instance.bidder_budget(b), instance.bidder_bids(b)))
        .collect();

    let left = merge(&merge(&tables[0], &tables[1]), &tables[2]);
    let right = merge(&tables[0], &merge(&tables[1], &tables[2]));
    assert_eq!(left, right);
    assert_eq!(left.full(), solve_revenue(&instance));
}

#[test]
fn test_adding_a_bidder_never_lowers_revenue() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..50 {
        let items = rng.random_range(1..=6);
        let larger = random_instance(&mut rng, 4, items, 30, 60);

        let k = items as usize;
        let smaller = AuctionInstance::new(
            3,
            items,
            larger.budgets()[..3].to_vec(),
            larger.bids()[..3 * k].to_vec(),
        )
        .unwrap();

        assert!(solve_revenue(&smaller) <= solve_revenue(&larger));
    }
}

#[test]
fn test_raising_a_budget_never_lowers_revenue() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let instance = random_instance(&mut rng, 3, 5, 30, 40);
        let mut budgets = instance.budgets().to_vec();
        budgets[0] += 10;
        let richer = AuctionInstance::new(3, 5, budgets, instance.bids().to_vec()).unwrap();

        assert!(solve_revenue(&instance) <= solve_revenue(&richer));
    }
}

#[test]
fn test_uncapped_budgets_sell_each_item_to_its_highest_bidder() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for _ in 0..50 {
        let items = rng.random_range(0..=7);
        let instance = random_instance(&mut rng, 4, items, 30, 0);
        let budgets = vec![instance.bid_sum(); 4];
        let uncapped = AuctionInstance::new(4, items, budgets, instance.bids().to_vec()).unwrap();

        let k = items as usize;
        let expected: I = (0..k)
            .map(|j| (0..4).map(|i| uncapped.bids()[i * k + j]).max().unwrap_or(0))
            .sum();
        assert_eq!(solve_revenue(&uncapped), expected);
    }
}
