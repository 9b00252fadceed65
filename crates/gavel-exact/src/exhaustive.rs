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

//! Brute-force reference solver.
//!
//! `ExhaustiveSolver` assigns every item to one of the bidders or to nobody
//! and evaluates each of the `(n + 1)^k` complete assignments directly. It
//! shares no code with the DP engine, which makes it a useful oracle for
//! cross-checking on small instances.

use gavel_model::{
    index::{BidderIndex, ItemIndex},
    instance::AuctionInstance,
};
use gavel_search::{
    num::RevenueNumeric, result::SolverOutcome, solver::AuctionSolver,
    stats::SolverStatisticsBuilder,
};

/// Enumerates every assignment of items to bidders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Creates a new solver.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> AuctionSolver<T> for ExhaustiveSolver
where
    T: RevenueNumeric,
{
    fn name(&self) -> &str {
        "exhaustive"
    }

    fn solve(&mut self, instance: &AuctionInstance<T>) -> SolverOutcome<T> {
        let start_time = std::time::Instant::now();
        tracing::debug!(
            bidders = instance.num_bidders(),
            items = instance.num_items(),
            "starting exhaustive enumeration"
        );

        let mut enumeration = Enumeration::new(instance);
        enumeration.visit(0);

        let statistics = SolverStatisticsBuilder::new()
            .bidders_folded(instance.num_bidders() as u64)
            .solve_duration(start_time.elapsed())
            .build();

        tracing::debug!(
            revenue = %enumeration.best,
            leaves = enumeration.leaves,
            "exhaustive enumeration finished"
        );

        SolverOutcome::new(enumeration.best, statistics)
    }
}

struct Enumeration<'a, T> {
    instance: &'a AuctionInstance<T>,
    /// Sum of the bids of each bidder on the items assigned to it so far.
    spend: Vec<T>,
    best: T,
    leaves: u64,
}

impl<'a, T> Enumeration<'a, T>
where
    T: RevenueNumeric,
{
    fn new(instance: &'a AuctionInstance<T>) -> Self {
        Self {
            instance,
            spend: vec![T::zero(); instance.num_bidders()],
            best: T::zero(),
            leaves: 0,
        }
    }

    fn visit(&mut self, item: usize) {
        if item == self.instance.num_items() as usize {
            self.evaluate_leaf();
            return;
        }

        // Item stays unsold.
        self.visit(item + 1);

        let item_index = ItemIndex::new(item);
        for bidder in 0..self.spend.len() {
            let bid = self.instance.bid(BidderIndex::new(bidder), item_index);
            self.spend[bidder] = self.spend[bidder] + bid;
            self.visit(item + 1);
            self.spend[bidder] = self.spend[bidder] - bid;
        }
    }

    fn evaluate_leaf(&mut self) {
        self.leaves += 1;

        let revenue = self
            .instance
            .budgets()
            .iter()
            .zip(&self.spend)
            .fold(T::zero(), |acc, (&budget, &spend)| acc + spend.min(budget));
        if revenue > self.best {
            self.best = revenue;
        }
    }
}
