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

//! Bitmask dynamic programming solver for budget-constrained auctions.
//!
//! The solver folds bidders into an accumulator table one at a time. After
//! `r` rounds, `accumulator[u]` is the best revenue obtainable by selling the
//! items of `u` to the first `r` bidders of the fold order. Round zero writes
//! the first bidder's table straight into the accumulator; every later round
//! generates the bidder's table into its own buffer and merges it with the
//! accumulator into the scratch buffer, which then becomes the accumulator.
//! The answer is the entry of the allocation that contains every item.
//!
//! The three buffers live in a `TableArena` owned by the solver and are only
//! resized between solves, so repeated solving over instances of similar
//! size does not allocate.
//!
//! Every solve folds all bidders; monitors only observe the rounds.

use crate::{
    generate::generate_into,
    merge::merge_into,
    monitor::{fold_monitor::FoldMonitor, no_op::NoOpMonitor},
    result::DpSolverOutcome,
    stats::DpSolverStatistics,
    table::TableArena,
};
use gavel_model::{index::BidderIndex, instance::AuctionInstance};
use gavel_search::{num::RevenueNumeric, result::SolverOutcome, solver::AuctionSolver};

/// Exact solver computing the maximum revenue of an auction by folding
/// per-bidder revenue tables with a max-plus subset convolution.
#[derive(Debug, Clone)]
pub struct DpSolver<T> {
    arena: TableArena<T>,
}

impl<T> Default for DpSolver<T>
where
    T: RevenueNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DpSolver<T>
where
    T: RevenueNumeric,
{
    /// Create a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: TableArena::default(),
        }
    }

    /// Create a new solver instance with buffers preallocated for
    /// instances with `items` items.
    ///
    /// # Note
    ///
    /// The solver resizes its buffers for every instance it is given.
    /// Preallocating only moves the cost of the allocation to construction
    /// time; it does not change the memory used by a solve.
    ///
    /// # Panics
    ///
    /// Panics if `items > MAX_ITEMS` or the tables are not addressable.
    #[inline]
    pub fn preallocated(items: u32) -> Self {
        Self {
            arena: TableArena::preallocated(items),
        }
    }

    /// Returns the memory currently reserved by the solver's buffers, in bytes.
    #[inline]
    pub fn reserved_bytes(&self) -> usize {
        self.arena.memory_bytes()
    }

    /// Solves the instance, folding bidders in index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gavel_exact::{dp::DpSolver, monitor::no_op::NoOpMonitor};
    /// # use gavel_model::instance::AuctionInstance;
    /// let instance = AuctionInstance::<i64>::new(2, 2, vec![10, 10], vec![5, 5, 3, 8]).unwrap();
    /// let outcome = DpSolver::new().solve(&instance, NoOpMonitor::new());
    /// assert_eq!(outcome.revenue(), 13);
    /// ```
    #[inline]
    pub fn solve<M>(&mut self, instance: &AuctionInstance<T>, monitor: M) -> DpSolverOutcome<T>
    where
        M: FoldMonitor<T>,
    {
        FoldSession::new(&mut self.arena, instance, monitor).run(instance.bidders())
    }

    /// Solves the instance, folding bidders in the given order.
    ///
    /// The optimal revenue does not depend on the order. The order decides
    /// which bidders the intermediate accumulators seen by the monitor
    /// cover.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of the instance's bidders.
    pub fn solve_in_order<M>(
        &mut self,
        instance: &AuctionInstance<T>,
        order: &[BidderIndex],
        monitor: M,
    ) -> DpSolverOutcome<T>
    where
        M: FoldMonitor<T>,
    {
        assert_permutation(instance.num_bidders(), order);
        FoldSession::new(&mut self.arena, instance, monitor).run(order.iter().copied())
    }
}

impl<T> AuctionSolver<T> for DpSolver<T>
where
    T: RevenueNumeric,
{
    fn name(&self) -> &str {
        "dp"
    }

    fn solve(&mut self, instance: &AuctionInstance<T>) -> SolverOutcome<T> {
        DpSolver::solve(self, instance, NoOpMonitor::new()).into()
    }
}

/// Returns the maximum revenue of the instance.
///
/// Convenience wrapper around a fresh [`DpSolver`] without monitoring.
///
/// # Examples
///
/// ```rust
/// # use gavel_exact::dp::solve_revenue;
/// # use gavel_model::instance::AuctionInstance;
/// let instance = AuctionInstance::<i64>::new(2, 2, vec![10, 10], vec![5, 5, 3, 8]).unwrap();
/// assert_eq!(solve_revenue(&instance), 13);
/// ```
pub fn solve_revenue<T>(instance: &AuctionInstance<T>) -> T
where
    T: RevenueNumeric,
{
    DpSolver::preallocated(instance.num_items())
        .solve(instance, NoOpMonitor::new())
        .revenue()
}

fn assert_permutation(num_bidders: usize, order: &[BidderIndex]) {
    assert_eq!(
        order.len(),
        num_bidders,
        "called `DpSolver::solve_in_order` with an order of {} bidders for an instance with {}",
        order.len(),
        num_bidders
    );

    let mut seen = vec![false; num_bidders];
    for &bidder in order {
        let index = bidder.get();
        assert!(
            index < num_bidders,
            "called `DpSolver::solve_in_order` with bidder index out of bounds: the len is {} but the index is {}",
            num_bidders,
            index
        );
        assert!(
            !std::mem::replace(&mut seen[index], true),
            "called `DpSolver::solve_in_order` with bidder {} listed twice",
            bidder
        );
    }
}

/// Per-run state of a fold.
struct FoldSession<'a, T, M> {
    arena: &'a mut TableArena<T>,
    instance: &'a AuctionInstance<T>,
    monitor: M,
    stats: DpSolverStatistics,
    full: usize,
    start_time: std::time::Instant,
}

impl<'a, T, M> FoldSession<'a, T, M>
where
    T: RevenueNumeric,
    M: FoldMonitor<T>,
{
    #[inline]
    fn new(arena: &'a mut TableArena<T>, instance: &'a AuctionInstance<T>, monitor: M) -> Self {
        let start_time = std::time::Instant::now();
        arena.ensure_items(instance.num_items());

        let mut stats = DpSolverStatistics::default();
        stats.set_table_layout(arena.table_len(), arena.memory_bytes());

        Self {
            arena,
            instance,
            monitor,
            stats,
            full: instance.table_len() - 1,
            start_time,
        }
    }

    /// Run the fold over the bidders in `order`.
    fn run<I>(mut self, order: I) -> DpSolverOutcome<T>
    where
        I: IntoIterator<Item = BidderIndex>,
    {
        tracing::debug!(
            bidders = self.instance.num_bidders(),
            items = self.instance.num_items(),
            table_entries = self.stats.table_entries,
            table_bytes = self.stats.table_bytes,
            "starting revenue fold"
        );
        self.monitor.on_enter_solve(self.instance, &self.stats);

        for (round, bidder) in order.into_iter().enumerate() {
            self.fold_bidder(round, bidder);
        }

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_solve(&self.stats);

        let revenue = self.best_revenue();
        tracing::debug!(
            revenue = %revenue,
            merges = self.stats.merges,
            elapsed_us = self.stats.time_total.as_micros() as u64,
            "revenue fold completed"
        );
        DpSolverOutcome::new(revenue, self.stats)
    }

    /// Folds one bidder into the accumulator.
    #[inline]
    fn fold_bidder(&mut self, round: usize, bidder: BidderIndex) {
        let budget = self.instance.bidder_budget(bidder);
        let bids = self.instance.bidder_bids(bidder);

        if round == 0 {
            generate_into(self.arena.accumulator_mut(), budget, bids);
            self.stats.on_table_generated();
            self.monitor.on_table_generated(bidder, &self.stats);
        } else {
            let (accumulator, scratch, table) = self.arena.split_mut();
            generate_into(table, budget, bids);
            self.stats.on_table_generated();
            self.monitor.on_table_generated(bidder, &self.stats);

            merge_into(scratch, accumulator, table);
            self.arena.swap_accumulator();
            self.stats.on_merge(self.instance.num_items());
        }
        self.stats.on_bidder_folded();

        let accumulator = self.arena.accumulator();
        tracing::trace!(
            round,
            bidder = bidder.get(),
            best = %accumulator[self.full],
            "bidder folded"
        );
        self.monitor.on_merge(round, accumulator, &self.stats);
    }

    /// The revenue over all items once every bidder has been folded in.
    #[inline]
    fn best_revenue(&self) -> T {
        debug_assert_eq!(self.stats.bidders_folded, self.instance.num_bidders() as u64);
        self.arena.accumulator()[self.full]
    }
}
