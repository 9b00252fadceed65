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

//! Fold monitoring interface
//!
//! Lifecycle
//! - enter → { table generated → merged } per bidder → exit
//! - `DpSolverStatistics` is provided to every callback for telemetry.
//! - Monitors observe the fold; they cannot alter or shorten it.

use crate::stats::DpSolverStatistics;
use gavel_model::{index::BidderIndex, instance::AuctionInstance};
use num_traits::{PrimInt, Signed};

/// Trait for observing the fold of the DP solver.
pub trait FoldMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the solve starts, after the buffers are sized.
    fn on_enter_solve(&mut self, instance: &AuctionInstance<T>, statistics: &DpSolverStatistics);
    /// Called after the revenue table of `bidder` has been generated.
    fn on_table_generated(&mut self, bidder: BidderIndex, statistics: &DpSolverStatistics);
    /// Called after the bidder of `round` (zero based) has been folded in.
    /// `accumulator` is the merged table of every bidder folded so far; its
    /// last entry is the best revenue over all items.
    fn on_merge(&mut self, round: usize, accumulator: &[T], statistics: &DpSolverStatistics);
    /// Called once every bidder has been folded in.
    fn on_exit_solve(&mut self, statistics: &DpSolverStatistics);
}

impl<T, M> FoldMonitor<T> for &mut M
where
    T: PrimInt + Signed,
    M: FoldMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_solve(&mut self, instance: &AuctionInstance<T>, statistics: &DpSolverStatistics) {
        (**self).on_enter_solve(instance, statistics);
    }

    #[inline(always)]
    fn on_table_generated(&mut self, bidder: BidderIndex, statistics: &DpSolverStatistics) {
        (**self).on_table_generated(bidder, statistics);
    }

    #[inline(always)]
    fn on_merge(&mut self, round: usize, accumulator: &[T], statistics: &DpSolverStatistics) {
        (**self).on_merge(round, accumulator, statistics);
    }

    #[inline(always)]
    fn on_exit_solve(&mut self, statistics: &DpSolverStatistics) {
        (**self).on_exit_solve(statistics);
    }
}

impl<T> std::fmt::Debug for dyn FoldMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FoldMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn FoldMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FoldMonitor({})", self.name())
    }
}
