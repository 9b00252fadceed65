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

use crate::{monitor::fold_monitor::FoldMonitor, stats::DpSolverStatistics};
use gavel_model::{index::BidderIndex, instance::AuctionInstance};
use num_traits::{PrimInt, Signed};

/// A no-operation monitor that implements the `FoldMonitor` trait
/// but does nothing on any of the events.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOpMonitor<T>
where
    T: PrimInt + Signed,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOpMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `NoOpMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> FoldMonitor<T> for NoOpMonitor<T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    #[inline(always)]
    fn on_enter_solve(&mut self, _instance: &AuctionInstance<T>, _statistics: &DpSolverStatistics) {
    }

    #[inline(always)]
    fn on_table_generated(&mut self, _bidder: BidderIndex, _statistics: &DpSolverStatistics) {}

    #[inline(always)]
    fn on_merge(&mut self, _round: usize, _accumulator: &[T], _statistics: &DpSolverStatistics) {}

    #[inline(always)]
    fn on_exit_solve(&mut self, _statistics: &DpSolverStatistics) {}
}
