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

use crate::stats::DpSolverStatistics;
use gavel_search::result::SolverOutcome;
use num_traits::{PrimInt, Signed};

/// Result of the DP solver: the maximum revenue of the instance together
/// with the engine's own statistics.
#[derive(Debug, Clone)]
pub struct DpSolverOutcome<T> {
    revenue: T,
    statistics: DpSolverStatistics,
}

impl<T> DpSolverOutcome<T>
where
    T: Copy,
{
    #[inline]
    pub fn new(revenue: T, statistics: DpSolverStatistics) -> Self {
        Self {
            revenue,
            statistics,
        }
    }

    /// Returns the maximum revenue over all allocations.
    #[inline]
    pub fn revenue(&self) -> T {
        self.revenue
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &DpSolverStatistics {
        &self.statistics
    }
}

impl<T> From<DpSolverOutcome<T>> for SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    fn from(val: DpSolverOutcome<T>) -> Self {
        SolverOutcome::new(val.revenue, val.statistics.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type I = i64;

    #[test]
    fn test_into_solver_outcome_keeps_revenue_and_counters() {
        let mut stats = DpSolverStatistics::default();
        stats.on_table_generated();
        stats.on_bidder_folded();
        stats.on_table_generated();
        stats.on_merge(2);
        stats.on_bidder_folded();

        let outcome = DpSolverOutcome::<I>::new(13, stats);
        assert_eq!(outcome.revenue(), 13);
        assert_eq!(outcome.statistics().merges, 1);

        let generic: SolverOutcome<I> = outcome.into();
        assert_eq!(generic.revenue, 13);
        assert_eq!(generic.statistics.bidders_folded, 2);
        assert_eq!(generic.statistics.merges, 1);
        assert_eq!(generic.statistics.submask_visits, 9);
    }
}
