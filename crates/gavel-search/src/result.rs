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

use crate::stats::SolverStatistics;
use num_traits::{PrimInt, Signed};

/// The result of a completed solve: the maximum revenue over all allocations
/// and the statistics the solver gathered while computing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T>
where
    T: PrimInt + Signed + Copy,
{
    pub revenue: T,
    pub statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed + Copy,
{
    #[inline]
    pub fn new(revenue: T, statistics: SolverStatistics) -> Self {
        Self {
            revenue,
            statistics,
        }
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Revenue: {}", self.revenue)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SolverStatisticsBuilder;

    #[test]
    fn test_new_keeps_revenue_and_statistics() {
        let stats = SolverStatisticsBuilder::new().merges(4).build();
        let outcome = SolverOutcome::new(13i64, stats.clone());
        assert_eq!(outcome.revenue, 13);
        assert_eq!(outcome.statistics, stats);
    }

    #[test]
    fn test_display() {
        let outcome = SolverOutcome::new(3i32, SolverStatisticsBuilder::new().build());
        let rendered = format!("{}", outcome);
        assert!(rendered.starts_with("Revenue: 3\n"));
        assert!(rendered.contains("Solver Statistics:"));
    }
}
