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

use crate::merge::submask_visits;
use gavel_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use gavel_search::stats::{SolverStatistics, SolverStatisticsBuilder};
use std::time::Duration;

/// Statistics collected during a fold of the DP solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DpSolverStatistics {
    /// Bidders whose tables have entered the accumulator.
    pub bidders_folded: u64,
    /// Per-bidder revenue tables generated.
    pub tables_generated: u64,
    /// Subset merges performed.
    pub merges: u64,
    /// `(subset, submask)` pairs visited across all merges.
    pub submask_visits: u64,
    /// Entries per revenue table, `2^items`.
    pub table_entries: usize,
    /// Memory reserved by the working buffers, in bytes.
    pub table_bytes: usize,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl DpSolverStatistics {
    #[inline]
    pub fn on_table_generated(&mut self) {
        self.tables_generated = self.tables_generated.saturating_add_val(1);
    }

    #[inline]
    pub fn on_bidder_folded(&mut self) {
        self.bidders_folded = self.bidders_folded.saturating_add_val(1);
    }

    /// Records a merge over `items` items.
    #[inline]
    pub fn on_merge(&mut self, items: u32) {
        self.merges = self.merges.saturating_add_val(1);
        self.submask_visits = self.submask_visits.saturating_add_val(submask_visits(items));
    }

    #[inline]
    pub fn set_table_layout(&mut self, entries: usize, bytes: usize) {
        self.table_entries = entries;
        self.table_bytes = bytes;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for DpSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Gavel-DP Solver Statistics:")?;
        writeln!(f, "  Bidders folded:       {}", self.bidders_folded)?;
        writeln!(f, "  Tables generated:     {}", self.tables_generated)?;
        writeln!(f, "  Merges:               {}", self.merges)?;
        writeln!(f, "  Submask visits:       {}", self.submask_visits)?;
        writeln!(f, "  Table entries:        {}", self.table_entries)?;
        writeln!(f, "  Table memory (bytes): {}", self.table_bytes)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

impl From<DpSolverStatistics> for SolverStatistics {
    fn from(stats: DpSolverStatistics) -> Self {
        SolverStatisticsBuilder::new()
            .bidders_folded(stats.bidders_folded)
            .merges(stats.merges)
            .submask_visits(stats.submask_visits)
            .table_entries(stats.table_entries)
            .max_memory_bytes(stats.table_bytes)
            .solve_duration(stats.time_total)
            .build()
    }
}
