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

/// Statistics collected during the solving process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Number of bidders whose revenue tables entered the result.
    pub bidders_folded: u64,
    /// Number of subset merges performed.
    pub merges: u64,
    /// Number of (subset, submask) pairs visited across all merges.
    pub submask_visits: u64,
    /// Number of entries in a single revenue table.
    pub table_entries: usize,
    /// Maximum memory held by revenue tables (in bytes) during the solving process.
    pub max_memory_bytes: usize,
    /// Total duration of the solving process.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Bidders Folded: {}", self.bidders_folded)?;
        writeln!(f, "  Merges: {}", self.merges)?;
        writeln!(f, "  Submask Visits: {}", self.submask_visits)?;
        writeln!(f, "  Table Entries: {}", self.table_entries)?;
        writeln!(f, "  Max Memory Used (bytes): {}", self.max_memory_bytes)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolverStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatisticsBuilder {
    bidders_folded: u64,
    merges: u64,
    submask_visits: u64,
    table_entries: usize,
    max_memory_bytes: usize,
    solve_duration: std::time::Duration,
}

impl Default for SolverStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStatisticsBuilder {
    /// Creates a new `SolverStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            bidders_folded: 0,
            merges: 0,
            submask_visits: 0,
            table_entries: 0,
            max_memory_bytes: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of folded bidders.
    #[inline]
    pub fn bidders_folded(mut self, bidders_folded: u64) -> Self {
        self.bidders_folded = bidders_folded;
        self
    }

    /// Sets the number of merges.
    #[inline]
    pub fn merges(mut self, merges: u64) -> Self {
        self.merges = merges;
        self
    }

    /// Sets the number of submask visits.
    #[inline]
    pub fn submask_visits(mut self, submask_visits: u64) -> Self {
        self.submask_visits = submask_visits;
        self
    }

    /// Sets the number of entries per revenue table.
    #[inline]
    pub fn table_entries(mut self, table_entries: usize) -> Self {
        self.table_entries = table_entries;
        self
    }

    /// Sets the maximum memory used in bytes.
    #[inline]
    pub fn max_memory_bytes(mut self, max_memory_bytes: usize) -> Self {
        self.max_memory_bytes = max_memory_bytes;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolverStatistics` instance.
    #[inline]
    pub fn build(self) -> SolverStatistics {
        SolverStatistics {
            bidders_folded: self.bidders_folded,
            merges: self.merges,
            submask_visits: self.submask_visits,
            table_entries: self.table_entries,
            max_memory_bytes: self.max_memory_bytes,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolverStatistics;
    use super::SolverStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SolverStatisticsBuilder::new()
            .bidders_folded(3)
            .merges(2)
            .submask_visits(52)
            .table_entries(8)
            .max_memory_bytes(192)
            .solve_duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.bidders_folded, 3);
        assert_eq!(stats.merges, 2);
        assert_eq!(stats.submask_visits, 52);
        assert_eq!(stats.table_entries, 8);
        assert_eq!(stats.max_memory_bytes, 192);
        assert_eq!(stats.solve_duration, Duration::from_millis(1234));
    }

    #[test]
    fn test_default_builder_is_zeroed() {
        let stats = SolverStatisticsBuilder::default().build();
        assert_eq!(stats.bidders_folded, 0);
        assert_eq!(stats.merges, 0);
        assert_eq!(stats.solve_duration, Duration::ZERO);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolverStatistics {
            bidders_folded: 4,
            merges: 3,
            submask_visits: 78,
            table_entries: 8,
            max_memory_bytes: 2_000_000,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Solver Statistics:"), "missing header");
        assert!(rendered.contains("Bidders Folded: 4"), "missing bidders_folded");
        assert!(rendered.contains("Merges: 3"), "missing merges");
        assert!(rendered.contains("Submask Visits: 78"), "missing submask_visits");
        assert!(rendered.contains("Table Entries: 8"), "missing table_entries");
        assert!(
            rendered.contains("Max Memory Used (bytes): 2000000"),
            "missing max_memory_bytes"
        );
        assert!(
            rendered.contains("Solve Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }
}
