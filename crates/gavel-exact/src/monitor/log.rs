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

//! Progress logging for the revenue fold
//!
//! `LogMonitor` emits structured `tracing` events: one when the solve starts,
//! a progress line at most once per `log_interval` while bidders are folded
//! in, and one when the solve ends. No subscriber is installed here; the
//! embedding application decides where the events go.

use crate::{monitor::fold_monitor::FoldMonitor, stats::DpSolverStatistics};
use gavel_model::{index::BidderIndex, instance::AuctionInstance};
use num_traits::{PrimInt, Signed};
use std::time::{Duration, Instant};

/// Reports fold progress through `tracing` and remembers the best revenue
/// over all items seen after the last merge.
#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    num_bidders: usize,
    best_revenue: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    /// Creates a monitor that emits a progress event at most once per `log_interval`.
    pub fn new(log_interval: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            num_bidders: 0,
            best_revenue: None,
        }
    }

    /// Returns the revenue over all items after the last folded bidder.
    #[inline]
    pub fn best_revenue(&self) -> Option<T> {
        self.best_revenue
    }

    #[inline(always)]
    fn log_line(&mut self, round: usize, stats: &DpSolverStatistics) {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.start_time).as_millis() as u64;

        tracing::info!(
            round,
            bidders = stats.bidders_folded,
            total = self.num_bidders,
            best = ?self.best_revenue,
            merges = stats.merges,
            elapsed_ms,
            "fold progress"
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}ms)",
            self.log_interval.as_millis()
        )
    }
}

impl<T> FoldMonitor<T> for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_solve(&mut self, instance: &AuctionInstance<T>, stats: &DpSolverStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.num_bidders = instance.num_bidders();
        self.best_revenue = None;

        tracing::info!(
            bidders = instance.num_bidders(),
            items = instance.num_items(),
            table_entries = stats.table_entries,
            table_bytes = stats.table_bytes,
            "fold started"
        );
    }

    fn on_table_generated(&mut self, _bidder: BidderIndex, _stats: &DpSolverStatistics) {}

    fn on_merge(&mut self, round: usize, accumulator: &[T], stats: &DpSolverStatistics) {
        self.best_revenue = accumulator.last().copied();
        if self.last_log_time.elapsed() >= self.log_interval {
            self.log_line(round, stats);
        }
    }

    fn on_exit_solve(&mut self, stats: &DpSolverStatistics) {
        tracing::info!(
            bidders = stats.bidders_folded,
            best = ?self.best_revenue,
            elapsed_ms = self.start_time.elapsed().as_millis() as u64,
            "fold finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::LogMonitor;
    use crate::{dp::DpSolver, monitor::fold_monitor::FoldMonitor, stats::DpSolverStatistics};
    use gavel_model::instance::AuctionInstance;
    use std::time::Duration;

    #[test]
    fn test_tracks_best_revenue() {
        let mut monitor = LogMonitor::<i64>::new(Duration::ZERO);
        let instance = AuctionInstance::new(2, 1, vec![5, 5], vec![3, 4]).unwrap();
        let stats = DpSolverStatistics::default();

        monitor.on_enter_solve(&instance, &stats);
        assert_eq!(monitor.best_revenue(), None);

        monitor.on_merge(0, &[0, 3], &stats);
        assert_eq!(monitor.best_revenue(), Some(3));
        monitor.on_merge(1, &[0, 4], &stats);
        assert_eq!(monitor.best_revenue(), Some(4));
        monitor.on_exit_solve(&stats);
    }

    #[test]
    fn test_observes_a_full_solve() {
        let instance = AuctionInstance::<i64>::new(2, 2, vec![10, 10], vec![5, 5, 3, 8]).unwrap();
        let mut monitor = LogMonitor::new(Duration::ZERO);
        let outcome = DpSolver::new().solve(&instance, &mut monitor);
        assert_eq!(monitor.best_revenue(), Some(outcome.revenue()));
        assert_eq!(monitor.best_revenue(), Some(13));
    }

    #[test]
    fn test_display() {
        let monitor = LogMonitor::<i64>::new(Duration::from_millis(250));
        assert_eq!(format!("{}", monitor), "LogMonitor(log_interval: 250ms)");
        assert_eq!(monitor.name(), "LogMonitor");
    }
}
