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

//! Gavel-Exact: bitmask dynamic programming for budget-constrained auctions
//!
//! Computes the maximum revenue of a combinatorial auction in which every
//! bidder places a bid on every item and pays the sum of its bids on the
//! items it receives, capped at its budget.
//!
//! Core flow
//! - Provide a validated `gavel_model::instance::AuctionInstance<T>`.
//! - For each bidder, tabulate the capped revenue of every subset of items
//!   (`generate`).
//! - Fold the tables with a max-plus subset convolution (`merge`), one
//!   bidder at a time, into a single accumulator table.
//! - Read the answer at the allocation that contains every item.
//!
//! Design highlights
//! - Tables are dense `Vec<T>` indexed by the subset bitmask; the three
//!   buffers of a solve live in a reusable `TableArena` and are swapped,
//!   never reallocated, between rounds.
//! - The fold is order independent; `DpSolver::solve_in_order` exposes an
//!   explicit order so callers can check it.
//! - Every solve folds all bidders and returns the exact optimum. Monitors
//!   only observe the rounds, for progress logging.
//!
//! Complexity
//! - Time `O(n * 3^k)` and memory `O(2^k)` for `n` bidders and `k` items.
//!
//! Module map
//! - `dp`: the solver engine.
//! - `exhaustive`: brute-force reference solver for cross-checking.
//! - `generate`: per-bidder revenue tables.
//! - `merge`: the max-plus subset convolution.
//! - `monitor`: read-only fold monitors (log, no-op).
//! - `result`: the revenue and engine statistics of a solve.
//! - `stats`: lightweight counters and timing.
//! - `table`: revenue tables and the buffer arena.

pub mod dp;
pub mod exhaustive;
pub mod generate;
pub mod merge;
pub mod monitor;
pub mod result;
pub mod stats;
pub mod table;
