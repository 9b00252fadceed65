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

//! # Gavel Search
//!
//! Solver-agnostic vocabulary shared by every auction solver in the
//! workspace. Concrete engines (the bitmask DP in `gavel-exact`, the
//! exhaustive reference enumeration) report through these types so callers
//! can swap solvers without touching result handling.
//!
//! ## Modules
//!
//! - `num`: the `RevenueNumeric` trait alias for generic revenue types.
//! - `solver`: the `AuctionSolver<T>` trait.
//! - `result`: `SolverOutcome`, the revenue and statistics of a solve.
//! - `stats`: `SolverStatistics` and its builder.

pub mod num;
pub mod result;
pub mod solver;
pub mod stats;
