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

//! # Gavel Model
//!
//! **The domain model for budget-constrained combinatorial auctions.**
//!
//! An auction instance consists of `n` bidders and `k` items. Every bidder
//! places a non-negative bid on every item and declares a hard budget cap; the
//! seller may give each item to at most one bidder and collects, per bidder,
//! the sum of their winning bids capped at their budget.
//!
//! ## Architecture
//!
//! * **`index`**: strongly typed `BidderIndex` and `ItemIndex`.
//! * **`instance`**: the immutable, validated `AuctionInstance` and the mutable
//!   `AuctionInstanceBuilder` used to assemble one.
//! * **`loading`**: the whitespace-delimited text format reader.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: every precondition the solvers rely on (at least one
//!     bidder, at most 32 items, consistent dimensions, non-negative values,
//!     no revenue overflow) is checked when an instance is built. Solvers never
//!     see an invalid instance.
//! 2.  **Memory Layout**: bids are stored in a single row-major vector
//!     (`bids[bidder * items + item]`), so one bidder's bids form a contiguous
//!     slice.

pub mod index;
pub mod instance;
pub mod loading;
