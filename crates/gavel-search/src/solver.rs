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

use crate::result::SolverOutcome;
use gavel_model::instance::AuctionInstance;
use num_traits::{PrimInt, Signed};

/// A solver for the auction problem with budget constraints.
///
/// Implementors compute the maximum revenue over all allocations of items to
/// bidders, where each bidder pays the sum of its bids on the items it
/// receives, capped at its budget.
pub trait AuctionSolver<T>
where
    T: PrimInt + Signed,
{
    /// A short, stable identifier of the solver.
    fn name(&self) -> &str;

    /// Solves the given instance.
    fn solve(&mut self, instance: &AuctionInstance<T>) -> SolverOutcome<T>;
}

impl<T> std::fmt::Debug for dyn AuctionSolver<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuctionSolver({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn AuctionSolver<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuctionSolver({})", self.name())
    }
}
