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

//! # Revenue Numeric Trait
//!
//! Unified numeric bounds for revenue values. `RevenueNumeric` collects the
//! integer capabilities the solvers need into a single alias: the intrinsic
//! traits (`PrimInt`, `Signed`), the `Zero` constant used to initialise
//! tables, and the by-value checked and saturating arithmetic traits from
//! `gavel_core`.
//!
//! Revenues are signed so that the subtraction-free DP stays generic over the
//! same types the instance validation is written for; negative values are
//! rejected at the instance boundary.

use gavel_core::num::{
    constants::Zero,
    ops::{checked_arithmetic, saturating_arithmetic},
};
use num_traits::{PrimInt, Signed};

/// A trait alias for integer types that can be used as revenues.
/// In practice these are the signed integer primitives; `i64` is the usual choice.
pub trait RevenueNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + saturating_arithmetic::SaturatingAddVal
    + checked_arithmetic::CheckedAddVal
    + Send
    + Sync
{
}

impl<T> RevenueNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + saturating_arithmetic::SaturatingAddVal
        + checked_arithmetic::CheckedAddVal
            + Send
        + Sync
{
}
