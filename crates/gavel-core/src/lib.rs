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

//! # Gavel Core
//!
//! Foundational primitives for the Gavel auction solver. The crate collects
//! the small, allocation-free building blocks that the revenue tables and the
//! subset convolution are written against.
//!
//! ## Modules
//!
//! - `bits`: item subsets encoded as 32-bit words (`Allocation`), the
//!   trailing-zeros based `next_set_bit` scan, and the lazy `SetBits` and
//!   `Submasks` iterators used in the innermost loops of the solver.
//! - `num`: integer constant traits (`Zero`) and by-value checked and
//!   saturating arithmetic traits for generic revenue types.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`).
//!
//! Refer to each module for detailed APIs and examples.

pub mod bits;
pub mod num;
pub mod utils;
