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

//! Per-bidder revenue tables.
//!
//! The revenue a single bidder pays for a set of items is the sum of its
//! bids on those items, capped at its budget. These functions tabulate that
//! value for every subset of items.

use crate::table::RevenueTable;
use gavel_core::{
    bits::{self, Allocation, MAX_ITEMS, SetBits},
    num::constants::Zero,
};
use num_traits::PrimInt;

/// Returns `min(budget, sum of bids[j] for every item j in mask)`.
///
/// Bids and budget are expected to be non-negative. The running sum
/// saturates, which cannot change the result: once it exceeds the budget,
/// the budget is returned.
///
/// # Panics
///
/// Panics if `mask` contains an item `j >= bids.len()`.
///
/// # Examples
///
/// ```rust
/// # use gavel_exact::generate::allocation_revenue;
/// assert_eq!(allocation_revenue(10i64, &[5, 5], 0b11), 10);
/// assert_eq!(allocation_revenue(7i64, &[5, 5], 0b11), 7);
/// assert_eq!(allocation_revenue(7i64, &[5, 5], 0b00), 0);
/// ```
#[inline]
pub fn allocation_revenue<T>(budget: T, bids: &[T], mask: Allocation) -> T
where
    T: PrimInt,
{
    SetBits::new(mask)
        .fold(T::zero(), |acc, j| acc.saturating_add(bids[j as usize]))
        .min(budget)
}

/// Writes the capped revenue of every subset of items into `out`.
///
/// Entry `0` is the empty allocation and stays zero. The table costs
/// `O(k * 2^k)`, well below the `O(3^k)` of the merge that consumes it.
///
/// # Panics
///
/// Panics if `out.len() != 2^bids.len()`.
pub fn generate_into<T>(out: &mut [T], budget: T, bids: &[T])
where
    T: PrimInt + Zero,
{
    assert!(
        bids.len() <= MAX_ITEMS as usize && bits::table_len(bids.len() as u32) == Some(out.len()),
        "called `generate_into` with an output of length {} for {} items",
        out.len(),
        bids.len()
    );

    out[0] = T::ZERO;
    for (mask, entry) in out.iter_mut().enumerate().skip(1) {
        // `out.len() <= 2^MAX_ITEMS`, so every index fits an allocation.
        *entry = allocation_revenue(budget, bids, mask as Allocation);
    }
}

/// Builds the revenue table of a single bidder.
///
/// # Panics
///
/// Panics if `bids.len() != items as usize`.
///
/// # Examples
///
/// ```rust
/// # use gavel_exact::generate::generate;
/// let table = generate(2, 10i64, &[3, 8]);
/// assert_eq!(table.as_slice(), &[0, 3, 8, 10]);
/// ```
pub fn generate<T>(items: u32, budget: T, bids: &[T]) -> RevenueTable<T>
where
    T: PrimInt + Zero,
{
    assert_eq!(
        bids.len(),
        items as usize,
        "called `generate` with {} bids for {} items",
        bids.len(),
        items
    );

    let mut table = RevenueTable::new(items);
    generate_into(table.as_mut_slice(), budget, bids);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_allocation_revenue_caps_at_budget() {
        let bids = [4i64, 9, 1];
        assert_eq!(allocation_revenue(100, &bids, 0b111), 14);
        assert_eq!(allocation_revenue(10, &bids, 0b111), 10);
        assert_eq!(allocation_revenue(10, &bids, 0b101), 5);
        assert_eq!(allocation_revenue(0, &bids, 0b111), 0);
    }

    #[test]
    fn test_allocation_revenue_saturates_instead_of_overflowing() {
        let bids = [i8::MAX, i8::MAX];
        assert_eq!(allocation_revenue(100i8, &bids, 0b11), 100);
    }

    #[test]
    fn test_generate_matches_definition() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for k in 0..=8u32 {
            let bids: Vec<i64> = (0..k).map(|_| rng.random_range(0..50)).collect();
            let budget = rng.random_range(0..150);
            let table = generate(k, budget, &bids);

            for mask in 0..table.len() as Allocation {
                assert_eq!(
                    table.get(mask),
                    allocation_revenue(budget, &bids, mask),
                    "mismatch at mask {:#b} for k = {}",
                    mask,
                    k
                );
            }
        }
    }

    #[test]
    fn test_generate_is_monotone_and_plateaus_at_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let bids: Vec<i64> = (0..6).map(|_| rng.random_range(0..30)).collect();
        let budget = 40;
        let table = generate(6, budget, &bids);

        for u in 0..table.len() as Allocation {
            assert!(table.get(u) <= budget);
            for j in SetBits::new(u) {
                let without = u & !(1 << j);
                assert!(table.get(without) <= table.get(u));
                if table.get(without) == budget {
                    assert_eq!(table.get(u), budget);
                }
            }
        }
    }

    #[test]
    fn test_generate_empty_set_is_zero() {
        let table = generate(3, 5i64, &[9, 9, 9]);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.full(), 5);
    }

    #[test]
    fn test_generate_zero_items() {
        let table = generate::<i64>(0, 5, &[]);
        assert_eq!(table.as_slice(), &[0]);
    }

    #[test]
    #[should_panic(expected = "with an output of length 3 for 2 items")]
    fn test_generate_into_rejects_wrong_length() {
        let mut out = [0i64; 3];
        generate_into(&mut out, 1, &[1, 1]);
    }
}
