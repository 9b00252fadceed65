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

//! Max-plus subset convolution.
//!
//! Given the revenue tables `a` and `b` of two disjoint groups of bidders,
//! the table of the combined group is
//!
//! ```text
//! out[u] = max over m ⊆ u of a[m] + b[u \ m]
//! ```
//!
//! i.e. the best way to split the items of `u` between the two groups.
//! Submasks of `u` are enumerated with `m = (m - 1) & u` (see
//! [`Submasks`]), from `u` down to `0`, so a merge over `k` items visits
//! `3^k` pairs in total.

use crate::table::RevenueTable;
use gavel_core::{
    bits::{Allocation, Submasks},
    num::constants::Zero,
};
use num_traits::PrimInt;

/// Returns the number of `(subset, submask)` pairs one merge over `items` items visits.
///
/// Saturates at `u64::MAX`.
#[inline]
pub fn submask_visits(items: u32) -> u64 {
    3u64.saturating_pow(items)
}

/// Writes the max-plus subset convolution of `a` and `b` into `out`.
///
/// Values are expected to be non-negative and every sum `a[m] + b[u \ m]`
/// must fit `T`; instances validated by `AuctionInstance::new` guarantee both.
///
/// # Panics
///
/// Panics if the three slices differ in length or the length is not a power
/// of two addressable by an `Allocation`.
pub fn merge_into<T>(out: &mut [T], a: &[T], b: &[T])
where
    T: PrimInt,
{
    let len = a.len();
    assert!(
        len == b.len() && len == out.len(),
        "called `merge_into` with tables of different lengths: out {}, a {}, b {}",
        out.len(),
        len,
        b.len()
    );
    assert!(
        len.is_power_of_two(),
        "called `merge_into` with table length {} which is not a power of two",
        len
    );

    let Ok(full) = Allocation::try_from(len - 1) else {
        panic!(
            "called `merge_into` with table length {} beyond the allocation width",
            len
        );
    };

    for u in 0..=full {
        // m = u: every item of `u` goes to the first group.
        let mut best = a[u as usize] + b[0];
        for m in Submasks::proper(u) {
            debug_assert!(m & !u == 0, "{:#b} is not a submask of {:#b}", m, u);

            // SAFETY: `m` and `u ^ m` are submasks of `u <= full`, so both
            // are `< len`, which is the length of `a` and `b`.
            let candidate =
                unsafe { *a.get_unchecked(m as usize) + *b.get_unchecked((u ^ m) as usize) };
            if candidate > best {
                best = candidate;
            }
        }
        out[u as usize] = best;
    }
}

/// Returns the max-plus subset convolution of two revenue tables.
///
/// # Panics
///
/// Panics if the tables range over different item counts.
///
/// # Examples
///
/// ```rust
/// # use gavel_exact::{generate::generate, merge::merge};
/// let a = generate(2, 10i64, &[5, 5]);
/// let b = generate(2, 10i64, &[3, 8]);
/// assert_eq!(merge(&a, &b).full(), 13);
/// ```
pub fn merge<T>(a: &RevenueTable<T>, b: &RevenueTable<T>) -> RevenueTable<T>
where
    T: PrimInt + Zero,
{
    assert_eq!(
        a.items(),
        b.items(),
        "called `merge` with tables over {} and {} items",
        a.items(),
        b.items()
    );

    let mut out = RevenueTable::new(a.items());
    merge_into(out.as_mut_slice(), a.as_slice(), b.as_slice());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn naive_merge(a: &[i64], b: &[i64]) -> Vec<i64> {
        (0..a.len() as Allocation)
            .map(|u| {
                Submasks::new(u)
                    .map(|m| a[m as usize] + b[(u & !m) as usize])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn random_table(rng: &mut ChaCha8Rng, items: u32) -> RevenueTable<i64> {
        let bids: Vec<i64> = (0..items).map(|_| rng.random_range(0..40)).collect();
        let budget = rng.random_range(0..100);
        generate(items, budget, &bids)
    }

    #[test]
    fn test_two_bidder_example() {
        let a = generate(2, 10i64, &[5, 5]);
        let b = generate(2, 10i64, &[3, 8]);
        let merged = merge(&a, &b);
        assert_eq!(merged.as_slice(), &[0, 5, 8, 13]);
    }

    #[test]
    fn test_merge_matches_naive_enumeration() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for k in 0..=7u32 {
            let a = random_table(&mut rng, k);
            let b = random_table(&mut rng, k);
            assert_eq!(
                merge(&a, &b).as_slice(),
                naive_merge(a.as_slice(), b.as_slice()).as_slice(),
                "k = {}",
                k
            );
        }
    }

    #[test]
    fn test_merge_is_commutative() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let a = random_table(&mut rng, 6);
        let b = random_table(&mut rng, 6);
        assert_eq!(merge(&a, &b), merge(&b, &a));
    }

    #[test]
    fn test_merge_is_associative() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let a = random_table(&mut rng, 5);
        let b = random_table(&mut rng, 5);
        let c = random_table(&mut rng, 5);
        assert_eq!(merge(&merge(&a, &b), &c), merge(&a, &merge(&b, &c)));
    }

    #[test]
    fn test_merge_with_zero_table_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let a = random_table(&mut rng, 4);
        let zero = RevenueTable::<i64>::new(4);
        assert_eq!(merge(&a, &zero), a);
    }

    #[test]
    fn test_merge_dominates_both_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let a = random_table(&mut rng, 5);
        let b = random_table(&mut rng, 5);
        let merged = merge(&a, &b);
        for u in 0..merged.len() as Allocation {
            assert!(merged.get(u) >= a.get(u).max(b.get(u)));
        }
    }

    #[test]
    fn test_submask_visits() {
        assert_eq!(submask_visits(0), 1);
        assert_eq!(submask_visits(2), 9);
        assert_eq!(submask_visits(10), 59_049);
        assert_eq!(submask_visits(64), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "with tables of different lengths")]
    fn test_merge_into_rejects_length_mismatch() {
        let mut out = [0i64; 4];
        merge_into(&mut out, &[0, 1, 2, 3], &[0, 1]);
    }

    #[test]
    #[should_panic(expected = "which is not a power of two")]
    fn test_merge_into_rejects_non_power_of_two() {
        let mut out = [0i64; 3];
        merge_into(&mut out, &[0, 1, 2], &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "with tables over 2 and 3 items")]
    fn test_merge_rejects_item_mismatch() {
        let a = RevenueTable::<i64>::new(2);
        let b = RevenueTable::<i64>::new(3);
        let _ = merge(&a, &b);
    }
}
