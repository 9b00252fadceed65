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

//! # Bit Enumeration Primitives
//!
//! Item subsets are encoded as a fixed-width word: bit `j` of an
//! [`Allocation`] is set when item `j` belongs to the subset. The power set of
//! `k` items is then simply the integer range `0..2^k`, and a dense revenue
//! table can be indexed by the subset itself.
//!
//! Two lazy, allocation-free sequences are built on top of a single
//! count-trailing-zeros scan:
//!
//! - [`SetBits`] yields the positions of the set bits of a word in ascending
//!   order (the items contained in a subset).
//! - [`Submasks`] yields every submask of a mask, starting at the mask itself
//!   and ending at `0`, using the `m = (m - 1) & mask` step.
//!
//! Both iterators are `Copy` and allocation-free. `SetBits` drives the
//! per-bidder revenue tables and `Submasks` the subset merge, whose inner
//! loop dominates the running time of the solver.
//!
//! ## Usage
//!
//! ```rust
//! use gavel_core::bits::{SetBits, Submasks};
//!
//! let items: Vec<u32> = SetBits::new(0b1010_0101).collect();
//! assert_eq!(items, vec![0, 2, 5, 7]);
//!
//! let submasks: Vec<u32> = Submasks::new(0b101).collect();
//! assert_eq!(submasks, vec![0b101, 0b100, 0b001, 0b000]);
//! ```

use std::iter::FusedIterator;

/// A subset of items, encoded as a bitmask over the item indices.
pub type Allocation = u32;

/// The maximum number of items an [`Allocation`] can address.
pub const MAX_ITEMS: u32 = Allocation::BITS;

/// Returns the allocation containing all `items` items, i.e. `2^items - 1`.
///
/// Computed without shifting past the word width, so `items == 32` yields
/// `u32::MAX` and `items == 0` yields the empty allocation.
///
/// # Panics
///
/// Panics in debug builds if `items > MAX_ITEMS`.
///
/// # Examples
///
/// ```rust
/// # use gavel_core::bits::full_mask;
/// assert_eq!(full_mask(0), 0);
/// assert_eq!(full_mask(3), 0b111);
/// assert_eq!(full_mask(32), u32::MAX);
/// ```
#[inline(always)]
pub fn full_mask(items: u32) -> Allocation {
    debug_assert!(
        items <= MAX_ITEMS,
        "called `full_mask` with too many items: the maximum is {} but the count is {}",
        MAX_ITEMS,
        items
    );

    if items == 0 {
        0
    } else {
        Allocation::MAX >> (MAX_ITEMS - items)
    }
}

/// Returns the number of entries of a dense table over the power set of
/// `items` items, or `None` if such a table cannot be addressed on this target.
///
/// # Examples
///
/// ```rust
/// # use gavel_core::bits::table_len;
/// assert_eq!(table_len(0), Some(1));
/// assert_eq!(table_len(10), Some(1024));
/// assert_eq!(table_len(33), None);
/// ```
#[inline]
pub fn table_len(items: u32) -> Option<usize> {
    if items > MAX_ITEMS {
        return None;
    }
    1usize.checked_shl(items)
}

/// Determines the position of the first set bit in `word` at or after
/// position `from`.
///
/// Returns `None` if no set bit remains or `from` lies beyond the word.
///
/// # Examples
///
/// ```rust
/// # use gavel_core::bits::next_set_bit;
/// assert_eq!(next_set_bit(0b1001_0000, 0), Some(4));
/// assert_eq!(next_set_bit(0b1001_0000, 5), Some(7));
/// assert_eq!(next_set_bit(0b1001_0000, 8), None);
/// assert_eq!(next_set_bit(u32::MAX, 32), None);
/// ```
#[inline(always)]
pub fn next_set_bit(word: Allocation, from: u32) -> Option<u32> {
    let masked = word & Allocation::MAX.checked_shl(from)?;
    if masked != 0 {
        Some(masked.trailing_zeros())
    } else {
        None
    }
}

/// An iterator over the positions of the set bits of a word, in ascending order.
///
/// # Examples
///
/// ```rust
/// # use gavel_core::bits::SetBits;
/// let mut bits = SetBits::new(0b110);
/// assert_eq!(bits.len(), 2);
/// assert_eq!(bits.next(), Some(1));
/// assert_eq!(bits.next(), Some(2));
/// assert_eq!(bits.next(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits {
    word: Allocation,
    cursor: u32,
}

impl SetBits {
    /// Creates an iterator over the set bits of `word`.
    #[inline(always)]
    pub fn new(word: Allocation) -> Self {
        Self { word, cursor: 0 }
    }

    /// Returns the word being scanned.
    #[inline]
    pub fn word(&self) -> Allocation {
        self.word
    }
}

impl Iterator for SetBits {
    type Item = u32;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let bit = next_set_bit(self.word, self.cursor)?;
        self.cursor = bit + 1;
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match Allocation::MAX.checked_shl(self.cursor) {
            Some(window) => (self.word & window).count_ones() as usize,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetBits {}

impl FusedIterator for SetBits {}

/// An iterator over every submask of a mask.
///
/// The sequence starts at the mask itself and walks downwards with
/// `m = (m - 1) & mask` until it reaches `0`, which is yielded last. A mask
/// with `p` set bits produces exactly `2^p` submasks, each exactly once.
///
/// # Examples
///
/// ```rust
/// # use gavel_core::bits::Submasks;
/// let all: Vec<u32> = Submasks::new(0b110).collect();
/// assert_eq!(all, vec![0b110, 0b100, 0b010, 0b000]);
///
/// let proper: Vec<u32> = Submasks::proper(0b110).collect();
/// assert_eq!(proper, vec![0b100, 0b010, 0b000]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submasks {
    mask: Allocation,
    next: Option<Allocation>,
}

impl Submasks {
    /// Creates an iterator over all submasks of `mask`, including `mask` and `0`.
    #[inline(always)]
    pub fn new(mask: Allocation) -> Self {
        Self {
            mask,
            next: Some(mask),
        }
    }

    /// Creates an iterator over the proper submasks of `mask`: every submask
    /// except `mask` itself. The empty mask has no proper submasks.
    #[inline(always)]
    pub fn proper(mask: Allocation) -> Self {
        let next = if mask == 0 {
            None
        } else {
            Some((mask - 1) & mask)
        };
        Self { mask, next }
    }

    /// Returns the mask whose submasks are enumerated.
    #[inline]
    pub fn mask(&self) -> Allocation {
        self.mask
    }
}

impl Iterator for Submasks {
    type Item = Allocation;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(_) => (1, 1usize.checked_shl(self.mask.count_ones())),
        }
    }
}

impl FusedIterator for Submasks {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_full_mask_bounds() {
        assert_eq!(full_mask(0), 0);
        assert_eq!(full_mask(1), 0b1);
        assert_eq!(full_mask(2), 0b11);
        assert_eq!(full_mask(31), u32::MAX >> 1);
        assert_eq!(full_mask(32), u32::MAX);
    }

    #[test]
    fn test_table_len() {
        assert_eq!(table_len(0), Some(1));
        assert_eq!(table_len(1), Some(2));
        assert_eq!(table_len(20), Some(1 << 20));
        assert_eq!(table_len(33), None);
    }

    #[test]
    fn test_next_set_bit_scans_forward() {
        let word = 0b1000_0000_0000_0000_0000_0000_0000_0101u32;
        assert_eq!(next_set_bit(word, 0), Some(0));
        assert_eq!(next_set_bit(word, 1), Some(2));
        assert_eq!(next_set_bit(word, 3), Some(31));
        assert_eq!(next_set_bit(word, 31), Some(31));
        assert_eq!(next_set_bit(word, 32), None);
        assert_eq!(next_set_bit(0, 0), None);
    }

    #[test]
    fn test_set_bits_matches_naive_scan() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..256 {
            let word: u32 = rng.random();
            let naive: Vec<u32> = (0..32).filter(|j| word & (1 << j) != 0).collect();
            let bits = SetBits::new(word);
            assert_eq!(bits.len(), naive.len());
            assert_eq!(bits.collect::<Vec<_>>(), naive);
        }
    }

    #[test]
    fn test_set_bits_high_bit_terminates() {
        let mut bits = SetBits::new(1 << 31);
        assert_eq!(bits.next(), Some(31));
        assert_eq!(bits.len(), 0);
        assert_eq!(bits.next(), None);
        assert_eq!(bits.next(), None);
    }

    #[test]
    fn test_submasks_of_empty_mask() {
        assert_eq!(Submasks::new(0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(Submasks::proper(0).count(), 0);
    }

    #[test]
    fn test_submasks_order_and_bounds() {
        let mask = 0b1011_0100;
        let all: Vec<u32> = Submasks::new(mask).collect();
        assert_eq!(all.first(), Some(&mask));
        assert_eq!(all.last(), Some(&0));
        assert!(all.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_submasks_are_exactly_the_subsets() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..64 {
            let mask: u32 = rng.random_range(0..(1 << 12));
            let expected: HashSet<u32> = (0..=mask).filter(|m| m & !mask == 0).collect();
            let actual: Vec<u32> = Submasks::new(mask).collect();

            assert_eq!(actual.len(), 1 << mask.count_ones());
            assert_eq!(actual.iter().copied().collect::<HashSet<_>>(), expected);
        }
    }

    #[test]
    fn test_proper_submasks_skip_the_mask() {
        let mask = 0b111;
        let proper: Vec<u32> = Submasks::proper(mask).collect();
        assert_eq!(proper.len(), 7);
        assert!(!proper.contains(&mask));
        assert_eq!(proper.last(), Some(&0));
    }

    #[test]
    fn test_submasks_of_full_word_start_correctly() {
        let mut it = Submasks::new(u32::MAX);
        assert_eq!(it.next(), Some(u32::MAX));
        assert_eq!(it.next(), Some(u32::MAX - 1));
        assert_eq!(it.next(), Some(u32::MAX - 2));
    }
}
