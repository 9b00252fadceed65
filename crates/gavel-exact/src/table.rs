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

//! Revenue tables and their storage.
//!
//! A revenue table over `k` items holds one value per subset of items,
//! indexed by the subset's bitmask, so it always has exactly `2^k` entries.
//! `RevenueTable` is the owned form handed to callers. `TableArena` keeps
//! the three working buffers of a fold (accumulator, scratch, bidder) alive
//! across solves so repeated solving does not reallocate.

use gavel_core::{
    bits::{self, Allocation, MAX_ITEMS},
    num::constants::Zero,
};

#[inline]
fn checked_table_len(items: u32) -> usize {
    assert!(
        items <= MAX_ITEMS,
        "called `table_len` with {} items, but allocations address at most {}",
        items,
        MAX_ITEMS
    );

    match bits::table_len(items) {
        Some(len) => len,
        None => panic!(
            "called `table_len` with {} items, but a table of that size is not addressable",
            items
        ),
    }
}

/// An owned, dense revenue table indexed by item subsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueTable<T> {
    items: u32,
    values: Vec<T>,
}

impl<T> RevenueTable<T>
where
    T: Copy + Zero,
{
    /// Creates a zero-filled table over `items` items.
    ///
    /// # Panics
    ///
    /// Panics if `items > MAX_ITEMS` or the table is not addressable.
    #[inline]
    pub fn new(items: u32) -> Self {
        let len = checked_table_len(items);
        Self {
            items,
            values: vec![T::ZERO; len],
        }
    }

    /// Wraps an existing vector of `2^items` values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not `2^items`.
    #[inline]
    pub fn from_vec(items: u32, values: Vec<T>) -> Self {
        let len = checked_table_len(items);
        assert_eq!(
            values.len(),
            len,
            "called `RevenueTable::from_vec` with {} values for {} items, expected {}",
            values.len(),
            items,
            len
        );

        Self { items, values }
    }
}

impl<T> RevenueTable<T>
where
    T: Copy,
{
    /// Returns the number of items the table ranges over.
    #[inline]
    pub fn items(&self) -> u32 {
        self.items
    }

    /// Returns the number of entries, `2^items`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: the empty allocation has an entry in every table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the revenue of the given allocation.
    ///
    /// # Panics
    ///
    /// Panics if `mask` contains an item outside the table.
    #[inline]
    pub fn get(&self, mask: Allocation) -> T {
        let index = mask as usize;
        assert!(
            index < self.values.len(),
            "called `RevenueTable::get` with mask {:#b} outside a table over {} items",
            mask,
            self.items
        );

        self.values[index]
    }

    /// Returns the revenue of the allocation that contains every item.
    #[inline]
    pub fn full(&self) -> T {
        self.get(bits::full_mask(self.items))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

/// The three working buffers of a fold.
///
/// - `accumulator`: the merged table of all bidders folded so far.
/// - `scratch`: the merge target; swapped with the accumulator after each merge.
/// - `bidder`: the table of the bidder currently being folded in.
///
/// All buffers have `2^items` entries. `ensure_items` resizes them for a new
/// item count; capacity only ever grows, so an arena sized for the largest
/// instance serves every smaller one without reallocating.
#[derive(Debug, Clone)]
pub struct TableArena<T> {
    items: u32,
    accumulator: Vec<T>,
    scratch: Vec<T>,
    bidder: Vec<T>,
}

impl<T> Default for TableArena<T>
where
    T: Copy + Zero,
{
    fn default() -> Self {
        Self::preallocated(0)
    }
}

impl<T> TableArena<T>
where
    T: Copy + Zero,
{
    /// Creates an arena with buffers sized for `items` items.
    ///
    /// # Panics
    ///
    /// Panics if `items > MAX_ITEMS` or the tables are not addressable.
    pub fn preallocated(items: u32) -> Self {
        let len = checked_table_len(items);
        Self {
            items,
            accumulator: vec![T::ZERO; len],
            scratch: vec![T::ZERO; len],
            bidder: vec![T::ZERO; len],
        }
    }

    /// Resizes the buffers to `2^items` entries.
    ///
    /// # Panics
    ///
    /// Panics if `items > MAX_ITEMS` or the tables are not addressable.
    pub fn ensure_items(&mut self, items: u32) {
        let len = checked_table_len(items);
        self.accumulator.resize(len, T::ZERO);
        self.scratch.resize(len, T::ZERO);
        self.bidder.resize(len, T::ZERO);
        self.items = items;
    }

    /// Returns the number of items the buffers are currently sized for.
    #[inline]
    pub fn items(&self) -> u32 {
        self.items
    }

    /// Returns the number of entries per buffer.
    #[inline]
    pub fn table_len(&self) -> usize {
        self.accumulator.len()
    }

    /// Returns the memory reserved by the three buffers, in bytes.
    #[inline]
    pub fn memory_bytes(&self) -> usize {
        (self.accumulator.capacity() + self.scratch.capacity() + self.bidder.capacity())
            * std::mem::size_of::<T>()
    }

    #[inline]
    pub fn accumulator(&self) -> &[T] {
        &self.accumulator
    }

    #[inline]
    pub fn accumulator_mut(&mut self) -> &mut [T] {
        &mut self.accumulator
    }

    /// Returns `(accumulator, scratch, bidder)` as disjoint borrows.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [T], &mut [T], &mut [T]) {
        (&mut self.accumulator, &mut self.scratch, &mut self.bidder)
    }

    /// Makes the scratch buffer the new accumulator.
    #[inline]
    pub fn swap_accumulator(&mut self) {
        std::mem::swap(&mut self.accumulator, &mut self.scratch);
    }

    /// Copies the accumulator into an owned table.
    pub fn to_table(&self) -> RevenueTable<T> {
        RevenueTable::from_vec(self.items, self.accumulator.clone())
    }
}
