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

use crate::index::{BidderIndex, BidderIndexTag, ItemIndex};
use gavel_core::{
    bits::{self, Allocation, MAX_ITEMS},
    num::ops::checked_arithmetic::CheckedAddVal,
    utils::index::TypedRange,
};
use num_traits::{PrimInt, Signed};

#[inline(always)]
fn flatten_index(num_items: usize, bidder_index: BidderIndex, item_index: ItemIndex) -> usize {
    bidder_index.get() * num_items + item_index.get()
}

/// The reasons an auction instance can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    /// The auction has no bidders, so there is no revenue table to fold from.
    #[error("auction must have at least one bidder")]
    NoBidders,
    /// The item count exceeds the width of an allocation bitmask.
    #[error("auction has {items} items but allocations can address at most {max}")]
    TooManyItems { items: usize, max: u32 },
    /// A revenue table over the power set of items cannot be addressed on this target.
    #[error("a revenue table over {items} items does not fit the address space")]
    TableTooLarge { items: u32 },
    /// The number of budgets differs from the number of bidders.
    #[error("expected {expected} budgets but found {found}")]
    BudgetCountMismatch { expected: usize, found: usize },
    /// The flattened bid matrix does not have `bidders * items` entries.
    #[error("expected {expected} bids but found {found}")]
    BidCountMismatch { expected: usize, found: usize },
    /// A bid row has a different length than the first row.
    #[error("bidder {bidder} has {found} bids but {expected} were expected")]
    RaggedBidRow {
        bidder: BidderIndex,
        expected: usize,
        found: usize,
    },
    /// A bidder declared a negative budget.
    #[error("bidder {bidder} has a negative budget")]
    NegativeBudget { bidder: BidderIndex },
    /// A bidder placed a negative bid.
    #[error("bidder {bidder} has a negative bid on item {item}")]
    NegativeBid { bidder: BidderIndex, item: ItemIndex },
    /// The sum of all bids does not fit the revenue type, so merged revenues could overflow.
    #[error("the sum of all bids overflows the revenue type")]
    RevenueOverflow,
}

/// An immutable, validated instance of the auction problem with budget constraints.
///
/// - `budgets[bidder]`: the budget cap of each bidder.
/// - `bids[bidder * num_items + item]`: the bid of each bidder on each item.
///
/// Every accepted instance satisfies the solver preconditions: at least one
/// bidder, at most [`MAX_ITEMS`] items, a power-set table that fits the
/// address space, non-negative values, and a total bid sum that fits `T`.
/// Since every entry of every revenue table is bounded by that sum, no
/// solver arithmetic on an accepted instance can overflow.
///
/// Construction:
/// - `AuctionInstance::new` from flat vectors,
/// - `AuctionInstance::from_rows` from one bid vector per bidder,
/// - `AuctionInstanceBuilder::build`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuctionInstance<T> {
    num_items: u32,
    budgets: Vec<T>, // len = num_bidders
    bids: Vec<T>,    // len = num_bidders * num_items
    bid_sum: T,
}

impl<T> AuctionInstance<T>
where
    T: PrimInt + Signed + CheckedAddVal,
{
    /// Creates a validated instance from a budget vector and a row-major bid matrix.
    ///
    /// # Errors
    ///
    /// Returns an [`InstanceError`] describing the first violated precondition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gavel_model::instance::AuctionInstance;
    /// let instance = AuctionInstance::<i64>::new(2, 2, vec![10, 10], vec![5, 5, 3, 8]).unwrap();
    /// assert_eq!(instance.num_bidders(), 2);
    /// assert_eq!(instance.num_items(), 2);
    /// ```
    pub fn new(
        num_bidders: usize,
        num_items: u32,
        budgets: Vec<T>,
        bids: Vec<T>,
    ) -> Result<Self, InstanceError> {
        if num_bidders == 0 {
            return Err(InstanceError::NoBidders);
        }

        if num_items > MAX_ITEMS {
            return Err(InstanceError::TooManyItems {
                items: num_items as usize,
                max: MAX_ITEMS,
            });
        }

        if bits::table_len(num_items).is_none() {
            return Err(InstanceError::TableTooLarge { items: num_items });
        }

        if budgets.len() != num_bidders {
            return Err(InstanceError::BudgetCountMismatch {
                expected: num_bidders,
                found: budgets.len(),
            });
        }

        let expected_bids = num_bidders.saturating_mul(num_items as usize);
        if bids.len() != expected_bids {
            return Err(InstanceError::BidCountMismatch {
                expected: expected_bids,
                found: bids.len(),
            });
        }

        if let Some(bidder) = budgets.iter().position(|&d| d < T::zero()) {
            return Err(InstanceError::NegativeBudget {
                bidder: BidderIndex::new(bidder),
            });
        }

        if let Some(flat) = bids.iter().position(|&b| b < T::zero()) {
            let k = num_items as usize;
            return Err(InstanceError::NegativeBid {
                bidder: BidderIndex::new(flat / k),
                item: ItemIndex::new(flat % k),
            });
        }

        let bid_sum = bids
            .iter()
            .try_fold(T::zero(), |acc, &b| acc.checked_add_val(b))
            .ok_or(InstanceError::RevenueOverflow)?;

        Ok(Self {
            num_items,
            budgets,
            bids,
            bid_sum,
        })
    }

    /// Creates a validated instance from one bid vector per bidder.
    ///
    /// The item count is taken from the first row; every other row must have
    /// the same length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gavel_model::instance::AuctionInstance;
    /// let instance = AuctionInstance::<i64>::from_rows(vec![7], vec![vec![3, 4, 5]]).unwrap();
    /// assert_eq!(instance.num_items(), 3);
    /// ```
    pub fn from_rows(budgets: Vec<T>, rows: Vec<Vec<T>>) -> Result<Self, InstanceError> {
        let num_bidders = rows.len();
        let row_len = rows.first().map_or(0, Vec::len);

        if let Some((bidder, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != row_len) {
            return Err(InstanceError::RaggedBidRow {
                bidder: BidderIndex::new(bidder),
                expected: row_len,
                found: row.len(),
            });
        }

        let num_items = u32::try_from(row_len)
            .ok()
            .filter(|&k| k <= MAX_ITEMS)
            .ok_or(InstanceError::TooManyItems {
                items: row_len,
                max: MAX_ITEMS,
            })?;

        let bids = rows.into_iter().flatten().collect();
        Self::new(num_bidders, num_items, budgets, bids)
    }
}

impl<T> AuctionInstance<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of bidders.
    #[inline]
    pub fn num_bidders(&self) -> usize {
        self.budgets.len()
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> u32 {
        self.num_items
    }

    /// Returns the allocation that contains every item.
    #[inline]
    pub fn full_mask(&self) -> Allocation {
        bits::full_mask(self.num_items)
    }

    /// Returns the number of entries of a revenue table over this instance's items.
    #[inline]
    pub fn table_len(&self) -> usize {
        // Checked during validation.
        1usize << self.num_items
    }

    /// Returns a slice of all budgets.
    #[inline]
    pub fn budgets(&self) -> &[T] {
        &self.budgets
    }

    /// Returns the flattened, row-major bid matrix.
    #[inline]
    pub fn bids(&self) -> &[T] {
        &self.bids
    }

    /// Returns the budget cap of the specified bidder.
    ///
    /// # Panics
    ///
    /// Panics if `bidder_index` is not in `0..num_bidders()`.
    #[inline]
    pub fn bidder_budget(&self, bidder_index: BidderIndex) -> T {
        let index = bidder_index.get();
        debug_assert!(
            index < self.num_bidders(),
            "called `AuctionInstance::bidder_budget` with bidder index out of bounds: the len is {} but the index is {}",
            self.num_bidders(),
            index
        );

        self.budgets[index]
    }

    /// Returns the bids of the specified bidder, indexed by item.
    ///
    /// # Panics
    ///
    /// Panics if `bidder_index` is not in `0..num_bidders()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gavel_model::{index::BidderIndex, instance::AuctionInstance};
    /// let instance = AuctionInstance::<i64>::new(2, 2, vec![10, 10], vec![5, 5, 3, 8]).unwrap();
    /// assert_eq!(instance.bidder_bids(BidderIndex::new(1)), &[3, 8]);
    /// ```
    #[inline]
    pub fn bidder_bids(&self, bidder_index: BidderIndex) -> &[T] {
        let index = bidder_index.get();
        debug_assert!(
            index < self.num_bidders(),
            "called `AuctionInstance::bidder_bids` with bidder index out of bounds: the len is {} but the index is {}",
            self.num_bidders(),
            index
        );

        let k = self.num_items as usize;
        &self.bids[index * k..(index + 1) * k]
    }

    /// Returns the bid of the specified bidder on the specified item.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn bid(&self, bidder_index: BidderIndex, item_index: ItemIndex) -> T {
        debug_assert!(
            item_index.get() < self.num_items as usize,
            "called `AuctionInstance::bid` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            item_index.get()
        );

        self.bids[flatten_index(self.num_items as usize, bidder_index, item_index)]
    }

    /// Returns an iterator over all bidder indices.
    #[inline]
    pub fn bidders(&self) -> TypedRange<BidderIndexTag> {
        BidderIndex::range(self.num_bidders())
    }

    /// Returns the sum of all bids. Every revenue the instance admits is bounded by it.
    #[inline]
    pub fn bid_sum(&self) -> T {
        self.bid_sum
    }

    /// Returns the sum of all budgets, saturating at `T::max_value()`.
    ///
    /// No allocation can earn more than this amount.
    pub fn budget_sum(&self) -> T {
        self.budgets
            .iter()
            .fold(T::zero(), |acc, &d| acc.saturating_add(d))
    }
}

impl<T> std::fmt::Display for AuctionInstance<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AuctionInstance(bidders: {}, items: {})",
            self.num_bidders(),
            self.num_items
        )
    }
}

/// A mutable builder for [`AuctionInstance`].
///
/// Starts with every budget and bid set to zero; `build` runs the full
/// instance validation.
///
/// # Examples
///
/// ```rust
/// # use gavel_model::{index::{BidderIndex, ItemIndex}, instance::AuctionInstanceBuilder};
/// let mut builder = AuctionInstanceBuilder::<i64>::new(2, 2);
/// builder
///     .set_bidder_budget(BidderIndex::new(0), 10)
///     .set_bidder_bids(BidderIndex::new(0), &[5, 5])
///     .set_bidder_budget(BidderIndex::new(1), 10)
///     .set_bid(BidderIndex::new(1), ItemIndex::new(1), 8);
///
/// let instance = builder.build().unwrap();
/// assert_eq!(instance.bids(), &[5, 5, 0, 8]);
/// ```
#[derive(Clone, Debug)]
pub struct AuctionInstanceBuilder<T> {
    num_items: u32,
    budgets: Vec<T>,
    bids: Vec<T>,
}

impl<T> AuctionInstanceBuilder<T>
where
    T: PrimInt + Signed + CheckedAddVal,
{
    /// Creates a builder for `num_bidders` bidders and `num_items` items.
    pub fn new(num_bidders: usize, num_items: u32) -> Self {
        Self {
            num_items,
            budgets: vec![T::zero(); num_bidders],
            bids: vec![T::zero(); num_bidders * num_items as usize],
        }
    }

    /// Returns the number of bidders.
    #[inline]
    pub fn num_bidders(&self) -> usize {
        self.budgets.len()
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> u32 {
        self.num_items
    }

    /// Sets the budget cap of the specified bidder.
    ///
    /// # Panics
    ///
    /// Panics if `bidder_index` is not in `0..num_bidders()`.
    #[inline]
    pub fn set_bidder_budget(&mut self, bidder_index: BidderIndex, budget: T) -> &mut Self {
        self.budgets[bidder_index.get()] = budget;
        self
    }

    /// Sets the bid of the specified bidder on the specified item.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn set_bid(&mut self, bidder_index: BidderIndex, item_index: ItemIndex, bid: T) -> &mut Self {
        assert!(
            item_index.get() < self.num_items as usize,
            "called `AuctionInstanceBuilder::set_bid` with item index out of bounds: the len is {} but the index is {}",
            self.num_items,
            item_index.get()
        );

        let flat_index = flatten_index(self.num_items as usize, bidder_index, item_index);
        self.bids[flat_index] = bid;
        self
    }

    /// Sets all bids of the specified bidder at once.
    ///
    /// # Panics
    ///
    /// Panics if `bids.len() != num_items()` or `bidder_index` is out of bounds.
    pub fn set_bidder_bids(&mut self, bidder_index: BidderIndex, bids: &[T]) -> &mut Self {
        let k = self.num_items as usize;
        assert_eq!(
            bids.len(),
            k,
            "called `AuctionInstanceBuilder::set_bidder_bids` with {} bids for {} items",
            bids.len(),
            k
        );

        let start = bidder_index.get() * k;
        self.bids[start..start + k].copy_from_slice(bids);
        self
    }

    /// Validates the collected data and builds the instance.
    ///
    /// # Errors
    ///
    /// See [`AuctionInstance::new`].
    pub fn build(self) -> Result<AuctionInstance<T>, InstanceError> {
        AuctionInstance::new(self.budgets.len(), self.num_items, self.budgets, self.bids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(i: usize) -> BidderIndex {
        BidderIndex::new(i)
    }
    fn it(j: usize) -> ItemIndex {
        ItemIndex::new(j)
    }

    #[test]
    fn test_flatten_index_row_major() {
        assert_eq!(flatten_index(3, b(0), it(2)), 2);
        assert_eq!(flatten_index(3, b(2), it(1)), 7);
    }

    #[test]
    fn test_new_accessors() {
        let inst = AuctionInstance::<i64>::new(2, 3, vec![10, 4], vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(inst.num_bidders(), 2);
        assert_eq!(inst.num_items(), 3);
        assert_eq!(inst.full_mask(), 0b111);
        assert_eq!(inst.table_len(), 8);
        assert_eq!(inst.bidder_budget(b(1)), 4);
        assert_eq!(inst.bidder_bids(b(1)), &[4, 5, 6]);
        assert_eq!(inst.bid(b(0), it(2)), 3);
        assert_eq!(inst.bid_sum(), 21);
        assert_eq!(inst.budget_sum(), 14);
        assert_eq!(inst.bidders().collect::<Vec<_>>(), vec![b(0), b(1)]);
    }

    #[test]
    fn test_zero_items_is_accepted() {
        let inst = AuctionInstance::<i64>::new(3, 0, vec![1, 2, 3], vec![]).unwrap();
        assert_eq!(inst.full_mask(), 0);
        assert_eq!(inst.table_len(), 1);
        assert!(inst.bidder_bids(b(2)).is_empty());
    }

    #[test]
    fn test_rejects_no_bidders() {
        let res = AuctionInstance::<i64>::new(0, 2, vec![], vec![]);
        assert_eq!(res, Err(InstanceError::NoBidders));
    }

    #[test]
    fn test_rejects_too_many_items() {
        let res = AuctionInstance::<i64>::new(1, 33, vec![1], vec![0; 33]);
        assert_eq!(
            res,
            Err(InstanceError::TooManyItems {
                items: 33,
                max: MAX_ITEMS
            })
        );
    }

    #[test]
    fn test_rejects_dimension_mismatches() {
        assert_eq!(
            AuctionInstance::<i64>::new(2, 1, vec![1], vec![1, 2]),
            Err(InstanceError::BudgetCountMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            AuctionInstance::<i64>::new(2, 2, vec![1, 1], vec![1, 2, 3]),
            Err(InstanceError::BidCountMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_rejects_negative_values() {
        assert_eq!(
            AuctionInstance::<i64>::new(2, 1, vec![1, -1], vec![1, 2]),
            Err(InstanceError::NegativeBudget { bidder: b(1) })
        );
        assert_eq!(
            AuctionInstance::<i64>::new(2, 2, vec![1, 1], vec![1, 2, 3, -4]),
            Err(InstanceError::NegativeBid {
                bidder: b(1),
                item: it(1)
            })
        );
    }

    #[test]
    fn test_rejects_revenue_overflow() {
        let res = AuctionInstance::<i8>::new(2, 1, vec![100, 100], vec![100, 100]);
        assert_eq!(res, Err(InstanceError::RevenueOverflow));

        // Large budgets alone are fine: the cap never raises revenue above the bids.
        let ok = AuctionInstance::<i8>::new(2, 1, vec![i8::MAX, i8::MAX], vec![60, 60]);
        assert!(ok.is_ok());
        assert_eq!(ok.unwrap().budget_sum(), i8::MAX);
    }

    #[test]
    fn test_from_rows() {
        let inst =
            AuctionInstance::<i64>::from_rows(vec![10, 10], vec![vec![5, 5], vec![3, 8]]).unwrap();
        assert_eq!(inst.bids(), &[5, 5, 3, 8]);

        let ragged = AuctionInstance::<i64>::from_rows(vec![1, 1], vec![vec![1, 2], vec![3]]);
        assert_eq!(
            ragged,
            Err(InstanceError::RaggedBidRow {
                bidder: b(1),
                expected: 2,
                found: 1
            })
        );

        let empty = AuctionInstance::<i64>::from_rows(vec![], vec![]);
        assert_eq!(empty, Err(InstanceError::NoBidders));
    }

    #[test]
    fn test_builder_defaults_and_setters() {
        let mut bldr = AuctionInstanceBuilder::<i64>::new(2, 3);
        assert_eq!(bldr.num_bidders(), 2);
        assert_eq!(bldr.num_items(), 3);

        bldr.set_bidder_budget(b(0), 9)
            .set_bid(b(1), it(2), 4)
            .set_bidder_bids(b(0), &[1, 2, 3]);

        let inst = bldr.build().unwrap();
        assert_eq!(inst.budgets(), &[9, 0]);
        assert_eq!(inst.bids(), &[1, 2, 3, 0, 0, 4]);
    }

    #[test]
    #[should_panic(expected = "with 2 bids for 3 items")]
    fn test_builder_rejects_short_rows() {
        let mut bldr = AuctionInstanceBuilder::<i64>::new(1, 3);
        bldr.set_bidder_bids(b(0), &[1, 2]);
    }

    #[test]
    fn test_error_messages() {
        let err = InstanceError::NegativeBid {
            bidder: b(1),
            item: it(0),
        };
        assert_eq!(
            err.to_string(),
            "bidder BidderIndex(1) has a negative bid on item ItemIndex(0)"
        );
    }

    #[test]
    fn test_display() {
        let inst = AuctionInstance::<i64>::new(1, 2, vec![1], vec![1, 1]).unwrap();
        assert_eq!(format!("{}", inst), "AuctionInstance(bidders: 1, items: 2)");
    }
}
