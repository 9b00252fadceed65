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

//! # Typed Indices
//!
//! An auction is addressed by bidder and by item, and the bid matrix is
//! stored row-major. Passing raw `usize` values around makes it easy to swap
//! the two, so both index spaces are wrapped in `TypedIndex<T>`, which is a
//! transparent `usize` tagged with a zero-sized marker type.
//!
//! The comparison and hashing impls are written by hand so that tags never
//! need to derive anything beyond [`TypedIndexTag`].
//!
//! ```rust
//! use gavel_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! struct LotTag;
//! impl TypedIndexTag for LotTag {
//!     const NAME: &'static str = "LotIndex";
//! }
//!
//! type LotIndex = TypedIndex<LotTag>;
//! let lot = LotIndex::new(3);
//! assert_eq!(lot.get(), 3);
//! assert_eq!(lot.to_string(), "LotIndex(3)");
//! assert_eq!(LotIndex::range(2).collect::<Vec<_>>(), [LotIndex::new(0), LotIndex::new(1)]);
//! ```

use std::{cmp::Ordering, fmt, hash, marker::PhantomData, ops::Range};

/// Names an index space. `NAME` is what `Debug` and `Display` print.
pub trait TypedIndexTag {
    const NAME: &'static str;
}

/// A `usize` index that belongs to the index space `T`.
#[repr(transparent)]
pub struct TypedIndex<T> {
    index: usize,
    _tag: PhantomData<fn() -> T>,
}

impl<T> TypedIndex<T> {
    /// Wraps a raw index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _tag: PhantomData,
        }
    }

    /// Returns the raw index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Iterates over the indices `0..count` in ascending order.
    #[inline]
    pub fn range(count: usize) -> TypedRange<T> {
        TypedRange {
            inner: 0..count,
            _tag: PhantomData,
        }
    }
}

impl<T> Clone for TypedIndex<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedIndex<T> {}

impl<T> PartialEq for TypedIndex<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for TypedIndex<T> {}

impl<T> PartialOrd for TypedIndex<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedIndex<T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> hash::Hash for TypedIndex<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T: TypedIndexTag> fmt::Debug for TypedIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T: TypedIndexTag> fmt::Display for TypedIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(index: TypedIndex<T>) -> Self {
        index.index
    }
}

/// Ascending iterator over the typed indices of a half-open range.
pub struct TypedRange<T> {
    inner: Range<usize>,
    _tag: PhantomData<fn() -> T>,
}

impl<T> Clone for TypedRange<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _tag: PhantomData,
        }
    }
}

impl<T: TypedIndexTag> fmt::Debug for TypedRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", T::NAME, self.inner)
    }
}

impl<T> Iterator for TypedRange<T> {
    type Item = TypedIndex<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(TypedIndex::new)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for TypedRange<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(TypedIndex::new)
    }
}

impl<T> ExactSizeIterator for TypedRange<T> {}

impl<T> std::iter::FusedIterator for TypedRange<T> {}
