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

//! Text loader for auction instances.
//!
//! Turns whitespace-delimited token streams into a validated
//! [`AuctionInstance`]. The expected layout is:
//!
//! ```raw
//! n                      # number of bidders
//! k                      # number of items
//! d_1 ... d_n            # budgets
//! b_1_1 ... b_1_k        # bids of bidder 1
//! ...
//! b_n_1 ... b_n_k        # bids of bidder n
//! ```
//!
//! Line breaks carry no meaning; only the token order does. A `#` starts a
//! comment that runs to the end of the line. Surplus tokens after the last
//! bid are ignored unless the loader is configured to reject them.
//!
//! The loader accepts any `BufRead`, file path, raw reader, or string slice,
//! so the same code path serves benchmarks, tests, and tooling.

use crate::instance::{AuctionInstance, InstanceError};
use gavel_core::{bits::MAX_ITEMS, num::ops::checked_arithmetic::CheckedAddVal};
use num_traits::{PrimInt, Signed};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    marker::PhantomData,
    path::Path,
    str::FromStr,
};

/// Upper bound on speculative preallocation driven by header values.
const MAX_PREALLOCATED_VALUES: usize = 1 << 16;

/// The error type for the instance loading process.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream ended before every expected token was read.
    #[error("unexpected end of input while parsing auction instance")]
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    #[error("parse error: {0}")]
    Parse(#[from] ParseTokenError),
    /// The header declares no bidders or a negative dimension.
    #[error("the number of bidders must be positive and the number of items non-negative")]
    InvalidDimensions,
    /// The header declares more items than the loader is configured to accept.
    #[error("instance has {items} items but the loader accepts at most {limit}")]
    ItemLimitExceeded { items: u64, limit: u32 },
    /// Tokens remained after the last bid while trailing tokens are rejected.
    #[error("unexpected tokens after the last bid")]
    TrailingTokens,
    /// The parsed data does not form a valid instance.
    #[error("invalid instance: {0}")]
    Instance(#[from] InstanceError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse token '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g. "i64").
    pub type_name: &'static str,
}

/// A configurable loader for auction instances.
///
/// # Configuration
/// * `max_items`: instances declaring more items are refused before any
///   value is read. Defaults to [`MAX_ITEMS`] and is clamped to it, since the
///   exact solver's memory grows as `2^items`.
/// * `reject_trailing_tokens`: if true, tokens after the last bid are an error.
///
/// # Examples
///
/// ```rust
/// # use gavel_model::loading::InstanceLoader;
/// let instance = InstanceLoader::<i64>::new()
///     .from_str("2 2  10 10  5 5  3 8")
///     .unwrap();
/// assert_eq!(instance.num_bidders(), 2);
/// assert_eq!(instance.bids(), &[5, 5, 3, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader<T> {
    max_items: u32,
    reject_trailing_tokens: bool,
    _marker: PhantomData<T>,
}

impl<T> Default for InstanceLoader<T> {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            reject_trailing_tokens: false,
            _marker: PhantomData,
        }
    }
}

impl<T> InstanceLoader<T>
where
    T: PrimInt + Signed + CheckedAddVal + FromStr,
{
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest item count the loader accepts.
    #[inline]
    pub fn max_items(mut self, limit: u32) -> Self {
        self.max_items = limit.min(MAX_ITEMS);
        self
    }

    /// Configures whether tokens after the last bid are rejected.
    #[inline]
    pub fn reject_trailing_tokens(mut self, yes: bool) -> Self {
        self.reject_trailing_tokens = yes;
        self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<AuctionInstance<T>, LoaderError> {
        let mut sc = Scanner::new(rdr);

        // Dimensions are read as wide integers so a narrow revenue type
        // does not limit the instance size.
        let n_val: i64 = sc.next()?;
        let k_val: i64 = sc.next()?;

        let n = usize::try_from(n_val).map_err(|_| LoaderError::InvalidDimensions)?;
        let k = u64::try_from(k_val).map_err(|_| LoaderError::InvalidDimensions)?;

        if n == 0 {
            return Err(LoaderError::InvalidDimensions);
        }

        if k > u64::from(self.max_items) {
            return Err(LoaderError::ItemLimitExceeded {
                items: k,
                limit: self.max_items,
            });
        }

        // Bounded by `max_items <= MAX_ITEMS` above.
        let num_items = k as u32;
        let k = k as usize;

        let mut budgets = Vec::with_capacity(n.min(MAX_PREALLOCATED_VALUES));
        for _ in 0..n {
            budgets.push(sc.next::<T>()?);
        }

        let num_bids = n.checked_mul(k).ok_or(LoaderError::InvalidDimensions)?;
        let mut bids = Vec::with_capacity(num_bids.min(MAX_PREALLOCATED_VALUES));
        for _ in 0..num_bids {
            bids.push(sc.next::<T>()?);
        }

        if self.reject_trailing_tokens && sc.next_token()?.is_some() {
            return Err(LoaderError::TrailingTokens);
        }

        Ok(AuctionInstance::new(n, num_items, budgets, bids)?)
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<AuctionInstance<T>, LoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<AuctionInstance<T>, LoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<AuctionInstance<T>, LoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, LoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Returns the next raw token, or `None` at end of input.
    /// Skips whitespace and comments starting with '#'.
    fn next_token(&mut self) -> Result<Option<&str>, LoaderError> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            let line = &self.buf[self.pos..];
            let content = line.split_once('#').map_or(line, |(head, _)| head);
            let trimmed = content.trim_start();

            if trimmed.is_empty() {
                // Rest of the line is whitespace or a comment.
                self.pos = self.buf.len();
                continue;
            }

            let start = self.pos + (content.len() - trimmed.len());
            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            self.pos = start + len;

            return Ok(Some(&self.buf[start..start + len]));
        }
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, LoaderError>
    where
        T: FromStr,
    {
        let token = self.next_token()?.ok_or(LoaderError::UnexpectedEof)?;
        token.parse::<T>().map_err(|_| {
            LoaderError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<T>(),
            })
        })
    }
}
