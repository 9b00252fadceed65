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

use core::ops::Add;

/// Saturating addition by value (no references).
///
/// Clamps the result to the numeric bounds of the type instead of overflowing.
/// Counters in solver statistics use it so that a very long run never wraps.
///
/// # Examples
///
/// ```rust
/// # use gavel_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// let a: u8 = 250;
/// assert_eq!(a.saturating_add_val(10), 255); // Clamps at u8::MAX
///
/// let m: i8 = -120;
/// assert_eq!(m.saturating_add_val(-20), -128); // Clamps at i8::MIN
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

saturating_impl_binary_val!(
    SaturatingAddVal,
    saturating_add_val,
    saturating_add,
    u8,
    u16,
    u32,
    u64,
    usize,
    u128,
    i8,
    i16,
    i32,
    i64,
    isize,
    i128
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_add_val_clamps() {
        assert_eq!(u64::MAX.saturating_add_val(1), u64::MAX);
        assert_eq!(i64::MIN.saturating_add_val(-1), i64::MIN);
        assert_eq!(40u64.saturating_add_val(2), 42);
    }
}
