//! Plain combining functions, ready to be [`wrap`](crate::wrap)ped as terminal steps.

use std::ops::{Add, Mul};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Pushes `item` to the end of `acc`.
///
/// # Examples
///
/// ```
/// use better_transduce::prelude::*;
///
/// assert_eq!(reduce_with(append, vec![1], [2, 3, 4]), [1, 2, 3, 4]);
/// ```
#[cfg(feature = "alloc")]
#[inline]
pub fn append<T>(mut acc: Vec<T>, item: T) -> Vec<T> {
    acc.push(item);
    acc
}

/// Adds `item` to `acc`.
///
/// ```
/// use better_transduce::prelude::*;
///
/// assert_eq!(reduce_with(sum, 1, [2, 3, 4]), 10);
/// ```
#[inline]
pub fn sum<N: Add<Output = N>>(acc: N, item: N) -> N {
    acc + item
}

/// Multiplies `acc` by `item`.
#[inline]
pub fn product<N: Mul<Output = N>>(acc: N, item: N) -> N {
    acc * item
}
