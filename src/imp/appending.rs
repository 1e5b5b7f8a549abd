use std::{fmt::Debug, marker::PhantomData};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::{Error, Step, Transformer, TransformerBase};

/// A terminal [`Transformer`] that pushes every item into a [`Vec`].
///
/// Unlike [`wrap(append)`](crate::append), it knows its own starting value:
/// [`init()`](TransformerBase::init) returns an empty `Vec`.
///
/// This `struct` is created by [`appending()`]. See its documentation for more.
pub struct Appending<T> {
    _marker: PhantomData<fn(T)>,
}

/// Creates a terminal [`Transformer`] collecting items into a [`Vec`].
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::map};
///
/// let out = transduce_init(map(|s: &str| s.len()), appending(), ["a", "bb", "ccc"]);
/// assert_eq!(out, Ok(vec![1, 2, 3]));
/// ```
#[inline]
pub const fn appending<T>() -> Appending<T> {
    Appending {
        _marker: PhantomData,
    }
}

impl<T> TransformerBase for Appending<T> {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    #[inline]
    fn init(&mut self) -> Result<Vec<T>, Error> {
        Ok(Vec::new())
    }

    #[inline]
    fn result(self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

impl<T> Transformer<T> for Appending<T> {
    #[inline]
    fn step(&mut self, mut acc: Vec<T>, item: T) -> Step<Vec<T>> {
        acc.push(item);
        Step::Continue(acc)
    }
}

impl<T> Clone for Appending<T> {
    fn clone(&self) -> Self {
        appending()
    }
}

impl<T> Default for Appending<T> {
    fn default() -> Self {
        appending()
    }
}

impl<T> Debug for Appending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Appending")
    }
}
