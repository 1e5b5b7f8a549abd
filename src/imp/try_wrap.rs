use std::{fmt::Debug, marker::PhantomData};

use crate::{Step, Transformer, TransformerBase};

/// A [`Transformer`] built from a fallible combining function `(acc, item) -> Result<acc, E>`.
///
/// This `struct` is created by [`try_wrap()`]. See its documentation for more.
pub struct TryWrap<F, A, E> {
    f: F,
    _marker: PhantomData<fn(A) -> Result<A, E>>,
}

/// Lifts a fallible combining function into a [`Transformer`] whose accumulator is a
/// `Result<A, E>`.
///
/// The first `Err` returned by `f` stops the reduction: the driver pulls no further
/// items and the error becomes the result. The partial accumulator is discarded.
///
/// It pairs with [`try_map()`](crate::xform::try_map), which feeds its own errors into the
/// same accumulator. [`try_transduce_with()`](crate::try_transduce_with) wires both ends up.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::identity};
///
/// let checked_sum = |acc: u8, x: u8| acc.checked_add(x).ok_or(x);
///
/// assert_eq!(transduce(identity(), try_wrap(checked_sum), Ok(0), [1, 2, 3]), Ok(6));
///
/// let mut nums = [100, 100, 100, 1].into_iter();
/// assert_eq!(nums.transduce(identity(), try_wrap(checked_sum), Ok(0)), Err(100));
/// // The overflow stopped the reduction right away.
/// assert_eq!(nums.next(), Some(1));
/// ```
#[inline]
pub const fn try_wrap<F, A, E>(f: F) -> TryWrap<F, A, E> {
    TryWrap {
        f,
        _marker: PhantomData,
    }
}

impl<F, A, E> TransformerBase for TryWrap<F, A, E> {
    type Acc = Result<A, E>;
    type Output = Result<A, E>;

    #[inline]
    fn result(self, acc: Result<A, E>) -> Result<A, E> {
        acc
    }
}

impl<F, A, E, T> Transformer<T> for TryWrap<F, A, E>
where
    F: FnMut(A, T) -> Result<A, E>,
{
    #[inline]
    fn step(&mut self, acc: Result<A, E>, item: T) -> Step<Result<A, E>> {
        match acc {
            Ok(acc) => match (self.f)(acc, item) {
                Ok(acc) => Step::Continue(Ok(acc)),
                Err(e) => Step::Stop(Err(e)),
            },
            // Already failed. Should have been stopped.
            Err(e) => Step::Stop(Err(e)),
        }
    }
}

impl<F: Clone, A, E> Clone for TryWrap<F, A, E> {
    fn clone(&self) -> Self {
        try_wrap(self.f.clone())
    }
}

impl<F, A, E> Debug for TryWrap<F, A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryWrap").finish_non_exhaustive()
    }
}
