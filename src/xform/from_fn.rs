use std::fmt::Debug;

use crate::Transducer;

/// A [`Transducer`] backed by a closure that builds the stage.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Creates a [`Transducer`] from a closure that turns a downstream transformer into a new one.
///
/// A closure takes one concrete type, so the transducer built here applies to that
/// downstream type only.
///
/// This is the quickest way to name a pipeline built out of other transducers, or to
/// plug in a hand-written [`Transformer`](crate::Transformer) without writing a transducer
/// type for it.
///
/// # Examples
///
/// ```
/// use better_transduce::{Appending, prelude::*, xform::{filter, from_fn, map}};
///
/// let evens_squared = from_fn(|xf: Appending<i32>| {
///     compose(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * x)).apply(xf)
/// });
///
/// assert_eq!(transduce(evens_squared, appending(), vec![], 1..=6), [4, 16, 36]);
/// ```
#[inline]
pub const fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<Xf, F, R> Transducer<Xf> for FromFn<F>
where
    F: FnOnce(Xf) -> R,
{
    type Transformer = R;

    #[inline]
    fn apply(self, downstream: Xf) -> R {
        (self.f)(downstream)
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
