use std::fmt::Debug;

use super::Filter;
use crate::Transducer;

/// A [`Transducer`] that drops items satisfying a predicate.
///
/// This `struct` is created by [`remove()`]. See its documentation for more.
#[derive(Clone)]
pub struct Removing<P> {
    pred: P,
}

/// Creates a [`Transducer`] that drops every item for which `pred` returns `true`.
///
/// This is [`filter()`](super::filter) with the predicate negated. It builds the very same
/// [`Filter`] stage.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::remove};
///
/// let out = transduce_with(remove(|&x: &i32| x == 2), append, vec![], [1, 2, 3, 2]);
/// assert_eq!(out, [1, 3]);
/// ```
#[inline]
pub const fn remove<T, P>(pred: P) -> Removing<P>
where
    P: FnMut(&T) -> bool,
{
    Removing { pred }
}

impl<Xf, P> Transducer<Xf> for Removing<P> {
    type Transformer = Filter<Xf, P>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        Filter::new(downstream, self.pred, false)
    }
}

impl<P> Debug for Removing<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Removing").finish_non_exhaustive()
    }
}
