use std::fmt::Debug;

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that calls a function on each item before passing it on.
///
/// This `struct` is created by [`map()`]. See its documentation for more.
#[derive(Clone)]
pub struct Mapping<F> {
    f: F,
}

/// A [`Transformer`] that calls a function on each item before passing it downstream.
///
/// This `struct` is built by applying [`Mapping`].
#[derive(Clone)]
pub struct Map<Xf, F> {
    downstream: Xf,
    f: F,
}

/// Creates a [`Transducer`] that transforms every item with `f`.
///
/// `step(acc, item)` becomes `downstream.step(acc, f(item))`.
/// A panic in `f` propagates to the caller as is.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::map};
///
/// let out = transduce_with(map(|x: i32| x * x), append, vec![], [1, 2, 3]);
/// assert_eq!(out, [1, 4, 9]);
///
/// // The accumulator may be of a totally different nature.
/// let total = transduce_with(map(str::len), sum, 0, ["a", "bb", "ccc"]);
/// assert_eq!(total, 6);
/// ```
#[inline]
pub const fn map<T, U, F>(f: F) -> Mapping<F>
where
    F: FnMut(T) -> U,
{
    Mapping { f }
}

impl<Xf, F> Transducer<Xf> for Mapping<F> {
    type Transformer = Map<Xf, F>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        Map {
            downstream,
            f: self.f,
        }
    }
}

impl<Xf, F> TransformerBase for Map<Xf, F>
where
    Xf: TransformerBase,
{
    type Acc = Xf::Acc;
    type Output = Xf::Output;

    #[inline]
    fn init(&mut self) -> Result<Self::Acc, Error> {
        self.downstream.init()
    }

    #[inline]
    fn result(self, acc: Self::Acc) -> Self::Output {
        self.downstream.result(acc)
    }

    #[inline]
    fn stop_hint(&self) -> bool {
        self.downstream.stop_hint()
    }
}

impl<Xf, F, T, U> Transformer<T> for Map<Xf, F>
where
    Xf: Transformer<U>,
    F: FnMut(T) -> U,
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        self.downstream.step(acc, (self.f)(item))
    }
}

impl<F> Debug for Mapping<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping").finish_non_exhaustive()
    }
}

impl<Xf: Debug, F> Debug for Map<Xf, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("downstream", &self.downstream)
            .finish()
    }
}
