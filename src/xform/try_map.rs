use std::fmt::Debug;

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that calls a fallible function on each item before passing it on.
///
/// This `struct` is created by [`try_map()`]. See its documentation for more.
#[derive(Clone)]
pub struct TryMapping<F> {
    f: F,
}

/// A [`Transformer`] that calls a fallible function on each item, and stops the reduction
/// with the first error.
#[derive(Clone)]
pub struct TryMap<Xf, F> {
    downstream: Xf,
    f: F,
}

/// Creates a [`Transducer`] that transforms every item with a fallible `f`.
///
/// The downstream accumulator must be a `Result<A, E>` with the same error type as `f`.
/// On `Ok(value)`, `value` is passed on. On `Err(e)`, the step returns
/// [`Step::Stop`] with `Err(e)` as the accumulator: the reduction ends right away and
/// the partial accumulator is dropped.
///
/// [`try_transduce_with()`](crate::try_transduce_with) pairs it with a fallible combining
/// function.
///
/// # Examples
///
/// ```
/// use std::num::ParseIntError;
///
/// use better_transduce::{prelude::*, xform::try_map};
///
/// let mut lines = ["1", "2", "x", "4"].into_iter();
/// let total: Result<i32, ParseIntError> = lines.transduce(
///     try_map(|s: &str| s.parse::<i32>()),
///     try_wrap(|acc: i32, x: i32| Ok(acc + x)),
///     Ok(0),
/// );
///
/// assert!(total.is_err());
/// assert_eq!(lines.next(), Some("4"));
/// ```
#[inline]
pub const fn try_map<T, U, E, F>(f: F) -> TryMapping<F>
where
    F: FnMut(T) -> Result<U, E>,
{
    TryMapping { f }
}

impl<Xf, F> Transducer<Xf> for TryMapping<F> {
    type Transformer = TryMap<Xf, F>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        TryMap {
            downstream,
            f: self.f,
        }
    }
}

impl<Xf, F> TransformerBase for TryMap<Xf, F>
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

impl<Xf, F, T, U, A, E> Transformer<T> for TryMap<Xf, F>
where
    Xf: Transformer<U, Acc = Result<A, E>>,
    F: FnMut(T) -> Result<U, E>,
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        match (self.f)(item) {
            Ok(item) => self.downstream.step(acc, item),
            Err(e) => Step::Stop(Err(e)),
        }
    }
}

impl<F> Debug for TryMapping<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMapping").finish_non_exhaustive()
    }
}

impl<Xf: Debug, F> Debug for TryMap<Xf, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMap")
            .field("downstream", &self.downstream)
            .finish()
    }
}
