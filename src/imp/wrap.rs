use std::{fmt::Debug, marker::PhantomData};

use crate::{Step, Transformer, TransformerBase};

/// A [`Transformer`] built from a plain combining function `(acc, item) -> acc`.
///
/// This `struct` is created by [`wrap()`]. See its documentation for more.
pub struct Wrap<F, A> {
    f: F,
    // `A` only shows up in the function's signature.
    _marker: PhantomData<fn(A) -> A>,
}

/// Lifts a combining function into a [`Transformer`].
///
/// - [`init()`](TransformerBase::init) is not supported, since a bare function has no notion
///   of a starting value. Callers supply their own initial accumulator.
/// - [`step()`](Transformer::step) calls `f` and never stops.
/// - [`result()`](TransformerBase::result) returns the accumulator as is.
///
/// # Examples
///
/// ```
/// use better_transduce::prelude::*;
///
/// let xf = wrap(|acc: String, word: &str| acc + word);
/// assert_eq!(reduce(xf, String::new(), ["tr", "ans", "duce"]), "transduce");
/// ```
#[inline]
pub const fn wrap<F, A>(f: F) -> Wrap<F, A> {
    Wrap {
        f,
        _marker: PhantomData,
    }
}

impl<F, A> TransformerBase for Wrap<F, A> {
    type Acc = A;
    type Output = A;

    #[inline]
    fn result(self, acc: A) -> A {
        acc
    }
}

impl<F, A, T> Transformer<T> for Wrap<F, A>
where
    F: FnMut(A, T) -> A,
{
    #[inline]
    fn step(&mut self, acc: A, item: T) -> Step<A> {
        Step::Continue((self.f)(acc, item))
    }
}

impl<F: Clone, A> Clone for Wrap<F, A> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, A> Debug for Wrap<F, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrap").finish_non_exhaustive()
    }
}
