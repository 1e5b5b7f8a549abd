use crate::{Transducer, Transformer, TransformerBase, Wrap, reduce, wrap};

/// Extends [`Iterator`] with methods that drive a transducer over the iterator.
///
/// The iterator is borrowed mutably, so whatever a stopped reduction did not pull
/// is still there afterwards.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::take};
///
/// let mut nums = 1..=5;
/// let firsts = nums.transduce_with(take(2), append, vec![]);
///
/// assert_eq!(firsts, [1, 2]);
/// assert!(nums.eq(3..=5));
/// ```
pub trait Transduce: Iterator {
    /// Drives `xform` applied to `xf` over this iterator, starting from `init`.
    ///
    /// Equivalent to [`transduce(xform, xf, init, self)`](crate::transduce).
    #[inline]
    fn transduce<X, Xf>(
        &mut self,
        xform: X,
        xf: Xf,
        init: <X::Transformer as TransformerBase>::Acc,
    ) -> <X::Transformer as TransformerBase>::Output
    where
        X: Transducer<Xf>,
        X::Transformer: Transformer<Self::Item>,
    {
        reduce(xform.apply(xf), init, self)
    }

    /// Like [`transduce()`](Transduce::transduce), with a raw combining function as the
    /// terminal step.
    #[inline]
    fn transduce_with<X, F, A>(
        &mut self,
        xform: X,
        f: F,
        init: A,
    ) -> <X::Transformer as TransformerBase>::Output
    where
        X: Transducer<Wrap<F, A>>,
        X::Transformer: Transformer<Self::Item, Acc = A>,
    {
        reduce(xform.apply(wrap(f)), init, self)
    }
}

impl<I: Iterator + ?Sized> Transduce for I {}
