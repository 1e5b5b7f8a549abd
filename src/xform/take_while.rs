use std::fmt::Debug;

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that stops the reduction at the first item failing a predicate.
///
/// This `struct` is created by [`take_while()`]. See its documentation for more.
#[derive(Clone)]
pub struct TakingWhile<P> {
    pred: P,
}

/// A [`Transformer`] that passes items downstream as long as they satisfy a predicate.
#[derive(Clone)]
pub struct TakeWhile<Xf, P> {
    downstream: Xf,
    pred: P,
}

/// Creates a [`Transducer`] that passes items on while `pred` returns `true`, and stops the
/// reduction at the first item for which it returns `false`.
///
/// That first failing item is *not* passed on. It has already been pulled from the source,
/// though, since there is no way to know it fails before looking at it.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::take_while};
///
/// let mut nums = [1, 2, 5, 3, 4].into_iter();
/// let small = nums.transduce_with(take_while(|&x: &i32| x < 3), append, vec![]);
///
/// assert_eq!(small, [1, 2]);
/// // `5` was looked at and rejected.
/// assert!(nums.eq([3, 4]));
/// ```
#[inline]
pub const fn take_while<T, P>(pred: P) -> TakingWhile<P>
where
    P: FnMut(&T) -> bool,
{
    TakingWhile { pred }
}

impl<Xf, P> Transducer<Xf> for TakingWhile<P> {
    type Transformer = TakeWhile<Xf, P>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        TakeWhile {
            downstream,
            pred: self.pred,
        }
    }
}

impl<Xf, P> TransformerBase for TakeWhile<Xf, P>
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

impl<Xf, P, T> Transformer<T> for TakeWhile<Xf, P>
where
    Xf: Transformer<T>,
    P: FnMut(&T) -> bool,
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        if (self.pred)(&item) {
            self.downstream.step(acc, item)
        } else {
            Step::Stop(acc)
        }
    }
}

impl<P> Debug for TakingWhile<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakingWhile").finish_non_exhaustive()
    }
}

impl<Xf: Debug, P> Debug for TakeWhile<Xf, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile")
            .field("downstream", &self.downstream)
            .finish()
    }
}
