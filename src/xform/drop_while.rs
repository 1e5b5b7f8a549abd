use std::fmt::Debug;

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that discards items as long as they satisfy a predicate.
///
/// This `struct` is created by [`drop_while()`]. See its documentation for more.
#[derive(Clone)]
pub struct DroppingWhile<P> {
    pred: P,
}

/// A [`Transformer`] that discards items while they satisfy a predicate, then passes
/// every following item downstream.
#[derive(Clone)]
pub struct DropWhile<Xf, P> {
    downstream: Xf,
    pred: P,
    // Once `true`, the predicate is never called again.
    done_dropping: bool,
}

/// Creates a [`Transducer`] that discards items while `pred` returns `true`.
///
/// From the first item for which `pred` returns `false` on, every item is passed on and
/// `pred` is no longer called.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::drop_while};
///
/// let out = transduce_with(drop_while(|&x: &i32| x < 3), append, vec![], [1, 2, 5, 1, 4]);
/// assert_eq!(out, [5, 1, 4]);
/// ```
#[inline]
pub const fn drop_while<T, P>(pred: P) -> DroppingWhile<P>
where
    P: FnMut(&T) -> bool,
{
    DroppingWhile { pred }
}

impl<Xf, P> Transducer<Xf> for DroppingWhile<P> {
    type Transformer = DropWhile<Xf, P>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        DropWhile {
            downstream,
            pred: self.pred,
            done_dropping: false,
        }
    }
}

impl<Xf, P> TransformerBase for DropWhile<Xf, P>
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

impl<Xf, P, T> Transformer<T> for DropWhile<Xf, P>
where
    Xf: Transformer<T>,
    P: FnMut(&T) -> bool,
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        if !self.done_dropping {
            if (self.pred)(&item) {
                return Step::Continue(acc);
            }
            self.done_dropping = true;
        }

        self.downstream.step(acc, item)
    }
}

impl<P> Debug for DroppingWhile<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DroppingWhile").finish_non_exhaustive()
    }
}

impl<Xf: Debug, P> Debug for DropWhile<Xf, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropWhile")
            .field("downstream", &self.downstream)
            .field("done_dropping", &self.done_dropping)
            .finish()
    }
}
