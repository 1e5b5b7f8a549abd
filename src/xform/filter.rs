use std::fmt::Debug;

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that only lets through items satisfying a predicate.
///
/// This `struct` is created by [`filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filtering<P> {
    pred: P,
}

/// A [`Transformer`] that uses a predicate to decide whether an item is passed downstream.
///
/// It is built by both [`Filtering`] and [`Removing`](super::Removing). The latter keeps the
/// items for which the predicate returns `false`.
#[derive(Clone)]
pub struct Filter<Xf, P> {
    downstream: Xf,
    pred: P,
    // `true` to keep the items satisfying `pred`, `false` to keep the others.
    keep: bool,
}

/// Creates a [`Transducer`] that only passes on items for which `pred` returns `true`.
///
/// Rejected items are silently dropped: the accumulator is returned unchanged and
/// the reduction goes on. Filtering never stops a reduction by itself.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::filter};
///
/// let odds = transduce_with(filter(|x: &i32| x % 2 == 1), append, vec![], [1, 2, 3, 4, 5]);
/// assert_eq!(odds, [1, 3, 5]);
/// ```
#[inline]
pub const fn filter<T, P>(pred: P) -> Filtering<P>
where
    P: FnMut(&T) -> bool,
{
    Filtering { pred }
}

impl<Xf, P> Transducer<Xf> for Filtering<P> {
    type Transformer = Filter<Xf, P>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        Filter::new(downstream, self.pred, true)
    }
}

impl<Xf, P> Filter<Xf, P> {
    pub(super) fn new(downstream: Xf, pred: P, keep: bool) -> Self {
        Self {
            downstream,
            pred,
            keep,
        }
    }
}

impl<Xf, P> TransformerBase for Filter<Xf, P>
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

impl<Xf, P, T> Transformer<T> for Filter<Xf, P>
where
    Xf: Transformer<T>,
    P: FnMut(&T) -> bool,
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        if (self.pred)(&item) == self.keep {
            self.downstream.step(acc, item)
        } else {
            Step::Continue(acc)
        }
    }
}

impl<P> Debug for Filtering<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filtering").finish_non_exhaustive()
    }
}

impl<Xf: Debug, P> Debug for Filter<Xf, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("downstream", &self.downstream)
            .field("keep", &self.keep)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::TransducerTester;
    use crate::xform::filter;

    proptest! {
        #[test]
        fn all_drive_methods(
            nums in propvec(any::<i32>(), ..=10),
            modulo in 1..5_i32,
        ) {
            all_drive_methods_impl(nums, modulo)?;
        }
    }

    fn all_drive_methods_impl(nums: Vec<i32>, modulo: i32) -> TestCaseResult {
        let expected: Vec<_> = nums
            .iter()
            .copied()
            .filter(|x| x % modulo == 0)
            .collect();

        TransducerTester {
            input: &nums,
            xform_factory: || filter(move |x: &i32| x % modulo == 0),
            expected_pulls: nums.len(),
        }
        .test(&expected)
    }
}
