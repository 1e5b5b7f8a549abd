use std::fmt::Debug;

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that calls a function with a reference to each item before passing it on.
///
/// This `struct` is created by [`inspect()`]. See its documentation for more.
#[derive(Clone)]
pub struct Inspecting<F> {
    f: F,
}

/// A [`Transformer`] that calls a function with a reference to each item before passing it
/// downstream.
#[derive(Clone)]
pub struct Inspect<Xf, F> {
    downstream: Xf,
    f: F,
}

/// Creates a [`Transducer`] that lets `f` look at every item going through.
///
/// Handy to see what reaches a given point of a pipeline.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::{filter, inspect, take}};
///
/// let mut seen = vec![];
/// let out = transduce_with(
///     compose![inspect(|&x: &i32| seen.push(x)), filter(|x: &i32| x % 2 == 0), take(2)],
///     append,
///     vec![],
///     1..,
/// );
///
/// assert_eq!(out, [2, 4]);
/// assert_eq!(seen, [1, 2, 3, 4]);
/// ```
#[inline]
pub const fn inspect<T, F>(f: F) -> Inspecting<F>
where
    F: FnMut(&T),
{
    Inspecting { f }
}

impl<Xf, F> Transducer<Xf> for Inspecting<F> {
    type Transformer = Inspect<Xf, F>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        Inspect {
            downstream,
            f: self.f,
        }
    }
}

impl<Xf, F> TransformerBase for Inspect<Xf, F>
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

impl<Xf, F, T> Transformer<T> for Inspect<Xf, F>
where
    Xf: Transformer<T>,
    F: FnMut(&T),
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        (self.f)(&item);
        self.downstream.step(acc, item)
    }
}

impl<F> Debug for Inspecting<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspecting").finish_non_exhaustive()
    }
}

impl<Xf: Debug, F> Debug for Inspect<Xf, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspect")
            .field("downstream", &self.downstream)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::cell::RefCell;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::TransducerTester;
    use crate::xform::{compose, inspect, take};

    proptest! {
        #[test]
        fn sees_what_goes_through(
            nums in propvec(any::<i32>(), ..=10),
            take_count in 1..=15_usize,
        ) {
            sees_what_goes_through_impl(nums, take_count)?;
        }
    }

    fn sees_what_goes_through_impl(nums: Vec<i32>, take_count: usize) -> TestCaseResult {
        let expected: Vec<_> = nums.iter().copied().take(take_count).collect();
        let seen = &RefCell::new(vec![]);

        TransducerTester {
            input: &nums,
            xform_factory: || {
                seen.borrow_mut().clear();
                compose(inspect(move |&x: &i32| seen.borrow_mut().push(x)), take(take_count))
            },
            expected_pulls: expected.len(),
        }
        .test(&expected)?;

        // Left over from the last drive method.
        prop_assert_eq!(&*seen.borrow(), &expected);
        Ok(())
    }
}
