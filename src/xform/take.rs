use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that stops the reduction after `n` items.
///
/// This `struct` is created by [`take()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taking {
    n: usize,
}

/// A [`Transformer`] that passes the first `n` items downstream, then stops.
#[derive(Debug, Clone)]
pub struct Take<Xf> {
    downstream: Xf,
    // Unspecified once the downstream transformer has stopped.
    remaining: usize,
}

/// Creates a [`Transducer`] that passes on the first `n` items, then stops the reduction.
///
/// The step that takes the `n`-th item returns [`Step::Stop`], so the driver does not
/// pull the `n + 1`-th item from its source. If the downstream transformer stops earlier,
/// that stop is passed on as is.
///
/// `take(0)` passes nothing on. It reports through
/// [`stop_hint()`](TransformerBase::stop_hint) that it is done before the first item, so
/// [`reduce()`](crate::reduce) does not pull anything from the source either.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::take};
///
/// assert_eq!(transduce_with(take(3), append, vec![], [1, 2, 3, 4, 5]), [1, 2, 3]);
///
/// let mut nums = 1..=5;
/// assert!(nums.transduce_with(take(0), append, vec![]).is_empty());
/// assert_eq!(nums.next(), Some(1));
/// ```
#[inline]
pub const fn take(n: usize) -> Taking {
    Taking { n }
}

impl<Xf> Transducer<Xf> for Taking {
    type Transformer = Take<Xf>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        Take {
            downstream,
            remaining: self.n,
        }
    }
}

impl<Xf> TransformerBase for Take<Xf>
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
        self.remaining == 0 || self.downstream.stop_hint()
    }
}

impl<Xf, T> Transformer<T> for Take<Xf>
where
    Xf: Transformer<T>,
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        // Must NOT remove it. A caller may step `take(0)` directly without asking
        // `stop_hint()` first, and it should neither forward nor underflow.
        if self.remaining == 0 {
            return Step::Stop(acc);
        }

        self.remaining -= 1;
        let step = self.downstream.step(acc, item);

        if self.remaining == 0 {
            Step::Stop(step.into_inner())
        } else {
            step
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::TransducerTester;
    use crate::xform::take;

    proptest! {
        #[test]
        fn all_drive_methods(
            nums in propvec(any::<i32>(), ..=10),
            // Goes past the input length on purpose.
            take_count in ..=15_usize,
        ) {
            all_drive_methods_impl(nums, take_count)?;
        }
    }

    fn all_drive_methods_impl(nums: Vec<i32>, take_count: usize) -> TestCaseResult {
        let expected: Vec<_> = nums.iter().copied().take(take_count).collect();

        TransducerTester {
            input: &nums,
            xform_factory: || take(take_count),
            // Stops right after the last taken item.
            expected_pulls: take_count.min(nums.len()),
        }
        .test(&expected)
    }
}
