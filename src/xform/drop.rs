use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that discards the first `n` items.
///
/// This `struct` is created by [`drop()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropping {
    n: usize,
}

/// A [`Transformer`] that discards the first `n` items it sees, then passes every
/// following item downstream.
///
/// The countdown lives in this stage, so it starts over only when the transducer is
/// applied again.
#[derive(Debug, Clone)]
pub struct DropFirst<Xf> {
    downstream: Xf,
    remaining: usize,
}

/// Creates a [`Transducer`] that discards the first `n` items.
///
/// Dropping never stops a reduction by itself. `drop(0)` passes everything on, and dropping
/// more items than the input has yields nothing.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::drop};
///
/// assert_eq!(transduce_with(drop(2), append, vec![], [1, 2, 3, 4, 5]), [3, 4, 5]);
/// assert!(transduce_with(drop(9), append, vec![], [1, 2, 3, 4, 5]).is_empty());
/// ```
#[inline]
pub const fn drop(n: usize) -> Dropping {
    Dropping { n }
}

impl<Xf> Transducer<Xf> for Dropping {
    type Transformer = DropFirst<Xf>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        DropFirst {
            downstream,
            remaining: self.n,
        }
    }
}

impl<Xf> TransformerBase for DropFirst<Xf>
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

impl<Xf, T> Transformer<T> for DropFirst<Xf>
where
    Xf: Transformer<T>,
{
    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Step::Continue(acc)
        } else {
            self.downstream.step(acc, item)
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::TransducerTester;
    use crate::xform::drop;

    proptest! {
        #[test]
        fn all_drive_methods(
            nums in propvec(any::<i32>(), ..=10),
            // Goes past the input length on purpose.
            drop_count in ..=15_usize,
        ) {
            all_drive_methods_impl(nums, drop_count)?;
        }
    }

    fn all_drive_methods_impl(nums: Vec<i32>, drop_count: usize) -> TestCaseResult {
        let expected: Vec<_> = nums.iter().copied().skip(drop_count).collect();

        TransducerTester {
            input: &nums,
            xform_factory: || drop(drop_count),
            expected_pulls: nums.len(),
        }
        .test(&expected)
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use crate::{Step, prelude::*, xform::drop};

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn zero_is_identity() {
        assert_eq!(transduce_with(drop(0), append, vec![], [1, 2, 3]), [1, 2, 3]);
    }

    #[test]
    fn counter_lives_in_each_built_stage() {
        let xform = drop(1);

        let mut first = xform.apply(appending());
        assert_eq!(first.step(vec![], 1), Step::Continue(vec![]));
        assert_eq!(first.step(vec![], 2), Step::Continue(vec![2]));

        // A second stage built from the same transducer starts counting from scratch.
        let mut second = xform.apply(appending());
        assert_eq!(second.step(vec![], 1), Step::Continue(vec![]));
    }
}
