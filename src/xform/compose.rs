use crate::Transducer;

/// A [`Transducer`] running two transducers one after the other.
///
/// This `struct` is created by [`compose()`] and [`compose!`](crate::compose!).
/// See their documentation for more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composed<A, B> {
    first: A,
    second: B,
}

/// Chains two transducers. Items go through `first`, then through `second`.
///
/// Applying the result to `xf` gives `first.apply(second.apply(xf))`: the stage built by
/// `second` is closer to `xf`, so it sees items *after* `first` does.
///
/// Composition is associative, and [`identity()`](super::identity) is neutral on both sides.
/// To chain more than two, use [`compose!`](crate::compose!).
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::{filter, map}};
///
/// let is_odd = |x: &i32| x % 2 == 1;
/// let plus_one = |x: i32| x + 1;
///
/// // Keep the odd numbers, then add one.
/// let out = transduce_with(compose(filter(is_odd), map(plus_one)), append, vec![], 1..=5);
/// assert_eq!(out, [2, 4, 6]);
///
/// // Add one, then keep the odd numbers.
/// let out = transduce_with(compose(map(plus_one), filter(is_odd)), append, vec![], 1..=5);
/// assert_eq!(out, [3, 5]);
/// ```
#[inline]
pub const fn compose<A, B>(first: A, second: B) -> Composed<A, B> {
    Composed { first, second }
}

impl<Xf, A, B> Transducer<Xf> for Composed<A, B>
where
    B: Transducer<Xf>,
    A: Transducer<B::Transformer>,
{
    type Transformer = A::Transformer;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        self.first.apply(self.second.apply(downstream))
    }
}

/// Composes any number of transducers. Items flow from left to right.
///
/// - `compose![]` is [`identity()`](crate::xform::identity).
/// - `compose![t]` is `t`.
/// - `compose![t1, t2, ..., tn]` is `compose(t1, compose![t2, ..., tn])`.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::{drop, filter, map, take}};
///
/// let out = transduce_with(
///     compose![
///         filter(|x: &i32| x % 3 == 0),
///         map(|x: i32| x * 10),
///         drop(1),
///         take(3),
///     ],
///     append,
///     vec![],
///     1..,
/// );
/// assert_eq!(out, [60, 90, 120]);
///
/// assert_eq!(transduce_with(compose![], append, vec![], [1, 2]), [1, 2]);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::xform::identity()
    };
    ($xform:expr $(,)?) => {
        $xform
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::xform::compose($first, $crate::compose!($($rest),+))
    };
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;
    use crate::test_utils::TransducerTester;
    use crate::xform::{drop, filter, identity, map, take};

    proptest! {
        #[test]
        fn all_drive_methods(
            nums in propvec(-50..50_i32, ..=12),
            drop_count in ..=5_usize,
            take_count in ..=8_usize,
        ) {
            all_drive_methods_impl(nums, drop_count, take_count)?;
        }

        #[test]
        fn composition_law(
            nums in propvec(-50..50_i32, ..=12),
            take_count in ..=8_usize,
        ) {
            composition_law_impl(nums, take_count)?;
        }

        #[test]
        fn identity_is_neutral(
            nums in propvec(any::<i32>(), ..=10),
            take_count in ..=15_usize,
        ) {
            identity_is_neutral_impl(nums, take_count)?;
        }
    }

    fn all_drive_methods_impl(
        nums: Vec<i32>,
        drop_count: usize,
        take_count: usize,
    ) -> TestCaseResult {
        let expected: Vec<_> = nums
            .iter()
            .copied()
            .filter(|x| x % 2 == 0)
            .map(|x| x / 2)
            .skip(drop_count)
            .take(take_count)
            .collect();

        // With `take(0)`, nothing is pulled. Otherwise, the source is pulled up to the
        // item that fills the `take`, or to its end.
        let expected_pulls = if take_count == 0 {
            0
        } else {
            let mut passed = 0;
            nums.iter()
                .position(|x| {
                    if x % 2 == 0 {
                        passed += 1;
                    }
                    passed == drop_count + take_count
                })
                .map_or(nums.len(), |i| i + 1)
        };

        TransducerTester {
            input: &nums,
            xform_factory: || {
                compose![
                    filter(|x: &i32| x % 2 == 0),
                    map(|x: i32| x / 2),
                    drop(drop_count),
                    take(take_count),
                ]
            },
            expected_pulls,
        }
        .test(&expected)
    }

    fn composition_law_impl(nums: Vec<i32>, take_count: usize) -> TestCaseResult {
        let t1 = || map(|x: i32| x - 1);
        let t2 = || take(take_count);

        let composed = transduce(compose(t1(), t2()), appending(), vec![], nums.iter().copied());
        let by_hand = transduce(t1(), t2().apply(appending()), vec![], nums.iter().copied());

        prop_assert_eq!(composed, by_hand);
        Ok(())
    }

    fn identity_is_neutral_impl(nums: Vec<i32>, take_count: usize) -> TestCaseResult {
        let expected: Vec<_> = nums.iter().copied().take(take_count).collect();

        for out in [
            transduce_with(compose(identity(), take(take_count)), append, vec![], nums.iter().copied()),
            transduce_with(compose(take(take_count), identity()), append, vec![], nums.iter().copied()),
            transduce_with(compose![take(take_count)], append, vec![], nums.iter().copied()),
        ] {
            prop_assert_eq!(&out, &expected);
        }

        Ok(())
    }
}
