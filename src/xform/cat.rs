use std::ops::ControlFlow;

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that flattens items by one level of nesting.
///
/// This `struct` is created by [`cat()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flattening;

/// A [`Transformer`] that passes the elements of every item downstream, one by one.
#[derive(Debug, Clone)]
pub struct Flatten<Xf> {
    downstream: Xf,
}

/// Creates a [`Transducer`] whose items are [`IntoIterator`]s, and which passes their
/// elements on one at a time.
///
/// If the downstream transformer stops halfway through an item, the rest of that item
/// is not iterated.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::{cat, map, take}};
///
/// let words = ["ab", "", "cde"];
/// let out = transduce_with(
///     compose![map(str::chars), cat(), take(4)],
///     append,
///     vec![],
///     words,
/// );
///
/// assert_eq!(out, ['a', 'b', 'c', 'd']);
/// ```
#[inline]
pub const fn cat() -> Flattening {
    Flattening
}

impl<Xf> Transducer<Xf> for Flattening {
    type Transformer = Flatten<Xf>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        Flatten { downstream }
    }
}

impl<Xf> TransformerBase for Flatten<Xf>
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

impl<Xf, I> Transformer<I> for Flatten<Xf>
where
    Xf: Transformer<I::Item>,
    I: IntoIterator,
{
    fn step(&mut self, acc: Self::Acc, item: I) -> Step<Self::Acc> {
        let flow = item
            .into_iter()
            .try_fold(acc, |acc, elem| ControlFlow::from(self.downstream.step(acc, elem)));

        Step::from(flow)
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;
    use crate::test_utils::Pulls;
    use crate::xform::{cat, take};

    proptest! {
        #[test]
        fn flattens_then_takes(
            matrix in propvec(propvec(any::<i32>(), ..=3), ..=4),
            take_count in 1..=10_usize,
        ) {
            flattens_then_takes_impl(matrix, take_count)?;
        }
    }

    #[test]
    fn forwards_stop_hint() {
        let mut source = Pulls::new([vec![1], vec![2, 3]]);
        let out = transduce_with(compose(cat(), take(0)), append, vec![], &mut source);

        assert!(out.is_empty());
        assert_eq!(source.pulled(), 0);
    }

    fn flattens_then_takes_impl(matrix: Vec<Vec<i32>>, take_count: usize) -> TestCaseResult {
        let expected: Vec<_> = matrix.iter().flatten().copied().take(take_count).collect();

        let mut source = Pulls::new(matrix.iter().cloned());
        let out = transduce(compose(cat(), take(take_count)), appending(), vec![], &mut source);
        prop_assert_eq!(&out, &expected);

        // Rows are only pulled until the one holding the last taken element.
        let mut seen = 0;
        let expected_pulls = matrix
            .iter()
            .position(|row| {
                seen += row.len();
                seen >= take_count
            })
            .map_or(matrix.len(), |i| i + 1);
        prop_assert_eq!(source.pulled(), expected_pulls);

        Ok(())
    }
}
