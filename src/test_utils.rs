use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{
    Appending, Transducer, Transduce, Transformer, Wrap, append, appending, transduce,
    transduce_init, transduce_with,
};

/// An iterator that counts how many items have been pulled out of it.
#[derive(Debug, Clone)]
pub struct Pulls<I> {
    iter: I,
    pulled: usize,
}

impl<I: Iterator> Pulls<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            pulled: 0,
        }
    }
}

impl<I> Pulls<I> {
    pub fn pulled(&self) -> usize {
        self.pulled
    }
}

impl<I: Iterator> Iterator for Pulls<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        self.pulled += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

type AppendFn = fn(Vec<i32>, i32) -> Vec<i32>;

/// Drives a freshly built transducer over the same input through every entry point,
/// and checks that they all agree on the output and on how much of the input they read.
pub struct TransducerTester<'a, F> {
    /// The items fed to each reduction.
    pub input: &'a [i32],
    /// Builds a fresh transducer for every reduction.
    pub xform_factory: F,
    /// How many items each reduction should pull from `input`.
    pub expected_pulls: usize,
}

impl<'a, F, X> TransducerTester<'a, F>
where
    F: FnMut() -> X,
    X: Transducer<Appending<i32>> + Transducer<Wrap<AppendFn, Vec<i32>>>,
    <X as Transducer<Appending<i32>>>::Transformer:
        Transformer<i32, Acc = Vec<i32>, Output = Vec<i32>>,
    <X as Transducer<Wrap<AppendFn, Vec<i32>>>>::Transformer:
        Transformer<i32, Acc = Vec<i32>, Output = Vec<i32>>,
{
    pub fn test(mut self, expected: &[i32]) -> TestCaseResult {
        // `transduce()`
        let mut source = self.source();
        let out = transduce((self.xform_factory)(), appending(), vec![], &mut source);
        self.check("transduce()", &out, &source, expected)?;

        // `transduce_with()`
        let mut source = self.source();
        let out = transduce_with(
            (self.xform_factory)(),
            append as AppendFn,
            vec![],
            &mut source,
        );
        self.check("transduce_with()", &out, &source, expected)?;

        // `transduce_init()`
        let mut source = self.source();
        let out = transduce_init((self.xform_factory)(), appending(), &mut source);
        prop_assert!(out.is_ok(), "`transduce_init()` failed: {:?}", out);
        self.check(
            "transduce_init()",
            &out.unwrap_or_default(),
            &source,
            expected,
        )?;

        // `Transduce::transduce()`
        let mut source = self.source();
        let out = source.transduce((self.xform_factory)(), appending(), vec![]);
        self.check("Transduce::transduce()", &out, &source, expected)
    }

    fn source(&self) -> Pulls<std::iter::Copied<std::slice::Iter<'a, i32>>> {
        let input: &'a [i32] = self.input;
        Pulls::new(input.iter().copied())
    }

    fn check<I>(
        &self,
        method: &str,
        out: &[i32],
        source: &Pulls<I>,
        expected: &[i32],
    ) -> TestCaseResult {
        prop_assert_eq!(out, expected, "`{}`'s result mismatched", method);
        prop_assert_eq!(
            source.pulled(),
            self.expected_pulls,
            "`{}` pulled the wrong number of items",
            method
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Pulls;

    #[test]
    fn counts_only_yielded_items() {
        let mut pulls = Pulls::new([1, 2]);
        assert_eq!(pulls.pulled(), 0);

        assert_eq!(pulls.next(), Some(1));
        assert_eq!(pulls.next(), Some(2));
        assert_eq!(pulls.next(), None);
        assert_eq!(pulls.pulled(), 2);
    }
}
