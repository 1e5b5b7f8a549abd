use crate::{Error, Step};

/// The item-independent half of a [`Transformer`]: how a reduction starts and how it ends.
///
/// This is split from [`Transformer`] so that a stage changing the item type
/// (like [`map()`](crate::xform::map)) still has exactly one accumulator and one output.
pub trait TransformerBase {
    /// The running value threaded through every [`step()`](Transformer::step).
    type Acc;

    /// The value produced by [`result()`](TransformerBase::result).
    type Output;

    /// Produces a starting accumulator.
    ///
    /// Stages built by transducers forward this to their downstream transformer, so
    /// calling it on a whole pipeline asks the terminal transformer.
    ///
    /// The driver never calls this on its own. It uses the initial accumulator supplied
    /// by the caller, except for [`transduce_init()`](crate::transduce_init).
    ///
    /// The default implementation returns [`Error::InitUnsupported`], which is what a
    /// transformer built from a bare combining function does.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_transduce::{prelude::*, Error};
    ///
    /// assert_eq!(appending::<i32>().init(), Ok(vec![]));
    ///
    /// let init = wrap::<_, i32>(sum::<i32>).init();
    /// assert_eq!(init, Err(Error::InitUnsupported));
    /// ```
    #[inline]
    fn init(&mut self) -> Result<Self::Acc, Error> {
        Err(Error::InitUnsupported)
    }

    /// Consumes the transformer and turns the final accumulator into the output.
    ///
    /// Most transformers simply return the accumulator, or forward it to their downstream
    /// transformer. A stage holding buffered items flushes them here first
    /// (see [`partition_all()`](crate::xform::partition_all)).
    ///
    /// Since this consumes the transformer, a pipeline can only be driven to completion once.
    fn result(self, acc: Self::Acc) -> Self::Output
    where
        Self: Sized;

    /// Returns `true` if it is guaranteed that the next [`step()`](Transformer::step)
    /// would stop without accumulating anything.
    ///
    /// The driver asks once, before pulling the first item, so that a pipeline
    /// like [`take(0)`](crate::xform::take) does not consume an item from its source.
    /// It is not meant to be polled between steps.
    ///
    /// If unsure, return `false`. Stages built by transducers forward it to the downstream
    /// transformer unless they know better.
    ///
    /// The default implementation returns `false`.
    #[inline]
    fn stop_hint(&self) -> bool {
        false
    }
}

/// One stage of a reduction, accepting items of type `T`.
///
/// A transformer is the `{init, step, result}` triple: see [`TransformerBase`] for the first
/// and the last.
///
/// # Implementing
///
/// A terminal transformer (the one that actually builds the result) defines its accumulator,
/// and implements `step` to fold an item into it:
///
/// ```
/// use better_transduce::{prelude::*, xform::identity, Error, Step};
///
/// /// Keeps the longest string seen so far.
/// struct Longest;
///
/// impl TransformerBase for Longest {
///     type Acc = String;
///     type Output = String;
///
///     fn init(&mut self) -> Result<String, Error> {
///         Ok(String::new())
///     }
///
///     fn result(self, acc: String) -> String {
///         acc
///     }
/// }
///
/// impl<'a> Transformer<&'a str> for Longest {
///     fn step(&mut self, acc: String, word: &'a str) -> Step<String> {
///         if word.len() > acc.len() {
///             Step::Continue(word.to_owned())
///         } else {
///             Step::Continue(acc)
///         }
///     }
/// }
///
/// let words = "the noble and the singer".split_whitespace();
/// assert_eq!(transduce_init(identity(), Longest, words), Ok("singer".to_owned()));
/// ```
///
/// # Stopping
///
/// Returning [`Step::Stop`] tells the driver to stop pulling items. A stage that receives
/// `Stop` from its downstream must return it as is, never swallow it.
/// After a stage has returned `Stop`, calling `step()` again is unspecified.
/// Callers should go straight to [`result()`](TransformerBase::result).
pub trait Transformer<T>: TransformerBase {
    /// Folds one item into the accumulator.
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc>;
}
