/// Turns a downstream transformer into a new transformer.
///
/// A transducer is configuration only: `map`'s function, `take`'s count, and so on.
/// [`apply()`](Transducer::apply) consumes it and builds a transformer that owns any
/// per-reduction state (like the countdown of [`take()`](crate::xform::take)).
/// To build the same pipeline again, apply a fresh (or cloned) transducer.
///
/// The built-in transducers live in [`xform`](crate::xform). Closures can be turned into
/// transducers with [`from_fn()`](crate::xform::from_fn).
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::{map, take}};
///
/// let xform = compose![map(|x: i32| x * 10), take(2)];
///
/// // Build the pipeline by hand, then drive it.
/// let xf = xform.clone().apply(appending());
/// assert_eq!(reduce(xf, vec![], [1, 2, 3]), [10, 20]);
///
/// // The transducer itself is untouched and can be applied again.
/// assert_eq!(transduce(xform, appending(), vec![], [4, 5, 6]), [40, 50]);
/// ```
pub trait Transducer<Xf> {
    /// The transformer built around `Xf`.
    type Transformer;

    /// Wraps `downstream`, producing the stage that runs before it.
    fn apply(self, downstream: Xf) -> Self::Transformer;
}
