use crate::Transducer;

/// The [`Transducer`] that leaves its downstream transformer as is.
///
/// This `struct` is created by [`identity()`] and by an empty [`compose!`](crate::compose!).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Creates a [`Transducer`] that passes every item on untouched.
///
/// Composing it with any transducer, on either side, yields an equivalent transducer.
///
/// ```
/// use better_transduce::{prelude::*, xform::identity};
///
/// assert_eq!(transduce_with(identity(), append, vec![], [3, 1, 2]), [3, 1, 2]);
/// ```
#[inline]
pub const fn identity() -> Identity {
    Identity
}

impl<Xf> Transducer<Xf> for Identity {
    type Transformer = Xf;

    #[inline]
    fn apply(self, downstream: Xf) -> Xf {
        downstream
    }
}
