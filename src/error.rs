use thiserror::Error;

/// Errors raised by the transformer protocol itself.
///
/// Failures of user-supplied functions are not represented here. Panics unwind through every
/// stage untouched, and fallible functions go through [`try_map`](crate::xform::try_map)
/// and [`try_wrap`](crate::try_wrap), which carry the user's own error type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// [`init()`](crate::TransformerBase::init) was called on a transformer that has no
    /// notion of a starting accumulator, such as one built by [`wrap()`](crate::wrap).
    #[error("init is not supported by this transformer; supply an initial accumulator")]
    InitUnsupported,

    /// [`Step::deref()`](crate::Step::deref) was called on a step that did not signal a stop.
    #[error("cannot deref a step that was not reduced")]
    NotReduced,
}
