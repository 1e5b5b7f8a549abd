use std::ops::ControlFlow;

use crate::Error;

/// The outcome of a single [`step()`](crate::Transformer::step).
///
/// [`Continue`](Step::Continue) hands the accumulator back to the driver so it can feed the next
/// item. [`Stop`](Step::Stop) is a *reduced* accumulator: the driver stops pulling items, unwraps
/// it and passes it to [`result()`](crate::TransformerBase::result).
///
/// Every `step()` takes a plain accumulator, so a stopped value can never be fed
/// to a downstream stage by accident.
///
/// # Examples
///
/// ```
/// use better_transduce::{Step, reduced};
///
/// let step = reduced(vec![1, 2]);
/// assert!(step.is_reduced());
/// assert_eq!(step.deref(), Ok(vec![1, 2]));
///
/// let step = Step::Continue(3);
/// assert!(!step.is_reduced());
/// assert!(step.deref().is_err());
/// ```
#[must_use = "a `Step::Stop` must reach the driver, or the reduction will not stop"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<A> {
    /// The reduction may continue with this accumulator.
    Continue(A),
    /// The reduction must stop. This is the final accumulator.
    Stop(A),
}

/// Wraps an accumulator so that the driver stops after the current item.
#[inline]
pub const fn reduced<A>(acc: A) -> Step<A> {
    Step::Stop(acc)
}

impl<A> Step<A> {
    /// Returns `true` if this step requests the reduction to stop.
    #[inline]
    pub const fn is_reduced(&self) -> bool {
        matches!(self, Self::Stop(_))
    }

    /// Returns `true` if the reduction may go on.
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Extracts the accumulator of a reduced step.
    ///
    /// Calling this on [`Continue`](Step::Continue) is a protocol violation and
    /// returns [`Error::NotReduced`]. Use [`into_inner()`](Step::into_inner) when both
    /// variants are acceptable.
    #[inline]
    pub fn deref(self) -> Result<A, Error> {
        match self {
            Self::Stop(acc) => Ok(acc),
            Self::Continue(_) => Err(Error::NotReduced),
        }
    }

    /// Extracts the accumulator, whether the step stopped or not.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Self::Continue(acc) | Self::Stop(acc) => acc,
        }
    }

    /// Maps the accumulator, keeping the variant.
    #[inline]
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Step<B> {
        match self {
            Self::Continue(acc) => Step::Continue(f(acc)),
            Self::Stop(acc) => Step::Stop(f(acc)),
        }
    }
}

impl<A> From<Step<A>> for ControlFlow<A, A> {
    #[inline]
    fn from(step: Step<A>) -> Self {
        match step {
            Step::Continue(acc) => ControlFlow::Continue(acc),
            Step::Stop(acc) => ControlFlow::Break(acc),
        }
    }
}

impl<A> From<ControlFlow<A, A>> for Step<A> {
    #[inline]
    fn from(flow: ControlFlow<A, A>) -> Self {
        match flow {
            ControlFlow::Continue(acc) => Step::Continue(acc),
            ControlFlow::Break(acc) => Step::Stop(acc),
        }
    }
}
