use std::ops::ControlFlow;

use tracing::trace;

use crate::{Error, Transducer, Transformer, TransformerBase, TryWrap, Wrap, try_wrap, wrap};

/// Drives a transformer over `input`, starting from `init`, and returns its result.
///
/// 1. The accumulator starts as `init`. The transformer's own
///    [`init()`](TransformerBase::init) is *not* called.
/// 2. Items are fed to [`step()`](Transformer::step) in order.
/// 3. As soon as a step returns [`Step::Stop`](crate::Step::Stop), the driver stops.
///    No further item is pulled from `input`.
/// 4. The final accumulator goes through [`result()`](TransformerBase::result).
///
/// If the transformer reports through [`stop_hint()`](TransformerBase::stop_hint) that it
/// would stop right away, no item is pulled at all.
///
/// Panics raised by the transformer (or any function it calls) unwind out of `reduce`.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::take};
///
/// let xf = take(2).apply(wrap(sum));
/// assert_eq!(reduce(xf, 0, [5, 6, 7]), 11);
/// ```
pub fn reduce<T, Xf>(mut xf: Xf, init: Xf::Acc, input: impl IntoIterator<Item = T>) -> Xf::Output
where
    Xf: Transformer<T>,
{
    if xf.stop_hint() {
        trace!("reduction stopped before pulling any item");
        return xf.result(init);
    }

    let mut consumed = 0_usize;
    let flow = input.into_iter().try_fold(init, |acc, item| {
        consumed += 1;
        ControlFlow::from(xf.step(acc, item))
    });

    let acc = match flow {
        ControlFlow::Continue(acc) => {
            trace!(consumed, "reduction exhausted its input");
            acc
        }
        ControlFlow::Break(acc) => {
            trace!(consumed, "reduction stopped early");
            acc
        }
    };

    xf.result(acc)
}

/// Like [`reduce()`], with a raw combining function wrapped by [`wrap()`].
///
/// ```
/// use better_transduce::prelude::*;
///
/// assert_eq!(reduce_with(product, 1, [2, 3, 4]), 24);
/// ```
#[inline]
pub fn reduce_with<T, F, A>(f: F, init: A, input: impl IntoIterator<Item = T>) -> A
where
    F: FnMut(A, T) -> A,
{
    reduce(wrap(f), init, input)
}

/// Applies `xform` to the terminal transformer `xf` and drives the resulting pipeline over
/// `input`, starting from `init`.
///
/// This is the main entry point of the crate.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::{filter, map}};
///
/// let out = transduce(
///     compose![filter(|x: &i32| x % 2 == 1), map(|x: i32| x + 1)],
///     appending(),
///     vec![],
///     [1, 2, 3, 4, 5],
/// );
/// assert_eq!(out, [2, 4, 6]);
/// ```
#[inline]
pub fn transduce<T, X, Xf>(
    xform: X,
    xf: Xf,
    init: <X::Transformer as TransformerBase>::Acc,
    input: impl IntoIterator<Item = T>,
) -> <X::Transformer as TransformerBase>::Output
where
    X: Transducer<Xf>,
    X::Transformer: Transformer<T>,
{
    reduce(xform.apply(xf), init, input)
}

/// Like [`transduce()`], with a raw combining function as the terminal step.
///
/// The function is lifted with [`wrap()`] before `xform` is applied to it.
///
/// ```
/// use better_transduce::{prelude::*, xform::map};
///
/// assert_eq!(transduce_with(map(|x: i32| x + 1), append, vec![], [2, 3, 4]), [3, 4, 5]);
/// assert_eq!(transduce_with(map(|x: i32| x + 1), product, 1, [2, 3, 4]), 60);
/// ```
#[inline]
pub fn transduce_with<T, X, F, A>(
    xform: X,
    f: F,
    init: A,
    input: impl IntoIterator<Item = T>,
) -> <X::Transformer as TransformerBase>::Output
where
    X: Transducer<Wrap<F, A>>,
    X::Transformer: Transformer<T, Acc = A>,
{
    reduce(xform.apply(wrap(f)), init, input)
}

/// Like [`transduce()`], but the initial accumulator comes from the pipeline's
/// [`init()`](TransformerBase::init), which every transducer forwards to `xf`.
///
/// # Errors
///
/// Returns [`Error::InitUnsupported`] if the terminal transformer cannot produce a starting
/// value, such as one built by [`wrap()`]. No item is pulled in that case.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, Error, xform::take};
///
/// assert_eq!(transduce_init(take(2), appending(), 1..), Ok(vec![1, 2]));
///
/// let out: Result<i32, Error> = transduce_init(take(2), wrap(sum), 1..);
/// assert_eq!(out, Err(Error::InitUnsupported));
/// ```
pub fn transduce_init<T, X, Xf>(
    xform: X,
    xf: Xf,
    input: impl IntoIterator<Item = T>,
) -> Result<<X::Transformer as TransformerBase>::Output, Error>
where
    X: Transducer<Xf>,
    X::Transformer: Transformer<T>,
{
    let mut xf = xform.apply(xf);
    let init = xf.init()?;
    Ok(reduce(xf, init, input))
}

/// Like [`transduce_with()`], with a fallible combining function as the terminal step.
///
/// The accumulator is a `Result<A, E>`. The first error, raised either by `f` or by a
/// [`try_map()`](crate::xform::try_map) stage, stops the reduction and is returned.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::try_map};
///
/// let parse = try_map(|s: &str| s.parse::<i32>());
///
/// let total = try_transduce_with(parse.clone(), |acc: i32, x: i32| Ok(acc + x), 0, ["1", "2", "3"]);
/// assert_eq!(total, Ok(6));
///
/// let total = try_transduce_with(parse, |acc: i32, x: i32| Ok(acc + x), 0, ["1", "two", "3"]);
/// assert!(total.is_err());
/// ```
#[inline]
pub fn try_transduce_with<T, X, F, A, E>(
    xform: X,
    f: F,
    init: A,
    input: impl IntoIterator<Item = T>,
) -> <X::Transformer as TransformerBase>::Output
where
    X: Transducer<TryWrap<F, A, E>>,
    X::Transformer: Transformer<T, Acc = Result<A, E>>,
{
    reduce(xform.apply(try_wrap(f)), Ok(init), input)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;

    use crate::{Error, Step, prelude::*, test_utils::Pulls, xform::*};

    #[test]
    fn stop_is_unwrapped_before_result() {
        struct Doubling;

        impl TransformerBase for Doubling {
            type Acc = i32;
            type Output = i32;

            fn result(self, acc: i32) -> i32 {
                acc * 2
            }
        }

        impl Transformer<i32> for Doubling {
            fn step(&mut self, acc: i32, item: i32) -> Step<i32> {
                if item == 0 {
                    reduced(acc)
                } else {
                    Step::Continue(acc + item)
                }
            }
        }

        let mut pulls = Pulls::new([1, 2, 0, 5, 6]);
        assert_eq!(reduce(Doubling, 0, &mut pulls), 6);
        assert_eq!(pulls.pulled(), 3);
    }

    #[test]
    fn no_item_is_read_past_a_stop() {
        // Reading the fourth item would panic.
        let source = [1, 2, 3].into_iter().chain(std::iter::from_fn(|| -> Option<i32> {
            panic!("read past the stop");
        }));

        assert_eq!(transduce_with(take(3), append, vec![], source), [1, 2, 3]);
    }

    #[test]
    fn caller_init_wins_over_transformer_init() {
        assert_eq!(transduce(identity(), appending(), vec![0], [1, 2]), [0, 1, 2]);
    }

    #[test]
    fn init_is_forwarded_through_every_stage() {
        let out = transduce_init(
            compose![map(|x: i32| x * 2), filter(|x: &i32| *x > 2), drop(1), take(5)],
            appending(),
            1..=4,
        );
        assert_eq!(out, Ok(vec![6, 8]));
    }

    #[test]
    fn init_unsupported_pulls_nothing() {
        let mut pulls = Pulls::new(1..=3);
        let out: Result<i32, _> = transduce_init(map(|x: i32| x), wrap(sum), &mut pulls);

        assert_eq!(out, Err(Error::InitUnsupported));
        assert_eq!(pulls.pulled(), 0);
    }

    #[test]
    fn panics_propagate_unmodified() {
        let result = std::panic::catch_unwind(|| {
            transduce_with(
                map(|x: i32| if x == 2 { panic!("boom at {x}") } else { x }),
                append,
                vec![],
                [1, 2, 3],
            )
        });

        let payload = result.expect_err("the mapping function panicked");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom at 2"));
    }

    #[test]
    fn errors_from_try_map_and_terminal_share_the_accumulator() {
        let calls = &Cell::new(0);
        let xform = || {
            try_map(move |x: i32| {
                calls.set(calls.get() + 1);
                if x < 0 { Err("negative") } else { Ok(x) }
            })
        };

        let out = try_transduce_with(xform(), |acc: i32, x: i32| Ok(acc + x), 0, [1, 2, 3]);
        assert_eq!(out, Ok(6));

        calls.set(0);
        let out = try_transduce_with(xform(), |acc: i32, x: i32| Ok(acc + x), 0, [1, -2, 3]);
        assert_eq!(out, Err("negative"));
        assert_eq!(calls.get(), 2);

        let out = try_transduce_with(
            xform(),
            |acc: i32, x: i32| if acc + x > 2 { Err("too big") } else { Ok(acc + x) },
            0,
            [1, 2, 3],
        );
        assert_eq!(out, Err("too big"));
    }
}
