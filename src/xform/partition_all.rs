#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use std::{fmt::Debug, marker::PhantomData, mem};

use crate::{Error, Step, Transducer, Transformer, TransformerBase};

/// A [`Transducer`] that groups items into chunks of a fixed size.
///
/// This `struct` is created by [`partition_all()`]. See its documentation for more.
pub struct PartitioningAll<T> {
    n: usize,
    _marker: PhantomData<fn(T)>,
}

/// A [`Transformer`] that buffers items and passes them downstream as [`Vec`]s of a fixed size.
///
/// A trailing partial chunk is passed on by [`result()`](TransformerBase::result).
pub struct PartitionAll<Xf, T> {
    downstream: Xf,
    n: usize,
    buf: Vec<T>,
}

/// Creates a [`Transducer`] that groups items into [`Vec`]s of `n` items each.
///
/// Every full chunk is passed on as soon as it is complete. Whatever is left once the
/// reduction ends, whether the input ran out or a stage upstream stopped it, is passed on
/// as one last, shorter chunk when the result is computed.
///
/// # Panics
///
/// Panics if `n` is `0`.
///
/// # Examples
///
/// ```
/// use better_transduce::{prelude::*, xform::partition_all};
///
/// let out = transduce_with(partition_all(2), append, vec![], 1..=5);
/// assert_eq!(out, [vec![1, 2], vec![3, 4], vec![5]]);
/// ```
///
/// A chunk can be consumed by any downstream stage, such as one summing it:
///
/// ```
/// use better_transduce::{prelude::*, xform::{map, partition_all}};
///
/// let sums = transduce_with(
///     compose(partition_all(3), map(|chunk: Vec<i32>| chunk.into_iter().sum::<i32>())),
///     append,
///     vec![],
///     1..=7,
/// );
/// assert_eq!(sums, [6, 15, 7]);
/// ```
#[inline]
pub const fn partition_all<T>(n: usize) -> PartitioningAll<T> {
    assert!(n != 0, "chunk size must be non-zero");

    PartitioningAll {
        n,
        _marker: PhantomData,
    }
}

impl<Xf, T> Transducer<Xf> for PartitioningAll<T> {
    type Transformer = PartitionAll<Xf, T>;

    #[inline]
    fn apply(self, downstream: Xf) -> Self::Transformer {
        PartitionAll {
            downstream,
            n: self.n,
            // Not pre-sized: `n` may be far larger than the input.
            buf: Vec::new(),
        }
    }
}

impl<Xf, T> TransformerBase for PartitionAll<Xf, T>
where
    Xf: Transformer<Vec<T>>,
{
    type Acc = Xf::Acc;
    type Output = Xf::Output;

    #[inline]
    fn init(&mut self) -> Result<Self::Acc, Error> {
        self.downstream.init()
    }

    fn result(mut self, acc: Self::Acc) -> Self::Output {
        let acc = if self.buf.is_empty() {
            acc
        } else {
            // The reduction is over, so a stop changes nothing here.
            self.downstream
                .step(acc, mem::take(&mut self.buf))
                .into_inner()
        };

        self.downstream.result(acc)
    }

    #[inline]
    fn stop_hint(&self) -> bool {
        self.downstream.stop_hint()
    }
}

impl<Xf, T> Transformer<T> for PartitionAll<Xf, T>
where
    Xf: Transformer<Vec<T>>,
{
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        self.buf.push(item);

        if self.buf.len() < self.n {
            return Step::Continue(acc);
        }

        self.downstream.step(acc, mem::take(&mut self.buf))
    }
}

impl<T> Clone for PartitioningAll<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PartitioningAll<T> {}

impl<T> Debug for PartitioningAll<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitioningAll")
            .field("n", &self.n)
            .finish()
    }
}

impl<Xf: Clone, T: Clone> Clone for PartitionAll<Xf, T> {
    fn clone(&self) -> Self {
        Self {
            downstream: self.downstream.clone(),
            n: self.n,
            buf: self.buf.clone(),
        }
    }
}

impl<Xf: Debug, T: Debug> Debug for PartitionAll<Xf, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionAll")
            .field("downstream", &self.downstream)
            .field("n", &self.n)
            .field("buf", &self.buf)
            .finish()
    }
}
