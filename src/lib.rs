//! Composable transducers: transformations that do not care where items come from
//! or where they end up.
//!
//! An [`Iterator`] adaptor chain describes a transformation *and* its source at once.
//! A transducer describes only the transformation. The same `filter` + `map` pipeline can feed
//! a [`Vec`], a running sum, or a user-defined consumer, and can stop the reduction early
//! without any stage knowing about the others.
//!
//! # Motivation
//!
//! Suppose we want the odd numbers of a list, each incremented by one.
//!
//! ```
//! let nums = [1, 2, 3, 4, 5];
//! let out: Vec<i32> = nums.into_iter().filter(|x| x % 2 == 1).map(|x| x + 1).collect();
//!
//! assert_eq!(out, [2, 4, 6]);
//! ```
//!
//! Now suppose we also want the *sum* of those numbers, somewhere else, from a different source.
//! The chain has to be written again, because it is welded to its source and to `collect()`.
//!
//! With transducers, the transformation is a value:
//!
//! ```
//! use better_transduce::{prelude::*, xform::{filter, map}};
//!
//! let odd_plus_one = || compose![filter(|x: &i32| x % 2 == 1), map(|x: i32| x + 1)];
//!
//! let out = transduce_with(odd_plus_one(), append, vec![], [1, 2, 3, 4, 5]);
//! assert_eq!(out, [2, 4, 6]);
//!
//! let total = transduce_with(odd_plus_one(), sum, 0, 1..=5);
//! assert_eq!(total, 12);
//! ```
//!
//! # The protocol
//!
//! Every stage of a pipeline is a [`Transformer`]:
//!
//! ```
//! # use better_transduce::{Error, Step};
//! pub trait TransformerBase {
//!     type Acc;
//!     type Output;
//!     fn init(&mut self) -> Result<Self::Acc, Error>;
//!     fn result(self, acc: Self::Acc) -> Self::Output;
//! }
//!
//! pub trait Transformer<T>: TransformerBase {
//!     fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc>;
//! }
//! ```
//!
//! [`step`](Transformer::step) returns a [`Step`], which is either
//! [`Continue`](Step::Continue) or [`Stop`](Step::Stop).
//! A `Stop` travels back up through every stage untouched and tells the driver
//! ([`reduce`]) to stop pulling items.
//!
//! A [`Transducer`] turns a downstream transformer into a new one.
//! [`compose`](xform::compose) (and [`compose!`]) chain transducers.
//! Construction goes right-to-left, but data flows left-to-right:
//! in `compose(a, b)`, items go through `a` first.
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`] and enables `alloc`.
//! - `alloc`: [`append`], [`Appending`] and [`partition_all`](xform::partition_all).
//!
//! Without `std`, the crate is `no_std`.
//!
//! [`Vec`]: std::vec::Vec

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

mod error;
mod imp;
pub mod prelude;
mod reduce;
mod step;
#[cfg(all(test, feature = "std"))]
mod test_utils;
mod traits;
pub mod xform;

pub use error::*;
pub use imp::*;
pub use reduce::*;
pub use step::*;
pub use traits::*;
