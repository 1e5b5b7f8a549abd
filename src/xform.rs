//! Transducers, and the means to compose them.
//!
//! Every function here returns a [`Transducer`](crate::Transducer): a piece of configuration
//! that, once [applied](crate::Transducer::apply) to a downstream transformer, builds the stage
//! running before it. None of them holds any state until then, so they can be built once and
//! cloned per reduction.
//!
//! | Transducer | Stage built |
//! |---|---|
//! | [`map(f)`](fn@map) | [`Map`] |
//! | [`filter(pred)`](fn@filter) / [`remove(pred)`](fn@remove) | [`Filter`] |
//! | [`drop(n)`](fn@drop) | [`DropFirst`] |
//! | [`take(n)`](fn@take) | [`Take`] |
//! | [`take_while(pred)`](fn@take_while) | [`TakeWhile`] |
//! | [`drop_while(pred)`](fn@drop_while) | [`DropWhile`] |
//! | [`inspect(f)`](fn@inspect) | [`Inspect`] |
//! | [`cat()`](fn@cat) | [`Flatten`] |
//! | [`partition_all(n)`](fn@partition_all) | [`PartitionAll`] |
//! | [`try_map(f)`](fn@try_map) | [`TryMap`] |
//!
//! [`compose()`](fn@compose) and [`compose!`](crate::compose!) chain transducers so that items flow
//! left-to-right. [`identity()`](fn@identity) leaves a pipeline unchanged, and
//! [`from_fn()`](fn@from_fn) turns a closure into a transducer.

mod cat;
mod compose;
mod drop;
mod drop_while;
mod filter;
mod from_fn;
mod identity;
mod inspect;
mod map;
#[cfg(feature = "alloc")]
mod partition_all;
mod remove;
mod take;
mod take_while;
mod try_map;

pub use cat::*;
pub use compose::*;
pub use drop::*;
pub use drop_while::*;
pub use filter::*;
pub use from_fn::*;
pub use identity::*;
pub use inspect::*;
pub use map::*;
#[cfg(feature = "alloc")]
pub use partition_all::*;
pub use remove::*;
pub use take::*;
pub use take_while::*;
pub use try_map::*;
