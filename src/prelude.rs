//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the traits, the terminal consumers, the drivers
//! and the composition operators.
//! The transducers themselves live in [`xform`](crate::xform).
//!
//! # Example
//!
//! ```
//! use better_transduce::{prelude::*, xform::map};
//!
//! assert_eq!(transduce_with(compose![map(|x: i32| x * 2)], sum, 0, 1..=3), 12);
//! ```

pub use crate::compose;
pub use crate::traits::*;
pub use crate::xform::compose;
#[cfg(feature = "alloc")]
pub use crate::{append, appending};
pub use crate::{
    Step, product, reduce, reduce_with, reduced, sum, transduce, transduce_init, transduce_with,
    try_transduce_with, try_wrap, wrap,
};
