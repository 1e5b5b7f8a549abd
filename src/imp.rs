#[cfg(feature = "alloc")]
mod appending;
mod consumers;
mod try_wrap;
mod wrap;

#[cfg(feature = "alloc")]
pub use appending::*;
pub use consumers::*;
pub use try_wrap::*;
pub use wrap::*;
