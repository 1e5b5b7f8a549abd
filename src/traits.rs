mod transduce;
mod transducer;
mod transformer;

pub use transduce::*;
pub use transducer::*;
pub use transformer::*;
