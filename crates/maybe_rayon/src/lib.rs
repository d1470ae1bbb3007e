//! Call sites use `maybe_*` iterator methods and get rayon's parallel
//! iterators when the `multithreaded` feature is on, or plain std iterators
//! otherwise. Both paths must produce the same results.

#[cfg(feature = "multithreaded")]
mod multi_threaded;
#[cfg(not(feature = "multithreaded"))]
mod single_threaded;

#[cfg(feature = "multithreaded")]
pub use multi_threaded::*;
#[cfg(not(feature = "multithreaded"))]
pub use single_threaded::*;

pub mod prelude {
    #[cfg(feature = "multithreaded")]
    pub use rayon::prelude::*;

    pub use crate::{MaybeParallelExt, MaybeParallelRefExt, MaybeParallelSliceMut};
}
