//! Per-channel median compositing
//!
//! The kernel of the crate: given same-sized frames, every output channel
//! sample is the median of that channel at the same position across all
//! frames. Red, green and blue are reduced independently.

mod error;
mod selector;
mod compositor;


pub use error::CompositionError;
pub use selector::median;
pub use compositor::{compose, MedianCompositor};
