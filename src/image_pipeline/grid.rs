//! Pixel grid module
//!
//! In-memory RGB images. `PixelGrid<T>` is generic over the sample type;
//! `SampleGrid` carries a grid whose depth is only known after decoding.

mod types;
mod sample;


pub use types::{Pixel, PixelGrid};
pub use sample::{Sample, SampleDepth, SampleGrid};
