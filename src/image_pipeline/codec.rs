//! Image codec module
//!
//! Decoding image files into `SampleGrid`s and encoding composites back out.
//! PNG and TIFF are supported at 8 and 16 bits per channel.

mod reader;
mod writer;
mod channels;
mod png_format;
mod tiff_format;
mod standard_reader;
mod standard_writer;

#[cfg(test)]
mod tests;

pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use standard_reader::{ImageFormat, StandardImageReader};
pub use standard_writer::StandardImageWriter;
