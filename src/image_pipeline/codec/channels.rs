//! Channel layout helpers shared by the format codecs.

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::grid::{Pixel, PixelGrid};

/// Builds an RGB grid from interleaved samples with `channels` per pixel.
///
/// 1 = gray, 2 = gray + alpha, 3 = RGB, 4 = RGBA. Gray is copied to all
/// three channels and alpha is dropped.
pub(crate) fn grid_from_samples<T: Copy>(
    width: usize,
    height: usize,
    channels: usize,
    samples: &[T],
) -> Result<PixelGrid<T>> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(PipelineError::InvalidDimensions(width, height))?;
    if samples.len() < expected {
        return Err(PipelineError::DecodeError(format!(
            "expected {} samples for {}x{}x{}, got {}",
            expected, width, height, channels, samples.len()
        )));
    }

    let pixels = match channels {
        1 | 2 => samples[..expected]
            .chunks_exact(channels)
            .map(|c| Pixel::gray(c[0]))
            .collect(),
        3 | 4 => samples[..expected]
            .chunks_exact(channels)
            .map(|c| Pixel::new(c[0], c[1], c[2]))
            .collect(),
        other => {
            return Err(PipelineError::UnsupportedFormat(format!(
                "{} channels per pixel",
                other
            )))
        }
    };
    PixelGrid::new(width, height, pixels)
}

/// Splits big-endian byte pairs into 16-bit samples.
pub(crate) fn be_bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}
