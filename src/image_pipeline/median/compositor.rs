use tracing::debug;

use crate::image_pipeline::config::MedianRounding;
use crate::image_pipeline::grid::{Pixel, PixelGrid, Sample};
use crate::image_pipeline::median::error::CompositionError;
use crate::image_pipeline::median::selector::median;

/// Reduces a group of same-sized grids to their per-channel median.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianCompositor {
    rounding: MedianRounding,
}

impl MedianCompositor {
    pub fn new(rounding: MedianRounding) -> Self {
        Self { rounding }
    }

    /// Composes `group` into a new grid of the same size.
    ///
    /// Fails with `EmptyGroup` for an empty slice and with
    /// `DimensionMismatch` if any member differs in size from the first.
    /// Inputs are only read; on failure nothing is produced.
    pub fn compose<T: Sample>(&self, group: &[PixelGrid<T>]) -> Result<PixelGrid<T>, CompositionError> {
        let first = group.first().ok_or(CompositionError::EmptyGroup)?;
        let expected = first.dimensions();

        for (index, grid) in group.iter().enumerate().skip(1) {
            if grid.dimensions() != expected {
                return Err(CompositionError::DimensionMismatch {
                    index,
                    expected,
                    found: grid.dimensions(),
                });
            }
        }

        let (width, height) = expected;
        debug!(
            "Composing {} images of {}x{} ({})",
            group.len(), width, height, T::DEPTH
        );

        // one scratch buffer per channel, reused for every pixel
        let mut reds = Vec::with_capacity(group.len());
        let mut greens = Vec::with_capacity(group.len());
        let mut blues = Vec::with_capacity(group.len());
        let mut pixels = Vec::with_capacity(width * height);

        for index in 0..width * height {
            reds.clear();
            greens.clear();
            blues.clear();

            for grid in group {
                let pixel = grid.pixels()[index];
                reds.push(pixel.red);
                greens.push(pixel.green);
                blues.push(pixel.blue);
            }

            let red = median(&mut reds, self.rounding).ok_or(CompositionError::EmptyGroup)?;
            let green = median(&mut greens, self.rounding).ok_or(CompositionError::EmptyGroup)?;
            let blue = median(&mut blues, self.rounding).ok_or(CompositionError::EmptyGroup)?;
            pixels.push(Pixel::new(red, green, blue));
        }

        Ok(PixelGrid::from_parts(width, height, pixels))
    }
}

/// Composes `group` with the default (floor) rounding.
pub fn compose<T: Sample>(group: &[PixelGrid<T>]) -> Result<PixelGrid<T>, CompositionError> {
    MedianCompositor::default().compose(group)
}
