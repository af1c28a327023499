//! Sample types and depth-tagged grids

use std::fmt;

use crate::image_pipeline::config::MedianRounding;
use crate::image_pipeline::grid::types::PixelGrid;

/// Bits per channel sample of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleDepth {
    Eight,
    Sixteen,
}

impl SampleDepth {
    pub fn bits(self) -> u32 {
        match self {
            SampleDepth::Eight => 8,
            SampleDepth::Sixteen => 16,
        }
    }
}

impl fmt::Display for SampleDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// An unsigned channel sample the median kernel can operate on.
pub trait Sample: Copy + Ord + Default + fmt::Debug + Send + Sync + 'static {
    const DEPTH: SampleDepth;

    /// Average of two samples, computed in a wider type and rounded per
    /// `rounding`. Never overflows.
    fn average(a: Self, b: Self, rounding: MedianRounding) -> Self;

    fn into_sample_grid(grid: PixelGrid<Self>) -> SampleGrid;

    /// Returns the grid back unchanged when its depth is not `Self::DEPTH`.
    fn from_sample_grid(grid: SampleGrid) -> Result<PixelGrid<Self>, SampleGrid>;
}

macro_rules! impl_sample {
    ($t:ty, $wide:ty, $depth:ident) => {
        impl Sample for $t {
            const DEPTH: SampleDepth = SampleDepth::$depth;

            fn average(a: Self, b: Self, rounding: MedianRounding) -> Self {
                let sum = <$wide>::from(a) + <$wide>::from(b);
                let avg = match rounding {
                    MedianRounding::Floor => sum / 2,
                    MedianRounding::Nearest => (sum + 1) / 2,
                };
                // avg <= max(a, b), so it always fits
                avg as $t
            }

            fn into_sample_grid(grid: PixelGrid<Self>) -> SampleGrid {
                SampleGrid::$depth(grid)
            }

            fn from_sample_grid(grid: SampleGrid) -> Result<PixelGrid<Self>, SampleGrid> {
                match grid {
                    SampleGrid::$depth(grid) => Ok(grid),
                    other => Err(other),
                }
            }
        }
    };
}

impl_sample!(u8, u16, Eight);
impl_sample!(u16, u32, Sixteen);

/// A decoded image whose sample depth is only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleGrid {
    Eight(PixelGrid<u8>),
    Sixteen(PixelGrid<u16>),
}

impl SampleGrid {
    pub fn depth(&self) -> SampleDepth {
        match self {
            SampleGrid::Eight(_) => SampleDepth::Eight,
            SampleGrid::Sixteen(_) => SampleDepth::Sixteen,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            SampleGrid::Eight(grid) => grid.dimensions(),
            SampleGrid::Sixteen(grid) => grid.dimensions(),
        }
    }
}

impl From<PixelGrid<u8>> for SampleGrid {
    fn from(grid: PixelGrid<u8>) -> Self {
        SampleGrid::Eight(grid)
    }
}

impl From<PixelGrid<u16>> for SampleGrid {
    fn from(grid: PixelGrid<u16>) -> Self {
        SampleGrid::Sixteen(grid)
    }
}
