//! Pixel and pixel grid types

use std::ops::Index;

use crate::image_pipeline::common::error::{PipelineError, Result};

/// One RGB pixel. Channels are independent unsigned samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Pixel<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> Pixel<T> {
    pub const fn new(red: T, green: T, blue: T) -> Self {
        Self { red, green, blue }
    }
}

impl<T: Copy> Pixel<T> {
    /// Same value in all three channels.
    pub const fn gray(value: T) -> Self {
        Self { red: value, green: value, blue: value }
    }

    pub fn channels(&self) -> [T; 3] {
        [self.red, self.green, self.blue]
    }
}

/// A row-major grid of `width * height` pixels.
///
/// Both dimensions are at least 1 and the pixel count always matches them;
/// every constructor checks this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<T> {
    width: usize,
    height: usize,
    pixels: Vec<Pixel<T>>,
}

impl<T: Copy> PixelGrid<T> {
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel<T>>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn filled(width: usize, height: usize, pixel: Pixel<T>) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(PipelineError::InvalidDimensions(width, height))?;
        Self::new(width, height, vec![pixel; len])
    }

    /// Builds a grid from `[r, g, b, r, g, b, ...]` samples.
    pub fn from_interleaved(width: usize, height: usize, samples: &[T]) -> Result<Self> {
        if samples.len() % 3 != 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        let pixels = samples
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Caller guarantees the geometry invariant.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Pixel<T>>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(pixels.len(), width * height);
        Self { width, height, pixels }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Pixel<T>] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel<T>> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(self.pixels[y * self.width + x])
        }
    }

    pub fn to_interleaved(&self) -> Vec<T> {
        self.pixels.iter().flat_map(|p| p.channels()).collect()
    }
}

impl<T> Index<(usize, usize)> for PixelGrid<T> {
    type Output = Pixel<T>;
    fn index(&self, (x, y): (usize, usize)) -> &Pixel<T> {
        if x >= self.width || y >= self.height {
            panic!("Index out of range: {:?} (size {:?})", (x, y), (self.width, self.height))
        }
        &self.pixels[y * self.width + x]
    }
}
