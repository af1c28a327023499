//! Median composite configuration types

use std::path::Path;

/// How the two central samples of an even-sized group are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianRounding {
    /// `(a + b) / 2`, rounding down
    #[default]
    Floor,
    /// `(a + b + 1) / 2`, rounding half up
    Nearest,
}

/// Container format for the composite image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Tiff,
}

impl OutputFormat {
    /// Picks the format from a file extension, case-insensitively.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            _ => None,
        }
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression, fast level
    Deflate,
}

/// Configuration for median compositing
#[derive(Debug, Clone)]
pub struct CompositeConfig {
    /// Rounding applied when averaging the two central samples
    pub rounding: MedianRounding,
    /// Format the composite is encoded in
    pub output_format: OutputFormat,
    /// Compression method to use for TIFF output
    pub compression: TiffCompression,
    /// Predictor value for TIFF compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to validate decoded image dimensions before compositing
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validation is on
    pub max_dimension: Option<usize>,
    /// Stop a batch at the first failed work unit
    pub fail_fast: bool,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            rounding: MedianRounding::Floor,
            output_format: OutputFormat::Png,
            compression: TiffCompression::Lzw,
            predictor: Some(2),
            validate_dimensions: true,
            max_dimension: Some(50000),
            fail_fast: false,
        }
    }
}

impl CompositeConfig {
    pub fn builder() -> CompositeConfigBuilder {
        CompositeConfigBuilder::default()
    }
}

/// Builder for CompositeConfig
#[derive(Default)]
pub struct CompositeConfigBuilder {
    rounding: Option<MedianRounding>,
    output_format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    fail_fast: Option<bool>,
}

impl CompositeConfigBuilder {
    pub fn rounding(mut self, rounding: MedianRounding) -> Self {
        self.rounding = Some(rounding);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn fail_fast(mut self, enable: bool) -> Self {
        self.fail_fast = Some(enable);
        self
    }

    pub fn build(self) -> CompositeConfig {
        let default = CompositeConfig::default();
        CompositeConfig {
            rounding: self.rounding.unwrap_or(default.rounding),
            output_format: self.output_format.unwrap_or(default.output_format),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            fail_fast: self.fail_fast.unwrap_or(default.fail_fast),
        }
    }
}
