use thiserror::Error;

use crate::image_pipeline::grid::SampleDepth;
use crate::image_pipeline::median::CompositionError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Image {index} has sample depth {found}, expected {expected}")]
    MixedSampleDepth {
        index: usize,
        expected: SampleDepth,
        found: SampleDepth,
    },

    #[error("Failed to discover work units: {0}")]
    DiscoveryError(String),

    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
