//! Median composite pipeline module
//!
//! This module reduces groups of same-sized frames into one per-channel
//! median image, with separate modules for pixel grids, the median kernel,
//! image codecs, group discovery, and batch orchestration.

pub mod grid;
pub mod median;
pub mod codec;
pub mod discovery;
pub mod config;
pub mod conversions;
pub mod common;

pub use common::{
    PipelineError,
    Result,
};

pub use grid::{
    Pixel,
    PixelGrid,
    Sample,
    SampleDepth,
    SampleGrid,
};

pub use median::{
    compose,
    median,
    CompositionError,
    MedianCompositor,
};

pub use codec::{
    ImageReader,
    ImageWriter,
    StandardImageReader,
    StandardImageWriter,
};

pub use discovery::{
    GlobDiscovery,
    WorkUnit,
};

pub use config::{
    CompositeConfig,
    CompositeConfigBuilder,
    MedianRounding,
    OutputFormat,
    TiffCompression,
};

pub use conversions::{
    BatchReport,
    MedianCompositePipeline,
    PipelineTimings,
    StepTiming,
    Timer,
};
