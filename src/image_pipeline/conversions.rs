//! Pipeline conversions module
//!
//! This module contains the orchestration that turns groups of image files
//! into median composites.

mod median_composite;
mod report;
mod timing;


pub use median_composite::MedianCompositePipeline;
pub use report::BatchReport;
pub use timing::{PipelineTimings, StepTiming, Timer};
