//! Work unit discovery module
//!
//! Finds the groups of frames to composite and where each composite goes.

mod glob_discovery;

#[cfg(test)]
mod tests;

pub use glob_discovery::{
    GlobDiscovery,
    DEFAULT_GROUP_PATTERN,
    DEFAULT_MEMBER_PATTERN,
    DEFAULT_OUTPUT_FILE_NAME,
};

use std::path::PathBuf;

/// One group of member images and the destination of its composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkUnit {
    pub members: Vec<PathBuf>,
    pub output: PathBuf,
}

impl WorkUnit {
    pub fn new(members: Vec<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            members,
            output: output.into(),
        }
    }
}
