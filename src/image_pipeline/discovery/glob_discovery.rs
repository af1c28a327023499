use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::discovery::WorkUnit;

pub const DEFAULT_GROUP_PATTERN: &str = "match_*";
pub const DEFAULT_MEMBER_PATTERN: &str = "out_*.png";
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "median.png";

/// Discovers work units from glob patterns.
///
/// Every directory matching `group_pattern` is a group; its members are the
/// files inside it matching `member_pattern`, and the composite is written
/// to `output_file_name` in the same directory.
#[derive(Debug, Clone)]
pub struct GlobDiscovery {
    group_pattern: String,
    member_pattern: String,
    output_file_name: String,
}

impl Default for GlobDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_PATTERN, DEFAULT_MEMBER_PATTERN, DEFAULT_OUTPUT_FILE_NAME)
    }
}

impl GlobDiscovery {
    pub fn new(
        group_pattern: impl Into<String>,
        member_pattern: impl Into<String>,
        output_file_name: impl Into<String>,
    ) -> Self {
        Self {
            group_pattern: group_pattern.into(),
            member_pattern: member_pattern.into(),
            output_file_name: output_file_name.into(),
        }
    }

    /// Resolves `group_pattern` relative to `root` instead of the working directory.
    pub fn rooted_at(mut self, root: impl AsRef<Path>) -> Result<Self> {
        let root = path_to_str(root.as_ref())?;
        self.group_pattern = format!(
            "{}/{}",
            glob::Pattern::escape(root.trim_end_matches('/')),
            self.group_pattern
        );
        Ok(self)
    }

    /// Lists every work unit, groups and members sorted by path.
    ///
    /// A group without members is still returned; compositing it reports
    /// an empty group instead of silently skipping the directory.
    pub fn discover(&self) -> Result<Vec<WorkUnit>> {
        let mut units = Vec::new();
        for dir in glob_paths(&self.group_pattern)? {
            if !dir.is_dir() {
                debug!("Skipping non-directory match {}", dir.display());
                continue;
            }
            let unit = self.discover_in(&dir)?;
            if unit.members.is_empty() {
                warn!("No files matching {} in {}", self.member_pattern, dir.display());
            }
            units.push(unit);
        }

        info!(
            "Discovered {} groups matching {}",
            units.len(),
            self.group_pattern
        );
        Ok(units)
    }

    /// Builds the work unit for a single group directory.
    pub fn discover_in(&self, dir: &Path) -> Result<WorkUnit> {
        let output = dir.join(&self.output_file_name);
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(path_to_str(dir)?),
            self.member_pattern
        );

        let members: Vec<PathBuf> = glob_paths(&pattern)?
            .into_iter()
            .filter(|path| path.is_file() && *path != output)
            .collect();

        debug!("{}: {} members", dir.display(), members.len());
        Ok(WorkUnit::new(members, output))
    }
}

fn glob_paths(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern)
        .map_err(|e| PipelineError::DiscoveryError(format!("{}: {}", pattern, e)))?;

    let mut found = paths
        .map(|entry| entry.map_err(|e| PipelineError::DiscoveryError(e.to_string())))
        .collect::<Result<Vec<_>>>()?;
    found.sort();
    Ok(found)
}

fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        PipelineError::DiscoveryError(format!("non UTF-8 path: {}", path.display()))
    })
}
