//! Manifest types and parsing for faststart.toml files.

mod file;
mod parse;

use std::path::PathBuf;

pub use file::FaststartToml;

use crate::{AuthType, GenerationConfig, ProjectType, Result};

/// Default manifest filename.
pub const MANIFEST_FILE: &str = "faststart.toml";

/// Root manifest for faststart.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// The `[project]` table
    pub project: ProjectSection,
}

/// Project settings, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSection {
    /// Display name interpolated into generated messages
    pub name: String,
    /// Kind of application (`type` key)
    pub project_type: ProjectType,
    /// Authentication scheme (`auth` key)
    pub auth: AuthType,
    /// Async database access (`async` key)
    pub is_async: bool,
}

impl Manifest {
    /// Resolve the manifest into a generation config rooted at `output_root`.
    pub fn to_config(&self, output_root: impl Into<PathBuf>) -> Result<GenerationConfig> {
        Ok(GenerationConfig::new(self.project.name.clone())?
            .with_output_root(output_root)
            .with_project_type(self.project.project_type)
            .with_auth(self.project.auth)
            .with_async(self.project.is_async))
    }
}
