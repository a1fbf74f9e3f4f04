//! The faststart.toml written by `faststart init`.

use std::path::{Path, PathBuf};

use faststart_config::{AuthType, GenerationConfig, MANIFEST_FILE, ProjectType};
use faststart_core::{FileRules, GeneratedFile, Overwrite};

/// The faststart.toml configuration file.
pub struct FaststartTomlFile {
    pub name: String,
    pub project_type: ProjectType,
    pub auth: AuthType,
    pub is_async: bool,
    pub overwrite: Overwrite,
}

impl FaststartTomlFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: ProjectType::default(),
            auth: AuthType::default(),
            is_async: false,
            overwrite: Overwrite::IfMissing,
        }
    }

    /// Mirror every axis of an existing configuration.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.project_name())
            .with_project_type(config.project_type())
            .with_auth(config.auth_type())
            .with_async(config.is_async())
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn with_auth(mut self, auth: AuthType) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl GeneratedFile for FaststartTomlFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
name = "{}"

# Kind of application: generic, ml_api, microservice
type = "{}"

# Authentication: none, jwt, oauth2
auth = "{}"

# Use AsyncSession and awaited database calls in generated endpoints
async = {}
"#,
            self.name, self.project_type, self.auth, self.is_async
        )
    }
}
