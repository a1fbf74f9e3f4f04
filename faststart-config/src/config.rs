//! The resolved configuration of one generation run.

use std::path::{Path, PathBuf};

use crate::{AuthType, Error, ProjectType, Result};

/// Immutable input to the generators.
///
/// Built either from a [`Manifest`](crate::Manifest) or in code:
///
/// ```
/// use faststart_config::{AuthType, GenerationConfig, ProjectType};
///
/// let config = GenerationConfig::new("my_api")?
///     .with_project_type(ProjectType::MlApi)
///     .with_auth(AuthType::Jwt)
///     .with_async(true);
///
/// assert!(config.auth_type().is_enabled());
/// # Ok::<(), Box<faststart_config::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    project_name: String,
    output_root: PathBuf,
    project_type: ProjectType,
    auth_type: AuthType,
    is_async: bool,
}

impl GenerationConfig {
    /// Create a config for a generic, sync, unauthenticated project rooted at `.`.
    pub fn new(project_name: impl Into<String>) -> Result<Self> {
        let project_name = project_name.into();
        if let Some(reason) = validate_project_name(&project_name) {
            return Err(Error::invalid_name(project_name, reason));
        }

        Ok(Self {
            project_name,
            output_root: PathBuf::from("."),
            project_type: ProjectType::default(),
            auth_type: AuthType::default(),
            is_async: false,
        })
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn with_auth(mut self, auth_type: AuthType) -> Self {
        self.auth_type = auth_type;
        self
    }

    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }
}

/// Check that a project name can be embedded in generated string literals.
///
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_project_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("name cannot be empty");
    }
    if name.contains('"') || name.contains('\\') {
        return Some("name cannot contain quotes or backslashes");
    }
    if name.chars().any(char::is_control) {
        return Some("name cannot contain control characters");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::new("demo").unwrap();
        assert_eq!(config.project_name(), "demo");
        assert_eq!(config.output_root(), Path::new("."));
        assert_eq!(config.project_type(), ProjectType::Generic);
        assert_eq!(config.auth_type(), AuthType::None);
        assert!(!config.is_async());
    }

    #[test]
    fn test_builder_methods() {
        let config = GenerationConfig::new("demo")
            .unwrap()
            .with_output_root("out")
            .with_project_type(ProjectType::Microservice)
            .with_auth(AuthType::OAuth2)
            .with_async(true);

        assert_eq!(config.output_root(), Path::new("out"));
        assert_eq!(config.project_type(), ProjectType::Microservice);
        assert_eq!(config.auth_type(), AuthType::OAuth2);
        assert!(config.is_async());
    }

    #[test]
    fn test_rejects_unusable_names() {
        assert!(GenerationConfig::new("").is_err());
        assert!(GenerationConfig::new("   ").is_err());
        assert!(GenerationConfig::new("my \"api\"").is_err());
        assert!(GenerationConfig::new("back\\slash").is_err());
        assert!(GenerationConfig::new("two\nlines").is_err());
    }

    #[test]
    fn test_accepts_display_names() {
        assert!(GenerationConfig::new("My Shop API").is_ok());
        assert!(GenerationConfig::new("orders-service").is_ok());
    }
}
