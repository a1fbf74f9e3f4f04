//! Check operation - configuration validation.

use std::path::Path;

use faststart_codegen_python::{Generator, LanguageCodegen};
use faststart_config::GenerationConfig;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The configuration is already valid once it could be built; this resolves
/// the file set it would produce and any leftovers from earlier runs.
pub fn check(config: &GenerationConfig, config_path: &Path) -> CheckReport {
    let registry = Generator::new(config).compose();

    CheckReport {
        config_path: config_path.to_path_buf(),
        project_name: config.project_name().to_string(),
        project_type: config.project_type().to_string(),
        auth: config.auth_type().to_string(),
        is_async: config.is_async(),
        files: registry.paths().into_iter().map(str::to_string).collect(),
        warnings: super::stale_files(config),
    }
}
