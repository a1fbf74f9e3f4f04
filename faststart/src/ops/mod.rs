//! Core operations.
//!
//! This module contains the business logic for faststart commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;

pub use bake::{BakeOptions, bake};
pub use check::check;

use faststart_codegen_python::files::AuthPy;
use faststart_config::GenerationConfig;
use faststart_core::GeneratedFile;

/// Files under the output root that the configuration no longer produces
/// but that a previous run left behind.
fn stale_files(config: &GenerationConfig) -> Vec<String> {
    let mut stale = Vec::new();
    if !config.auth_type().is_enabled()
        && AuthPy::new(config).path(config.output_root()).exists()
    {
        stale.push(format!(
            "{} exists but auth is disabled; it is no longer imported and can be deleted",
            AuthPy::PATH
        ));
    }
    stale
}
