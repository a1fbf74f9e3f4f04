//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Project name.
    pub project_name: String,
    /// Resolved project type identifier.
    pub project_type: String,
    /// Resolved auth type identifier.
    pub auth: String,
    /// Whether async database access is enabled.
    pub is_async: bool,
    /// Relative paths that `bake` would write.
    pub files: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value_indented("name", &self.project_name);
        out.key_value_indented("type", &self.project_type);
        out.key_value_indented("auth", &self.auth);
        out.key_value_indented("async", if self.is_async { "true" } else { "false" });
        out.newline();

        out.section(&format!(
            "  {} file{}",
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        ));
        for file in &self.files {
            out.list_item(file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("faststart.toml"),
            project_name: "demo".to_string(),
            project_type: "generic".to_string(),
            auth: "none".to_string(),
            is_async: false,
            files: vec![
                "app/api/v1/endpoints.py".to_string(),
                "app/api/v1/__init__.py".to_string(),
            ],
            warnings: vec![],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "✓ faststart.toml is valid");
        assert!(out.lines.contains(&"  auth: none".to_string()));
        assert!(out.lines.contains(&"  2 files:".to_string()));
        assert_eq!(out.lines.last().map(String::as_str), Some("  - app/api/v1/__init__.py"));
    }
}
