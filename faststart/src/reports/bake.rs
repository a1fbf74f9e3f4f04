//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from router generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Project name from the configuration.
    pub project_name: String,

    /// Resolved project type identifier.
    pub project_type: String,

    /// Resolved auth type identifier.
    pub auth: String,

    /// Whether async database access was generated.
    pub is_async: bool,

    /// Warnings about the output directory.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written, relative to the output directory.
    pub written: Vec<String>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn mode(&self) -> &'static str {
        if self.is_async { "async" } else { "sync" }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "{} ({}, auth: {}, {})",
            self.project_name,
            self.project_type,
            self.auth,
            self.mode()
        ));
        out.newline();

        out.section(&format!("Files ({})", written.written.len() + written.skipped.len()));
        for path in &written.written {
            out.added_item(path);
        }
        for path in &written.skipped {
            out.unchanged_item(path);
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: GenerationResult) -> BakeReport {
        BakeReport {
            project_name: "demo".to_string(),
            project_type: "ml_api".to_string(),
            auth: "jwt".to_string(),
            is_async: true,
            warnings: vec!["stale".to_string()],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("out"),
            written: vec!["app/api/v1/endpoints.py".to_string()],
            skipped: vec![],
        }))
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: stale",
                "demo (ml_api, auth: jwt, async)",
                "",
                "Files (1):",
                "  + app/api/v1/endpoints.py",
                "",
                "Generated: out",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "app/api/v1/__init__.py".to_string(),
                content: "from .endpoints import router\n".to_string(),
            }],
        }))
        .render(&mut out);

        assert_eq!(out.lines[1], "── app/api/v1/__init__.py ──");
        assert_eq!(out.lines.last().map(String::as_str), Some("1 files would be generated"));
    }
}
