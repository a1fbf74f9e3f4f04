//! Bake operation - router generation from configuration.

use eyre::{Context, Result};
use faststart_codegen_python::{Generator, LanguageCodegen};
use faststart_config::GenerationConfig;

use crate::reports::{BakeReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Composes the API files for `config` and writes them under its output
/// root, or collects them for preview.
pub fn bake(config: &GenerationConfig, opts: BakeOptions) -> Result<BakeReport> {
    let generator = Generator::new(config);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(config.output_root())
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: config.output_root().to_path_buf(),
            written: gen_result.written,
            skipped: gen_result.skipped,
        })
    };

    Ok(BakeReport {
        project_name: config.project_name().to_string(),
        project_type: config.project_type().to_string(),
        auth: config.auth_type().to_string(),
        is_async: config.is_async(),
        warnings: super::stale_files(config),
        result,
    })
}
