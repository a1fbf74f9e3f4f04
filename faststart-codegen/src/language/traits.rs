//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::generation::{FileEntry, FileRegistry};

/// Trait for language-specific code generators.
///
/// Implementors only describe *what* to emit via [`compose`](Self::compose);
/// previewing and writing are shared.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "python")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "py")
    fn file_extension(&self) -> &'static str;

    /// Build the complete output set. Pure: no I/O, same input, same output.
    fn compose(&self) -> FileRegistry;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile> {
        self.compose().into_iter().map(PreviewFile::from).collect()
    }

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let stats = self.compose().write_all(output_dir)?;
        Ok(GenerateResult {
            written: stats.written_paths,
            skipped: stats.skipped_paths,
        })
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<String>,
    /// Files left untouched because they already existed
    pub skipped: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl From<FileEntry> for PreviewFile {
    fn from(entry: FileEntry) -> Self {
        Self {
            path: entry.path,
            content: entry.content,
        }
    }
}
