//! File registration for declarative code generation.
//!
//! Generators register every output as a [`FileEntry`]; the registry is the
//! complete, ordered output set of a run and the only thing that touches the
//! file writer.
//!
//! # Example
//!
//! ```
//! use faststart_codegen::{FileEntry, FileRegistry};
//!
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::generated("app/api/v1/__init__.py", "from .endpoints import router\n"));
//! registry.register(FileEntry::config("faststart.toml", "[project]\nname = \"demo\"\n"));
//!
//! let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
//! assert_eq!(paths, ["faststart.toml", "app/api/v1/__init__.py"]);
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use faststart_core::{FileRules, Overwrite, WriteResult, write_file};

/// Category of generated file, determining generation order and behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Project configuration (faststart.toml). Written first, only if missing.
    Config,
    /// Generated source files. Always overwritten.
    Generated,
}

impl FileCategory {
    /// Get the default overwrite behavior for this category.
    pub fn default_overwrite(&self) -> Overwrite {
        match self {
            FileCategory::Config => Overwrite::IfMissing,
            FileCategory::Generated => Overwrite::Always,
        }
    }
}

/// An entry in the file registry: one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from output directory, `/`-separated.
    pub path: String,
    /// File content.
    pub content: String,
    /// Category determining generation behavior.
    pub category: FileCategory,
    /// Override default overwrite behavior.
    pub overwrite: Option<Overwrite>,
}

impl FileEntry {
    /// Create a new file entry with the given category.
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
            overwrite: None,
        }
    }

    /// Create a config file entry.
    pub fn config(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Config)
    }

    /// Create a generated source file entry.
    pub fn generated(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Generated)
    }

    /// Override the default overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Get the effective overwrite behavior.
    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
            .unwrap_or_else(|| self.category.default_overwrite())
    }

    /// Get the file rules for this entry.
    pub fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite(),
        }
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        self.path
            .split('/')
            .fold(base.to_path_buf(), |path, segment| path.join(segment))
    }

    /// Write this file to disk.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.full_path(base);

        match self.overwrite() {
            Overwrite::Always => {
                write_file(&path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Registry for collecting and managing generated files.
///
/// Entries are yielded in category order (Config -> Generated), and in
/// registration order within a category.
#[derive(Debug, Default, Clone)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        tracing::debug!(path = %entry.path, bytes = entry.content.len(), "registered file");
        self.entries.push(entry);
    }

    /// Get all registered entries, sorted by category.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    /// Look up an entry by relative path.
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Relative paths of all entries, in write order.
    pub fn paths(&self) -> Vec<&str> {
        self.entries().map(|e| e.path.as_str()).collect()
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write all files to the output directory.
    ///
    /// Files are written in category order. The first I/O error aborts the
    /// run and is returned as-is.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    tracing::info!(path = %entry.path, "written");
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Skipped => {
                    tracing::info!(path = %entry.path, "skipped, already exists");
                    stats.skipped_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

impl IntoIterator for FileRegistry {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.entries.sort_by_key(|e| e.category);
        self.entries.into_iter()
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of skipped files.
    pub skipped_paths: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written_paths.len() + self.skipped_paths.len()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_entry_categories() {
        let config = FileEntry::config("faststart.toml", "");
        assert_eq!(config.overwrite(), Overwrite::IfMissing);

        let generated = FileEntry::generated("app/api/v1/endpoints.py", "");
        assert_eq!(generated.overwrite(), Overwrite::Always);

        let forced = FileEntry::config("faststart.toml", "").with_overwrite(Overwrite::Always);
        assert_eq!(forced.rules().overwrite, Overwrite::Always);
    }

    #[test]
    fn test_registry_ordering_is_stable_within_category() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::generated("b.py", ""));
        registry.register(FileEntry::config("faststart.toml", ""));
        registry.register(FileEntry::generated("a.py", ""));

        assert_eq!(registry.paths(), vec!["faststart.toml", "b.py", "a.py"]);
    }

    #[test]
    fn test_full_path_splits_segments() {
        let entry = FileEntry::generated("app/api/v1/auth.py", "");
        let path = entry.full_path(Path::new("root"));
        assert_eq!(
            path,
            Path::new("root").join("app").join("api").join("v1").join("auth.py")
        );
    }

    #[test]
    fn test_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::generated("app/api/v1/__init__.py", "x = 1\n"));
        registry.register(FileEntry::config("faststart.toml", "[project]\n"));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.total(), 2);
        assert_eq!(stats.written_paths, vec!["faststart.toml", "app/api/v1/__init__.py"]);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("app/api/v1/__init__.py")).unwrap(),
            "x = 1\n"
        );
    }

    #[test]
    fn test_config_skipped_if_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("faststart.toml");
        std::fs::write(&path, "user edits").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::config("faststart.toml", "fresh"));
        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.skipped_paths, vec!["faststart.toml"]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "user edits");
    }

    #[test]
    fn test_write_error_propagates() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app"), "not a directory").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::generated("app/api/v1/endpoints.py", ""));

        assert!(registry.write_all(temp.path()).is_err());
    }

    #[test]
    fn test_get_and_into_iter() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::generated("a.py", "a"));
        registry.register(FileEntry::config("c.toml", "c"));

        assert_eq!(registry.get("a.py").map(|e| e.content.as_str()), Some("a"));
        assert!(registry.get("missing.py").is_none());

        let paths: Vec<_> = registry.into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["c.toml", "a.py"]);
    }
}
