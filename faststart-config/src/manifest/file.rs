use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a faststart.toml file with both raw content and parsed manifest.
pub struct FaststartToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl FaststartToml {
    /// Open and parse a faststart.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("faststart.toml");
        std::fs::write(&path, "[project]\nname = \"demo\"\nasync = true\n").unwrap();

        let file = FaststartToml::open(&path).unwrap();

        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("demo"));
        assert_eq!(file.manifest().project.name, "demo");
        assert!(file.manifest().project.is_async);
    }
}
