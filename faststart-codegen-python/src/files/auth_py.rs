use std::path::{Path, PathBuf};

use faststart_config::GenerationConfig;
use faststart_core::{FileRules, GeneratedFile};

use crate::{PyFile, fragments, idiom::IdiomSet};

/// `app/api/v1/auth.py`: token login, registration and profile routes.
///
/// Only emitted when authentication is enabled.
#[derive(Debug, Clone)]
pub struct AuthPy {
    pub idiom: IdiomSet,
}

impl AuthPy {
    pub const PATH: &'static str = "app/api/v1/auth.py";

    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            idiom: IdiomSet::for_mode(config.is_async()),
        }
    }
}

impl GeneratedFile for AuthPy {
    fn path(&self, base: &Path) -> PathBuf {
        super::api_path(base, "auth.py")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        PyFile::new()
            .docstring("Authentication Endpoints")
            .merge(fragments::auth::router_imports(&self.idiom))
            .statement(fragments::ROUTER_STATEMENT)
            .merge(fragments::auth::endpoints(&self.idiom))
            .render()
    }
}
