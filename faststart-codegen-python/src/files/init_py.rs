use std::path::{Path, PathBuf};

use faststart_config::{AuthType, GenerationConfig};
use faststart_core::{FileRules, GeneratedFile};

use crate::PyFile;

/// `app/api/v1/__init__.py`: the package's public `router`.
///
/// With auth, endpoints and auth routers are composed into a fresh router
/// and the auth one is mounted under `/auth`. Without auth the endpoints
/// router is re-exported as-is.
#[derive(Debug, Clone)]
pub struct InitPy {
    pub auth: AuthType,
}

impl InitPy {
    pub const PATH: &'static str = "app/api/v1/__init__.py";

    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            auth: config.auth_type(),
        }
    }
}

impl GeneratedFile for InitPy {
    fn path(&self, base: &Path) -> PathBuf {
        super::api_path(base, "__init__.py")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let file = PyFile::new().docstring("API v1 Router");

        if !self.auth.is_enabled() {
            return file.import(".endpoints", "router").render();
        }

        file.import("fastapi", "APIRouter")
            .import(".endpoints", "router as endpoints_router")
            .import(".auth", "router as auth_router")
            .statement("router = APIRouter()")
            .statement("router.include_router(endpoints_router)")
            .statement(
                r#"router.include_router(auth_router, prefix="/auth", tags=["authentication"])"#,
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexport_without_auth() {
        let code = InitPy {
            auth: AuthType::None,
        }
        .render();
        assert_eq!(code, "\"\"\"\nAPI v1 Router\n\"\"\"\n\nfrom .endpoints import router\n");
    }

    #[test]
    fn test_mounts_auth_router() {
        let code = InitPy {
            auth: AuthType::OAuth2,
        }
        .render();
        assert!(code.contains("from .auth import router as auth_router\n\nrouter = APIRouter()\n"));
        assert!(code.ends_with(
            "router.include_router(auth_router, prefix=\"/auth\", tags=[\"authentication\"])\n"
        ));
    }
}
