use std::path::{Path, PathBuf};

use faststart_config::{AuthType, GenerationConfig, ProjectType};
use faststart_core::{FileRules, GeneratedFile};

use crate::{PyFile, fragments, idiom::IdiomSet};

/// `app/api/v1/endpoints.py`: the main router.
#[derive(Debug, Clone)]
pub struct EndpointsPy {
    pub project_name: String,
    pub project_type: ProjectType,
    pub auth: AuthType,
    pub idiom: IdiomSet,
}

impl EndpointsPy {
    pub const PATH: &'static str = "app/api/v1/endpoints.py";

    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            project_name: config.project_name().to_string(),
            project_type: config.project_type(),
            auth: config.auth_type(),
            idiom: IdiomSet::for_mode(config.is_async()),
        }
    }
}

impl GeneratedFile for EndpointsPy {
    fn path(&self, base: &Path) -> PathBuf {
        super::api_path(base, "endpoints.py")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        PyFile::new()
            .docstring("Main API Endpoints")
            .merge_all([
                fragments::fastapi(),
                fragments::auth::dependency(self.auth),
                fragments::database::imports(&self.idiom),
                fragments::base::endpoints(&self.project_name),
                fragments::project::endpoints(
                    self.project_type,
                    &self.project_name,
                    fragments::auth::current_user_param(self.auth),
                ),
            ])
            .statement(fragments::ROUTER_STATEMENT)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(project_type: ProjectType, auth: AuthType, is_async: bool) -> GenerationConfig {
        GenerationConfig::new("demo")
            .unwrap()
            .with_project_type(project_type)
            .with_auth(auth)
            .with_async(is_async)
    }

    #[test]
    fn test_generic_sync_without_auth() {
        let code = EndpointsPy::new(&config(ProjectType::Generic, AuthType::None, false)).render();

        assert_eq!(
            code,
            r#""""
Main API Endpoints
"""

from fastapi import APIRouter, Depends, HTTPException, status
from app.db.database import get_db
from sqlalchemy.orm import Session
from app.models.auth import User

router = APIRouter()


@router.get("/")
async def root():
    """Root endpoint"""
    return {"message": "Welcome to demo API", "version": "1.0.0"}


@router.get("/health")
async def health_check():
    """Health check endpoint"""
    return {"status": "healthy", "service": "demo"}
"#
        );
    }

    #[test]
    fn test_auth_import_precedes_database_imports() {
        let code = EndpointsPy::new(&config(ProjectType::Generic, AuthType::Jwt, true)).render();

        assert!(code.contains(
            "status\nfrom app.core.security import get_current_user\nfrom app.db.database import get_db\nfrom sqlalchemy.ext.asyncio import AsyncSession\n"
        ));
    }

    #[test]
    fn test_path() {
        let file = EndpointsPy::new(&config(ProjectType::Generic, AuthType::None, false));
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/app/api/v1/endpoints.py")
        );
    }
}
