//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use toml::Spanned;

use super::{MANIFEST_FILE, Manifest, ProjectSection};
use crate::{
    AuthType, Error, ProjectType, Result, config::validate_project_name, error::SourceContext,
};

/// Wire shape of faststart.toml; enum values stay spanned until validated.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    project: RawProject,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProject {
    name: Spanned<String>,
    #[serde(rename = "type", default)]
    project_type: Option<Spanned<String>>,
    #[serde(default)]
    auth: Option<Spanned<String>>,
    #[serde(rename = "async", default)]
    is_async: bool,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a faststart.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a faststart.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse and validate a manifest. Fails on the first invalid value.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    let project = raw.project;

    if let Some(reason) = validate_project_name(project.name.get_ref()) {
        return Err(ctx.validation_error_at(
            format!("invalid project name: {}", reason),
            project.name.span(),
        ));
    }

    let project_type = match &project.project_type {
        Some(value) => ProjectType::from_str(value.get_ref())
            .map_err(|_| ctx.invalid_project_type(value.get_ref().as_str(), value.span()))?,
        None => ProjectType::default(),
    };

    let auth = match &project.auth {
        Some(value) => AuthType::from_str(value.get_ref())
            .map_err(|_| ctx.invalid_auth_type(value.get_ref().as_str(), value.span()))?,
        None => AuthType::default(),
    };

    Ok(Manifest {
        project: ProjectSection {
            name: project.name.into_inner(),
            project_type,
            auth,
            is_async: project.is_async,
        },
    })
}
