use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the manifest text and its filename so error factories don't need
/// both passed at every call site.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error pointing at a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    pub fn invalid_project_type(
        &self,
        value: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidProjectType {
            src: self.named_source(),
            span: Some(span.into()),
            value: value.into(),
        })
    }

    pub fn invalid_auth_type(
        &self,
        value: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAuthType {
            src: self.named_source(),
            span: Some(span.into()),
            value: value.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'faststart init <name>' to create a new project"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse faststart.toml")]
    #[diagnostic(code(faststart::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown project type '{value}'")]
    #[diagnostic(
        code(faststart::invalid_project_type),
        help("valid project types are: generic, ml_api, microservice")
    )]
    InvalidProjectType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown project type")]
        span: Option<SourceSpan>,
        value: String,
    },

    #[error("unknown auth type '{value}'")]
    #[diagnostic(
        code(faststart::invalid_auth_type),
        help("valid auth types are: none, jwt, oauth2")
    )]
    InvalidAuthType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown auth type")]
        span: Option<SourceSpan>,
        value: String,
    },

    #[error("{message}")]
    #[diagnostic(code(faststart::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid project name '{name}'")]
    #[diagnostic(
        code(faststart::invalid_name),
        help("{reason}. The name is embedded in generated string literals.")
    )]
    InvalidName { name: String, reason: String },
}

impl Error {
    /// Create an invalid name error for configurations built in code.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        })
    }
}
