//! FastAPI router generation for faststart.
//!
//! Given a [`GenerationConfig`](faststart_config::GenerationConfig), the
//! [`Generator`] composes the `app/api/v1` package of a FastAPI project:
//!
//! | File | Emitted |
//! |---|---|
//! | `app/api/v1/endpoints.py` | always |
//! | `app/api/v1/auth.py` | when authentication is enabled |
//! | `app/api/v1/__init__.py` | always |
//!
//! Each file is assembled from [`fragments`] chosen by project type, auth
//! mode and sync/async database access.
//!
//! # Example
//!
//! ```
//! use faststart_codegen_python::{Generator, LanguageCodegen};
//! use faststart_config::{AuthType, GenerationConfig, ProjectType};
//!
//! let config = GenerationConfig::new("shop")?
//!     .with_project_type(ProjectType::MlApi)
//!     .with_auth(AuthType::Jwt);
//!
//! let registry = Generator::new(&config).compose();
//! assert_eq!(
//!     registry.paths(),
//!     ["app/api/v1/endpoints.py", "app/api/v1/auth.py", "app/api/v1/__init__.py"]
//! );
//! # Ok::<(), Box<faststart_config::Error>>(())
//! ```

mod generator;
mod idiom;
mod py_file;

pub mod ast;
pub mod files;
pub mod fragments;

pub use ast::{Function, Param, Route, render_imports};
pub use faststart_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use idiom::IdiomSet;
pub use py_file::{Fragment, PyFile};
