//! Configuration for the faststart project generator.
//!
//! A generation run is driven by a [`GenerationConfig`], either built in code
//! or loaded from a `faststart.toml` manifest:
//!
//! ```toml
//! [project]
//! name = "my_api"
//! type = "ml_api"
//! auth = "jwt"
//! async = true
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod kinds;
mod manifest;

pub use config::{GenerationConfig, validate_project_name};
pub use error::{Error, Result};
pub use kinds::{AuthType, ProjectType};
pub use manifest::{FaststartToml, MANIFEST_FILE, Manifest, ProjectSection};
