//! Shared code generation utilities for the faststart project generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `faststart-codegen-python`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector, FileRegistry, etc.)
//! - [`language`] - The LanguageCodegen trait implemented by each generator
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::{FileCategory, FileEntry, FileRegistry, ImportCollector, WriteStats};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
