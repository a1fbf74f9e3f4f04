//! Core utilities for the faststart project generator.
//!
//! This crate owns the file writer: everything the generator produces is
//! handed to it as a path and a body of text.

mod file;

pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
