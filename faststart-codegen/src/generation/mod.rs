//! Output management for generators.
//!
//! - [`ImportCollector`] - Deduplicated, ordered import tracking
//! - [`FileRegistry`] / [`FileEntry`] - The output set of a generation run
//! - [`FaststartTomlFile`] - The faststart.toml written by `init`

mod imports;
mod manifest_file;
mod registry;

pub use imports::ImportCollector;
pub use manifest_file::FaststartTomlFile;
pub use registry::{FileCategory, FileEntry, FileRegistry, WriteStats};
