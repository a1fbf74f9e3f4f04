//! Python syntax builders.
//!
//! Just enough structure to emit FastAPI modules: import lines, decorated
//! function definitions, and raw statements.

mod function;
mod imports;

pub use function::{Function, Param, Route};
pub use imports::render_imports;
