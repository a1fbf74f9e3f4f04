//! Language-specific generator abstractions.

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
