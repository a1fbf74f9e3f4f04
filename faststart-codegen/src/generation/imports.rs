//! Import collection utilities.

use indexmap::{IndexMap, IndexSet};

/// Tracks imports and deduplicates them.
///
/// Both modules and symbols keep insertion order, so the rendered import
/// block only depends on the order fragments were added in.
///
/// # Example
///
/// ```
/// use faststart_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("fastapi", "APIRouter");
/// imports.add("fastapi", "Depends");
/// imports.add("app.db.database", "get_db");
/// imports.add("fastapi", "APIRouter");
///
/// let modules: Vec<_> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["fastapi", "app.db.database"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> symbols in first-seen order
    imports: IndexMap<String, IndexSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add several symbols from one module, in order.
    pub fn add_all<'a>(&mut self, module: &str, symbols: impl IntoIterator<Item = &'a str>) {
        let entry = self.imports.entry(module.to_string()).or_default();
        entry.extend(symbols.into_iter().map(str::to_string));
    }

    /// Add a module import without specific symbols.
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
