//! Python import rendering.

use faststart_codegen::{CodeFragment, ImportCollector};

/// Render collected imports as Python import statements.
///
/// Modules with symbols become `from module import a, b`; modules without
/// become `import module`. Order is the collector's insertion order.
pub fn render_imports(imports: &ImportCollector) -> Vec<CodeFragment> {
    imports
        .iter()
        .map(|(module, symbols)| {
            if symbols.is_empty() {
                CodeFragment::line(format!("import {}", module))
            } else {
                let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                CodeFragment::line(format!("from {} import {}", module, symbols.join(", ")))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_import() {
        let mut imports = ImportCollector::new();
        imports.add_all("fastapi", ["APIRouter", "Depends"]);

        assert_eq!(
            render_imports(&imports),
            vec![CodeFragment::line("from fastapi import APIRouter, Depends")]
        );
    }

    #[test]
    fn test_plain_and_relative_imports() {
        let mut imports = ImportCollector::new();
        imports.add_module("logging");
        imports.add(".endpoints", "router as endpoints_router");

        assert_eq!(
            render_imports(&imports),
            vec![
                CodeFragment::line("import logging"),
                CodeFragment::line("from .endpoints import router as endpoints_router"),
            ]
        );
    }
}
