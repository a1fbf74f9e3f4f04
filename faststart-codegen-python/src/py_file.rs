//! PyFile abstraction for structured Python module generation.
//!
//! A module is a docstring, an import block, module-level statements and a
//! list of top-level definitions. Producers contribute [`Fragment`]s which
//! are merged in order.

use faststart_codegen::{CodeBuilder, CodeFragment, ImportCollector, Indent, Renderable};

use crate::ast::render_imports;

/// Imports plus top-level definitions contributed by one producer.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub imports: ImportCollector,
    pub definitions: Vec<Vec<CodeFragment>>,
}

impl Fragment {
    /// An empty fragment: contributes nothing to the file.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn import(mut self, module: &str, symbol: &str) -> Self {
        self.imports.add(module, symbol);
        self
    }

    /// Append another fragment's imports and definitions.
    pub fn merged(mut self, other: Fragment) -> Self {
        self.imports.merge(&other.imports);
        self.definitions.extend(other.definitions);
        self
    }

    /// Add a top-level definition (function, assignment, ...).
    pub fn define<R: Renderable>(mut self, node: R) -> Self {
        self.definitions.push(node.to_fragments());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.definitions.is_empty()
    }
}

/// A structured representation of a Python module.
///
/// # Example
///
/// ```
/// use faststart_codegen_python::PyFile;
///
/// let code = PyFile::new()
///     .docstring("Example")
///     .import("fastapi", "APIRouter")
///     .statement("router = APIRouter()")
///     .render();
///
/// assert_eq!(
///     code,
///     "\"\"\"\nExample\n\"\"\"\n\nfrom fastapi import APIRouter\n\nrouter = APIRouter()\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PyFile {
    docstring: Option<String>,
    imports: ImportCollector,
    statements: Vec<CodeFragment>,
    definitions: Vec<Vec<CodeFragment>>,
}

impl PyFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module docstring, rendered on its own lines between triple quotes.
    pub fn docstring(mut self, text: impl Into<String>) -> Self {
        self.docstring = Some(text.into());
        self
    }

    pub fn import(mut self, module: &str, symbol: &str) -> Self {
        self.imports.add(module, symbol);
        self
    }

    pub fn imports(mut self, imports: &ImportCollector) -> Self {
        self.imports.merge(imports);
        self
    }

    /// Module-level statement emitted directly after the imports.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.statements.push(CodeFragment::line(line));
        self
    }

    /// Add a top-level definition.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.definitions.push(node.to_fragments());
        self
    }

    /// Merge a producer's fragment: imports first, then its definitions.
    pub fn merge(mut self, fragment: Fragment) -> Self {
        self.imports.merge(&fragment.imports);
        self.definitions.extend(fragment.definitions);
        self
    }

    /// Merge several fragments in order.
    pub fn merge_all(self, fragments: impl IntoIterator<Item = Fragment>) -> Self {
        fragments.into_iter().fold(self, PyFile::merge)
    }

    pub fn is_empty(&self) -> bool {
        self.docstring.is_none()
            && self.imports.is_empty()
            && self.statements.is_empty()
            && self.definitions.is_empty()
    }

    /// Render with PEP 8 layout: one blank line between sections, two
    /// before every top-level definition.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::PYTHON);

        if let Some(doc) = &self.docstring {
            builder.push_line("\"\"\"").push_line(doc).push_line("\"\"\"");
        }

        let imports = render_imports(&self.imports);
        let sections = [imports.as_slice(), self.statements.as_slice()];
        for section in sections.into_iter().filter(|s| !s.is_empty()) {
            if !builder.is_empty() {
                builder.push_blank();
            }
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }

        for definition in &self.definitions {
            if !builder.is_empty() {
                builder.push_blanks(2);
            }
            for fragment in definition {
                builder.apply_fragment(fragment);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Function;

    #[test]
    fn test_empty_file() {
        let file = PyFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_definitions_separated_by_two_blank_lines() {
        let code = PyFile::new()
            .statement("router = APIRouter()")
            .add(Function::new("a"))
            .add(Function::new("b"))
            .render();

        assert_eq!(
            code,
            "router = APIRouter()\n\n\ndef a():\n    pass\n\n\ndef b():\n    pass\n"
        );
    }

    #[test]
    fn test_merge_keeps_import_order_and_dedups() {
        let first = Fragment::empty()
            .import("fastapi", "APIRouter")
            .define(Function::new("a"));
        let second = Fragment::empty()
            .import("fastapi", "APIRouter")
            .import("app.db.database", "get_db")
            .define(Function::new("b"));

        let code = PyFile::new().merge(first).merge(second).render();

        assert!(code.starts_with(
            "from fastapi import APIRouter\nfrom app.db.database import get_db\n\n\ndef a():"
        ));
        assert!(code.ends_with("def b():\n    pass\n"));
    }

    #[test]
    fn test_empty_fragment_changes_nothing() {
        let base = PyFile::new().statement("x = 1");
        assert!(Fragment::empty().is_empty());
        assert_eq!(
            base.clone().merge(Fragment::empty()).render(),
            base.render()
        );
    }
}
