//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Fragments are the unit of composition: every producer turns its piece of
//! the configuration into a list of fragments, and a file concatenates them
//! in order.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A header line followed by an indented body (Python `def ...:`, `try:`).
    Block {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Split multi-line text into line fragments.
    ///
    /// Empty lines become [`CodeFragment::Blank`] so they carry no indentation.
    pub fn lines(text: &str) -> Vec<Self> {
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    Self::Blank
                } else {
                    Self::Line(line.to_string())
                }
            })
            .collect()
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_maps_empty_lines_to_blank() {
        let fragments = CodeFragment::lines("a = 1\n\nb = 2");
        assert_eq!(
            fragments,
            vec![
                CodeFragment::line("a = 1"),
                CodeFragment::Blank,
                CodeFragment::line("b = 2"),
            ]
        );
    }

    #[test]
    fn test_vec_renderable_concatenates_in_order() {
        struct Stmt(&'static str);
        impl Renderable for Stmt {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::line(self.0)]
            }
        }

        let stmts = vec![Stmt("x = 1"), Stmt("y = 2")];
        assert_eq!(
            stmts.to_fragments(),
            vec![CodeFragment::line("x = 1"), CodeFragment::line("y = 2")]
        );
    }
}
