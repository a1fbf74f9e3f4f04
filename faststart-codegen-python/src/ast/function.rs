//! Python function definitions and FastAPI route decorators.

use faststart_codegen::{CodeFragment, Renderable};

/// A function parameter: `name: annotation = default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: String,
    annotation: Option<String>,
    default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            default: None,
        }
    }

    /// Shorthand for an annotated parameter without default.
    pub fn typed(name: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self::new(name).annotation(annotation)
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn render(&self) -> String {
        let mut out = self.name.clone();
        if let Some(annotation) = &self.annotation {
            out.push_str(": ");
            out.push_str(annotation);
        }
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }
}

/// A FastAPI route decorator: `@router.post("/token", response_model=Token)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: &'static str,
    path: String,
    kwargs: Vec<(String, String)>,
}

impl Route {
    fn new(method: &'static str, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            kwargs: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("get", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new("post", path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new("put", path)
    }

    /// Add a keyword argument, rendered verbatim as `key=value`.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.kwargs.push((key.into(), value.into()));
        self
    }

    pub fn render(&self) -> String {
        let mut args = vec![format!("\"{}\"", self.path)];
        args.extend(self.kwargs.iter().map(|(k, v)| format!("{}={}", k, v)));
        format!("@router.{}({})", self.method, args.join(", "))
    }
}

/// A top-level `def` / `async def`, optionally decorated with a route.
///
/// Signatures with more than one parameter are split one parameter per line;
/// [`Function::split`] forces that layout for a single parameter too.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    name: String,
    is_async: bool,
    route: Option<Route>,
    params: Vec<Param>,
    docstring: Option<String>,
    body: Vec<CodeFragment>,
    split: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_async: false,
            route: None,
            params: Vec::new(),
            docstring: None,
            body: Vec::new(),
            split: false,
        }
    }

    /// An `async def` handler mounted at `route`.
    pub fn endpoint(name: impl Into<String>, route: Route) -> Self {
        Self::new(name).async_().route(route)
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    /// Put every parameter on its own line even when there is only one.
    pub fn split(mut self) -> Self {
        self.split = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a parameter only if present.
    pub fn param_opt(mut self, param: Option<Param>) -> Self {
        self.params.extend(param);
        self
    }

    pub fn doc(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Set the body from multi-line text, indented relative to the `def`.
    pub fn body(mut self, text: &str) -> Self {
        self.body = CodeFragment::lines(text);
        self
    }

    fn keyword(&self) -> &'static str {
        if self.is_async { "async def" } else { "def" }
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(route) = &self.route {
            fragments.push(CodeFragment::line(route.render()));
        }

        let mut body = Vec::new();
        if let Some(doc) = &self.docstring {
            body.push(CodeFragment::line(format!("\"\"\"{}\"\"\"", doc)));
        }
        body.extend(self.body.iter().cloned());
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }

        if self.params.is_empty() || (self.params.len() == 1 && !self.split) {
            let params = self.params.first().map(Param::render).unwrap_or_default();
            fragments.push(CodeFragment::block(
                format!("{} {}({}):", self.keyword(), self.name, params),
                body,
            ));
        } else {
            fragments.push(CodeFragment::line(format!(
                "{} {}(",
                self.keyword(),
                self.name
            )));
            let last = self.params.len() - 1;
            fragments.push(CodeFragment::indent(
                self.params
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let sep = if i < last { "," } else { "" };
                        CodeFragment::line(format!("{}{}", p.render(), sep))
                    })
                    .collect(),
            ));
            fragments.push(CodeFragment::block("):", body));
        }

        fragments
    }
}
