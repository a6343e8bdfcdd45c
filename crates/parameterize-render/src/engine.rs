//! Tera template engine wrapper.

use std::error::Error;

use tera::Tera;

use crate::filters;
use crate::namespace::Namespace;

/// Renders template sources against a [`Namespace`].
///
/// Autoescaping is off for every file type: the output is source code, not
/// HTML.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create an engine with the custom filters registered.
    pub fn new() -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        filters::register(&mut tera);
        Self { tera }
    }

    /// Compile `source` under `name` and render it.
    ///
    /// Both compile and render failures come back as the Tera error; see
    /// [`error_trace`] for printing them.
    pub fn render(
        &mut self,
        name: &str,
        source: &str,
        namespace: &Namespace,
    ) -> tera::Result<String> {
        self.tera.add_raw_template(name, source)?;
        let context = namespace.to_context()?;
        self.tera.render(name, &context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-line report of a template error and every error that caused it.
pub fn error_trace(err: &tera::Error) -> String {
    let mut trace = format!("template error: {err}");
    let mut cause = err.source();
    while let Some(inner) = cause {
        trace.push_str(&format!("\n  caused by: {inner}"));
        cause = inner.source();
    }
    trace
}
