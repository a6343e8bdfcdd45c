//! `TEMPLATE:OUTFILE` argument parsing.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RenderError;

/// One template file and the file it renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Template file name, relative to the generator's base directory.
    pub template: PathBuf,
    /// Destination of the rendered text.
    pub output: PathBuf,
}

impl FromStr for TemplateSpec {
    type Err = RenderError;

    /// Parse `"template:output"`. Exactly one `:` is allowed and neither
    /// side may be empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| RenderError::InvalidSpec {
            spec: s.to_string(),
            reason,
        };
        let mut parts = s.split(':');
        let (template, output) = match (parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(o), None) => (t, o),
            (_, None, _) => return Err(invalid("expected TEMPLATE:OUTFILE")),
            _ => return Err(invalid("more than one ':'")),
        };
        if template.is_empty() {
            return Err(invalid("empty template path"));
        }
        if output.is_empty() {
            return Err(invalid("empty output path"));
        }
        Ok(TemplateSpec {
            template: PathBuf::from(template),
            output: PathBuf::from(output),
        })
    }
}

impl std::fmt::Display for TemplateSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.template.display(), self.output.display())
    }
}
