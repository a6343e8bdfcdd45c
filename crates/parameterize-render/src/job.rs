//! One-shot template generation.
//!
//! A run builds the namespace, reads the template, renders it, and writes
//! the result. Failures split into two tiers:
//!
//! - configuration, template-read, and output-write failures are returned
//!   as [`RenderError`] and end the run;
//! - template compile and render failures are returned as
//!   [`RenderOutcome::Failed`] with a printable trace. The output file is
//!   only opened after rendering succeeds, so it is left untouched.

use std::path::{Path, PathBuf};

use parameterize_hwconfig::HwConfig;

use crate::engine::{error_trace, TemplateEngine};
use crate::error::{RenderError, Result};
use crate::namespace::{generation_date, Namespace, TOOL_NAME};
use crate::spec::TemplateSpec;

/// A template spec resolved against a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateJob {
    /// Path of the template source.
    pub template: PathBuf,
    /// Path the rendered text is written to.
    pub output: PathBuf,
}

impl TemplateJob {
    /// Resolve `spec`. Only the template is relative to `base_dir`; the
    /// output path is used as given.
    pub fn resolve(base_dir: &Path, spec: &TemplateSpec) -> Self {
        Self {
            template: base_dir.join(&spec.template),
            output: spec.output.clone(),
        }
    }

    fn template_name(&self) -> String {
        self.template
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.template.display().to_string())
    }
}

/// How a template job ended when nothing fatal happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The output file was written.
    Written { path: PathBuf, bytes: usize },
    /// The template failed to compile or render.
    Failed { trace: String },
}

impl RenderOutcome {
    /// Whether the output file was written.
    pub fn is_written(&self) -> bool {
        matches!(self, RenderOutcome::Written { .. })
    }
}

/// Renders templates against hardware configurations.
pub struct Generator {
    base_dir: PathBuf,
    tool_name: String,
    engine: TemplateEngine,
}

impl Generator {
    /// A generator reading templates from `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            tool_name: TOOL_NAME.to_string(),
            engine: TemplateEngine::new(),
        }
    }

    /// Override the `toolName` reported to templates.
    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    /// Build the namespace for `config`, stamped with the current time.
    pub fn namespace(&self, config: &HwConfig) -> Result<Namespace> {
        Namespace::build(config, &self.tool_name, generation_date())
    }

    /// Render `spec` against `config`.
    pub fn run(&mut self, config: &HwConfig, spec: &TemplateSpec) -> Result<RenderOutcome> {
        let namespace = self.namespace(config)?;
        let job = TemplateJob::resolve(&self.base_dir, spec);
        self.render_job(&job, &namespace)
    }

    /// Render one resolved job against a prepared namespace.
    pub fn render_job(
        &mut self,
        job: &TemplateJob,
        namespace: &Namespace,
    ) -> Result<RenderOutcome> {
        let source =
            std::fs::read_to_string(&job.template).map_err(|source| RenderError::ReadTemplate {
                path: job.template.clone(),
                source,
            })?;
        log::debug!(
            "rendering {} ({} names in scope)",
            job.template.display(),
            namespace.len()
        );

        let rendered = match self.engine.render(&job.template_name(), &source, namespace) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("render of {} failed", job.template.display());
                return Ok(RenderOutcome::Failed {
                    trace: error_trace(&err),
                });
            }
        };

        std::fs::write(&job.output, &rendered).map_err(|source| RenderError::WriteOutput {
            path: job.output.clone(),
            source,
        })?;
        log::info!("wrote {} ({} bytes)", job.output.display(), rendered.len());

        Ok(RenderOutcome::Written {
            path: job.output.clone(),
            bytes: rendered.len(),
        })
    }
}
