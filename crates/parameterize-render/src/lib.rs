//! Template rendering for the parameterize driver generator.
//!
//! Turns a [`HwConfig`](parameterize_hwconfig::HwConfig) into a flat
//! [`Namespace`] and renders one Tera template against it.
//!
//! ## Modules
//!
//! - [`spec`] — `TEMPLATE:OUTFILE` argument parsing
//! - [`namespace`] — configuration plus derived stream names
//! - [`filters`] — custom Tera filters (`hex`)
//! - [`engine`] — Tera wrapper and error traces
//! - [`job`] — one-shot generation with the fatal / reported error split

pub mod engine;
pub mod error;
pub mod filters;
pub mod job;
pub mod namespace;
pub mod spec;

pub use engine::{error_trace, TemplateEngine};
pub use error::RenderError;
pub use job::{Generator, RenderOutcome, TemplateJob};
pub use namespace::{generation_date, Namespace, DATE_FORMAT, TOOL_NAME};
pub use spec::TemplateSpec;
