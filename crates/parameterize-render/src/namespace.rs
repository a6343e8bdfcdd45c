//! The parameter namespace a template is rendered against.
//!
//! The namespace starts as a copy of the hardware configuration's top-level
//! mapping and gains five derived names:
//!
//! | Name          | Value                                              |
//! |---------------|----------------------------------------------------|
//! | `toolName`    | the generator's name                               |
//! | `date`        | generation time, `asctime` layout                  |
//! | `streamNames` | stream names, inputs then outputs                  |
//! | `irqlist`     | IRQs in the same order                             |
//! | `streams`     | `{name, type, dma_addr}` records in the same order |
//!
//! Derived names replace configuration keys of the same name.

use parameterize_hwconfig::{irq_list, stream_names, HwConfig, StreamRecord};
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

use crate::error::{RenderError, Result};

/// Name reported through `toolName`.
pub const TOOL_NAME: &str = "parameterize";

/// `strftime` layout of `date`, matching C `asctime` without the newline.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// The current local time formatted with [`DATE_FORMAT`].
pub fn generation_date() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// Flat name → value mapping handed to the template engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    values: Map<String, Value>,
}

impl Namespace {
    /// Build the namespace for `config`.
    ///
    /// Fails if the stream tables are missing or malformed, or if a
    /// top-level key is not a string.
    pub fn build(config: &HwConfig, tool_name: &str, date: String) -> Result<Self> {
        let streams = config.streams()?;

        let mut values = Map::new();
        for (key, value) in config.document() {
            // Fatal rather than a reported template error: the namespace is
            // built before the template is read.
            let YamlValue::String(key) = key else {
                return Err(RenderError::InvalidKey {
                    key: format!("{key:?}"),
                });
            };
            values.insert(key.clone(), serde_json::to_value(value)?);
        }

        let mut namespace = Namespace { values };
        namespace.insert("toolName", Value::String(tool_name.to_string()));
        namespace.insert("date", Value::String(date));
        namespace.insert_streams(&streams)?;
        Ok(namespace)
    }

    fn insert_streams(&mut self, streams: &[StreamRecord]) -> Result<()> {
        self.insert("streamNames", serde_json::to_value(stream_names(streams))?);
        self.insert("irqlist", serde_json::to_value(irq_list(streams))?);
        self.insert("streams", serde_json::to_value(streams)?);
        Ok(())
    }

    /// Insert or replace a name.
    pub fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Look up a name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Number of names defined.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names are defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert into a Tera rendering context.
    pub fn to_context(&self) -> tera::Result<tera::Context> {
        tera::Context::from_serialize(&self.values)
    }
}
