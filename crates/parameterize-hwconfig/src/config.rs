//! YAML hardware configuration parsing.
//!
//! A hardware configuration is a mapping with two required stream tables:
//!
//! ```yaml
//! instreams:
//!   rx0: { irq: 5, dma_addr: "0x1000" }
//! outstreams:
//!   tx0: { irq: 6, dma_addr: "0x2000" }
//! ```
//!
//! Every other top-level key is kept as-is and ends up in the template
//! namespace. Mapping order is document order.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{HwConfigError, Result};
use crate::stream::{StreamDirection, StreamRecord};

/// File extensions a hardware configuration is expected to carry.
pub const EXPECTED_EXTENSIONS: &[&str] = &["yml", "yaml"];

const IRQ: &str = "irq";
const DMA_ADDR: &str = "dma_addr";

/// A parsed hardware configuration.
#[derive(Debug, Clone)]
pub struct HwConfig {
    document: Mapping,
}

impl HwConfig {
    /// Parse a hardware configuration from a YAML string.
    ///
    /// Merge keys are expanded. Only checks that the document is a mapping;
    /// the stream tables are checked by [`HwConfig::streams`].
    pub fn parse(input: &str) -> Result<Self> {
        let mut value: Value = serde_yaml::from_str(input)?;
        value.apply_merge()?;
        match value {
            Value::Mapping(document) => Ok(Self { document }),
            _ => Err(HwConfigError::NotAMapping),
        }
    }

    /// Read and parse a hardware configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| HwConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        log::debug!(
            "loaded {} with {} top-level keys",
            path.display(),
            config.document.len()
        );
        Ok(config)
    }

    /// The whole document, including the stream tables.
    pub fn document(&self) -> &Mapping {
        &self.document
    }

    /// All streams: every `instreams` entry followed by every `outstreams`
    /// entry, each table walked once in document order.
    pub fn streams(&self) -> Result<Vec<StreamRecord>> {
        let mut streams = Vec::new();
        for direction in [StreamDirection::Input, StreamDirection::Output] {
            self.collect_table(direction, &mut streams)?;
        }
        Ok(streams)
    }

    fn collect_table(&self, direction: StreamDirection, out: &mut Vec<StreamRecord>) -> Result<()> {
        let table = direction.table_key();
        let entries = self
            .document
            .get(table)
            .ok_or(HwConfigError::MissingKey { key: table })?;

        let entries = match entries {
            Value::Mapping(m) => m,
            // An empty `instreams:` parses as null.
            Value::Null => return Ok(()),
            _ => return Err(HwConfigError::InvalidStreamTable { key: table }),
        };

        for (key, record) in entries {
            let name = match key {
                Value::String(s) => s.clone(),
                other => {
                    return Err(HwConfigError::InvalidStreamName {
                        table,
                        found: describe(other),
                    })
                }
            };
            let record = record
                .as_mapping()
                .ok_or_else(|| HwConfigError::InvalidStreamRecord {
                    table,
                    stream: name.clone(),
                })?;
            let field = |field: &'static str| {
                record
                    .get(field)
                    .cloned()
                    .ok_or_else(|| HwConfigError::MissingStreamField {
                        table,
                        stream: name.clone(),
                        field,
                    })
            };
            let irq = field(IRQ)?;
            let dma_addr = field(DMA_ADDR)?;
            out.push(StreamRecord {
                name,
                direction,
                dma_addr,
                irq,
            });
        }
        Ok(())
    }
}

/// Whether `path` carries one of the [`EXPECTED_EXTENSIONS`].
pub fn has_expected_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXPECTED_EXTENSIONS.contains(&ext))
}

fn describe(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(s) => s.trim_end().to_string(),
        Err(_) => format!("{value:?}"),
    }
}
