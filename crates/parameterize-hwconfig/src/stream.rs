//! Stream records derived from the `instreams` / `outstreams` tables.

use serde::Serialize;
use serde_yaml::Value;

/// Direction of a data stream relative to the hardware block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamDirection {
    /// Declared under `instreams`.
    Input,
    /// Declared under `outstreams`.
    Output,
}

impl StreamDirection {
    /// The configuration key holding streams of this direction.
    pub fn table_key(self) -> &'static str {
        match self {
            StreamDirection::Input => "instreams",
            StreamDirection::Output => "outstreams",
        }
    }
}

impl std::fmt::Display for StreamDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamDirection::Input => write!(f, "input"),
            StreamDirection::Output => write!(f, "output"),
        }
    }
}

/// One stream, in declaration order.
///
/// Serializes as `{name, type, dma_addr}`; the IRQ is kept alongside so the
/// interrupt list can be derived from the same sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamRecord {
    /// Stream name (the key in its table).
    pub name: String,
    /// Input or output.
    #[serde(rename = "type")]
    pub direction: StreamDirection,
    /// DMA address, passed through exactly as written in the configuration.
    pub dma_addr: Value,
    /// Interrupt line, passed through exactly as written in the configuration.
    #[serde(skip)]
    pub irq: Value,
}

/// Stream names in record order.
pub fn stream_names(streams: &[StreamRecord]) -> Vec<String> {
    streams.iter().map(|s| s.name.clone()).collect()
}

/// IRQs in record order.
pub fn irq_list(streams: &[StreamRecord]) -> Vec<Value> {
    streams.iter().map(|s| s.irq.clone()).collect()
}
