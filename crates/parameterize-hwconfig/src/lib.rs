//! Hardware configuration model for the parameterize driver generator.
//!
//! Loads the YAML description of a hardware block's data streams and
//! flattens the `instreams` / `outstreams` tables into one ordered
//! sequence of [`StreamRecord`]s. Stream names and the IRQ list are always
//! derived from that single sequence, so the i-th name, IRQ, and record
//! describe the same stream.

pub mod config;
pub mod error;
pub mod stream;

pub use config::{has_expected_extension, HwConfig, EXPECTED_EXTENSIONS};
pub use error::HwConfigError;
pub use stream::{irq_list, stream_names, StreamDirection, StreamRecord};
