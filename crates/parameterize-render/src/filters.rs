//! Custom Tera filters for driver templates.

use std::collections::HashMap;

use tera::{Error, Tera, Value};

/// Widest zero padding `hex` accepts; the formatter cannot pad further.
const MAX_WIDTH: u64 = u16::MAX as u64;

/// Register every custom filter on `tera`.
pub fn register(tera: &mut Tera) {
    tera.register_filter("hex", hex);
}

/// `{{ value | hex }}` / `{{ value | hex(width=8) }}`
///
/// Formats an integer, or a string holding a decimal or `0x` hexadecimal
/// integer, as `0x`-prefixed lowercase hex zero-padded to `width` digits.
pub fn hex(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let width = match args.get("width") {
        Some(w) => w
            .as_u64()
            .filter(|&w| w <= MAX_WIDTH)
            .and_then(|w| usize::try_from(w).ok())
            .ok_or_else(|| {
                Error::msg(format!(
                    "filter `hex`: `width` must be an integer between 0 and {MAX_WIDTH}"
                ))
            })?,
        None => 0,
    };
    let n = as_address(value)?;
    Ok(Value::String(format!("0x{n:0width$x}")))
}

fn as_address(value: &Value) -> tera::Result<u64> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => {
            let s = s.trim();
            match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(digits) => u64::from_str_radix(digits, 16).ok(),
                None => s.parse().ok(),
            }
        }
        _ => None,
    };
    parsed.ok_or_else(|| {
        Error::msg(format!(
            "filter `hex`: {value} is not a non-negative integer"
        ))
    })
}
