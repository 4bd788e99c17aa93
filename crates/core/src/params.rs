//! Pure helper for extracting typed parameters from a `serde_json::Value`
//! object.
//!
//! Takes a JSON value, a key name, and a default. If the key is missing or
//! the value is not the expected type, the default is returned. This never
//! fails — it always produces a usable value. The scenario layer uses it
//! to overlay caller-supplied parameters onto script defaults.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing
/// or the wrong type.
///
/// Accepts both JSON floats and integers.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}
