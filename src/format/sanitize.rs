//! Argument sanitization for JSON persistence.
//!
//! Output is lossless where possible and never carries ANSI escapes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::color::strip_ansi;
use crate::format::arg::Arg;

/// Marker key wrapping base64-encoded byte buffers.
pub const BYTES_KEY: &str = "__bytes_b64";

/// Map one argument to a JSON-safe value.
pub fn sanitize(arg: &Arg) -> Value {
    match arg {
        Arg::Error(msg) | Arg::Display(msg) => Value::String(strip_ansi(msg)),
        Arg::Bytes(bytes) => {
            let mut wrapped = Map::new();
            wrapped.insert(BYTES_KEY.to_string(), Value::String(STANDARD.encode(bytes)));
            Value::Object(wrapped)
        }
        Arg::Opaque(type_name) => Value::String((*type_name).to_string()),
        Arg::Str(s) => Value::String(strip_ansi(s)),
        Arg::Time(t) => Value::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Arg::Value(v) => strip_value(v.clone()),
        Arg::Unserializable { type_name, .. } => Value::String((*type_name).to_string()),
    }
}

pub fn sanitize_all(args: &[Arg]) -> Vec<Value> {
    args.iter().map(sanitize).collect()
}

/// Decode a value produced for a byte buffer back into bytes.
pub fn decode_bytes(value: &Value) -> Option<Vec<u8>> {
    let encoded = value.as_object()?.get(BYTES_KEY)?.as_str()?;
    STANDARD.decode(encoded).ok()
}

fn strip_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(strip_ansi(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (strip_ansi(&k), strip_value(v)))
                .collect(),
        ),
        other => other,
    }
}
