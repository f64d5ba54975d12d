//! Defaulting accessors over loosely-shaped JSON documents.
//!
//! Stored documents and import files may be missing any part of the nested
//! schema, or carry key spellings from older snapshots. Every read of such
//! data goes through these helpers, which never fail: a missing or mistyped
//! leaf yields the type's default (`""`, `0`, `Equal`).

use serde_json::Value;

use crate::entities::{NumericInput, TrendDirection};

/// Accepted spellings of one key, canonical spelling first.
pub(crate) type Segment = &'static [&'static str];

/// Follows `path` from `root`, returning `None` as soon as a segment is
/// missing or a non-object is encountered.
pub(crate) fn lookup<'a>(root: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, segment| {
        let object = node.as_object()?;
        segment.iter().find_map(|key| object.get(*key))
    })
}

pub(crate) fn string_at(root: &Value, path: &[Segment]) -> String {
    match lookup(root, path) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Numbers, numeric strings, and `{ "Score": n }` wrappers (older sector-mean
/// shape) are accepted.
pub(crate) fn number_at(root: &Value, path: &[Segment]) -> f64 {
    lookup(root, path).map(number_of).unwrap_or(0.0)
}

fn number_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => NumericInput::from(s.as_str()).value(),
        Value::Object(o) => o.get("Score").map(number_of).unwrap_or(0.0),
        _ => 0.0,
    }
}

pub(crate) fn trend_at(root: &Value, path: &[Segment]) -> TrendDirection {
    match lookup(root, path) {
        Some(Value::String(s)) => s.parse().unwrap_or_default(),
        _ => TrendDirection::default(),
    }
}
