//! Flattening of nested catalogs into dotted-path key maps.
//!
//! `{"settings": {"theme": {"label": "Theme"}}}` becomes
//! `settings.theme.label -> "Theme"`. Only nested objects are descended into;
//! arrays, null and scalars are leaves coerced to their string form.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Dotted path to leaf string, in catalog order.
pub type FlatCatalog = IndexMap<String, String>;

/// Explicit classification of a catalog node.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Nested(&'a Map<String, Value>),
    Array(&'a [Value]),
    Null,
    Scalar(&'a Value),
}

impl<'a> NodeKind<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => NodeKind::Nested(map),
            Value::Array(items) => NodeKind::Array(items),
            Value::Null => NodeKind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => NodeKind::Scalar(value),
        }
    }
}

/// Flatten a catalog root into a dotted-path map.
pub fn flatten_catalog(catalog: &Map<String, Value>) -> FlatCatalog {
    let mut result = FlatCatalog::new();
    flatten_into(catalog, "", &mut result);
    result
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, result: &mut FlatCatalog) {
    for (key, value) in map {
        let path = format!("{}{}", prefix, key);
        match NodeKind::classify(value) {
            NodeKind::Nested(child) => {
                flatten_into(child, &format!("{}.", path), result);
            }
            NodeKind::Array(items) => {
                result.insert(path, coerce_array(items));
            }
            NodeKind::Null => {
                result.insert(path, "null".to_string());
            }
            NodeKind::Scalar(scalar) => {
                result.insert(path, coerce_scalar(scalar));
            }
        }
    }
}

fn coerce_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce an array the way the catalogs' authoring runtime stringifies it:
/// elements joined by `,`, null as empty, objects as `[object Object]`.
fn coerce_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match NodeKind::classify(item) {
            NodeKind::Nested(_) => "[object Object]".to_string(),
            NodeKind::Array(inner) => coerce_array(inner),
            NodeKind::Null => String::new(),
            NodeKind::Scalar(scalar) => coerce_scalar(scalar),
        })
        .collect::<Vec<_>>()
        .join(",")
}
