//! Accessors for JSON-LD node and value objects.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::coerce::Coercer;
use crate::error::Result;
use crate::model::NativeValue;

/// The `@value` of a value object, or the node itself.
pub fn node_value(node: &Value) -> &Value {
    node.get("@value").unwrap_or(node)
}

/// The `@type` of an object node, if any (a string or an array of strings).
pub fn node_type(node: &Value) -> Option<&Value> {
    node.as_object()?.get("@type")
}

/// The `@id` of an object node, if it is a string.
pub fn node_id(node: &Value) -> Option<&str> {
    node.as_object()?.get("@id")?.as_str()
}

/// Coerce every property of a node object.
///
/// Keyword entries (`@id`, `@type`, `@context`, ...) are skipped. Array values
/// are coerced element by element; a single value becomes a one-element list.
/// Nested node objects pass through untouched. The first coercion failure is
/// returned.
pub fn coerce_properties(
    node: &Value,
    coercer: &Coercer,
) -> Result<BTreeMap<String, Vec<NativeValue>>> {
    let mut result = BTreeMap::new();
    let Some(obj) = node.as_object() else {
        return Ok(result);
    };

    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }
        let coerced = match value {
            Value::Array(items) => items
                .iter()
                .map(|item| coercer.coerce(item))
                .collect::<Result<Vec<_>>>()?,
            single => vec![coercer.coerce(single)?],
        };
        result.insert(key.clone(), coerced);
    }

    Ok(result)
}
