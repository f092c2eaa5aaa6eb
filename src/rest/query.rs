//! Conversion of typed request structs into query strings and bodies.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// Serializes a parameter struct to a flat query parameter map.
///
/// Null values are skipped, arrays are joined with commas, and nested
/// objects are sent as JSON.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if `params` cannot be serialized.
///
/// # Example
///
/// ```rust
/// use recharge_api::rest::serialize_to_query;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Params {
///     ids: Vec<u64>,
///     limit: Option<u32>,
///     page: Option<u32>,
/// }
///
/// let query = serialize_to_query(&Params { ids: vec![1, 2], limit: Some(50), page: None }).unwrap();
/// assert_eq!(query.get("ids").map(String::as_str), Some("1,2"));
/// assert_eq!(query.get("limit").map(String::as_str), Some("50"));
/// assert!(!query.contains_key("page"));
/// ```
pub fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// Serializes an optional parameter struct, yielding `None` when absent.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if `params` cannot be serialized.
pub fn optional_query<T: Serialize>(
    params: Option<&T>,
) -> Result<Option<HashMap<String, String>>, ResourceError> {
    params.map(serialize_to_query).transpose()
}

/// Serializes a request body, sending `{}` when no body is given.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if `body` cannot be serialized.
pub fn body_or_empty<T: Serialize>(body: Option<&T>) -> Result<Value, ResourceError> {
    match body {
        Some(body) => Ok(serde_json::to_value(body)?),
        None => Ok(Value::Object(serde_json::Map::new())),
    }
}
