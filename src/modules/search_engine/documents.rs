//! Engine response envelopes
//!
//! Get responses carry the document under `_source`; search responses carry
//! a `hits.hits` array of the same shape. Only the envelope is strict here:
//! the documents themselves are decoded by the per-entity models, where
//! absent fields fall back to zero values.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct GetEnvelope {
    #[serde(rename = "_source")]
    source: Value,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Option<Value>,
}

fn decode_source<T: DeserializeOwned>(source: Value) -> AppResult<T> {
    if !source.is_object() {
        return Err(AppError::Decode(format!(
            "expected document object, got {}",
            kind_of(&source)
        )));
    }
    serde_json::from_value(source).map_err(AppError::from)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode the document of a Get response
pub fn decode_document<T: DeserializeOwned>(response: Value) -> AppResult<T> {
    let envelope: GetEnvelope = serde_json::from_value(response)?;
    decode_source(envelope.source)
}

fn hit_sources(response: Value) -> AppResult<Vec<Option<Value>>> {
    let envelope: SearchEnvelope = serde_json::from_value(response)?;
    Ok(envelope.hits.hits.into_iter().map(|hit| hit.source).collect())
}

/// Decode every hit of a search response; the first malformed hit fails the batch
pub fn decode_hits<T: DeserializeOwned>(response: Value) -> AppResult<Vec<T>> {
    hit_sources(response)?
        .into_iter()
        .map(|source| {
            source
                .ok_or_else(|| AppError::Decode("hit without _source".to_string()))
                .and_then(decode_source)
        })
        .collect()
}

/// Decode hits individually, keeping per-hit failures for the caller to judge
pub fn decode_hits_lenient<T: DeserializeOwned>(response: Value) -> AppResult<Vec<AppResult<T>>> {
    Ok(hit_sources(response)?
        .into_iter()
        .map(|source| {
            source
                .ok_or_else(|| AppError::Decode("hit without _source".to_string()))
                .and_then(decode_source)
        })
        .collect())
}

/// Deserialize `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
