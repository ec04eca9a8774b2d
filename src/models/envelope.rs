//! Decoding of the uniform Pipedrive response wrapper.
//!
//! Every endpoint answers with `{ "success": bool, "data": ... }` where `data`
//! is `null`, a single object or a list of objects depending on the call. The
//! shape is classified once here into [`EnvelopeData`].

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{ClientError, ClientResult};

/// JSON object as returned by the remote API.
pub type Attributes = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeData {
    /// `data` was missing or `null`.
    Absent,
    /// Single record, as returned by create calls.
    Object(Attributes),
    /// Search results; only the first element is ever consulted.
    List(Vec<Attributes>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub success: bool,
    pub data: EnvelopeData,
}

#[derive(Deserialize)]
struct RawEnvelope {
    /// Anything but `true` reads as `false`.
    #[serde(default)]
    success: Value,
    #[serde(default)]
    data: Value,
}

impl EnvelopeData {
    fn classify(value: Value) -> ClientResult<Self> {
        match value {
            Value::Null => Ok(EnvelopeData::Absent),
            Value::Object(attributes) => Ok(EnvelopeData::Object(attributes)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(attributes) => Ok(attributes),
                    other => Err(ClientError::MalformedResponse(format!(
                        "expected objects in `data` list, got {}",
                        kind_of(&other)
                    ))),
                })
                .collect::<ClientResult<Vec<_>>>()
                .map(EnvelopeData::List),
            other => Err(ClientError::MalformedResponse(format!(
                "unexpected `data` of type {}",
                kind_of(&other)
            ))),
        }
    }
}

/// Parses a response body into an [`Envelope`].
pub fn decode_envelope(bytes: &[u8]) -> ClientResult<Envelope> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ClientError::InvalidJson(e.to_string()))?;
    if !value.is_object() {
        return Err(ClientError::MalformedResponse(format!(
            "expected a response object, got {}",
            kind_of(&value)
        )));
    }
    let raw: RawEnvelope = serde_json::from_value(value)
        .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

    Ok(Envelope {
        success: raw.success.as_bool().unwrap_or(false),
        data: EnvelopeData::classify(raw.data)?,
    })
}

/// Reads the `id` attribute of a record.
///
/// Numbers may arrive as floats and are truncated. Missing, non-numeric and
/// non-positive ids are rejected.
pub fn extract_id(attributes: &Attributes) -> ClientResult<i64> {
    let value = attributes
        .get("id")
        .ok_or_else(|| ClientError::MalformedResponse("record has no `id`".to_string()))?;

    let id = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    }
    .ok_or_else(|| {
        ClientError::MalformedResponse(format!("`id` is not a number: {value}"))
    })?;

    if id <= 0 {
        return Err(ClientError::MalformedResponse(format!(
            "`id` must be positive, got {id}"
        )));
    }
    Ok(id)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
