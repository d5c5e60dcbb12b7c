//! JSON to record.
//!
//! Fields are checked in a fixed order (domain fields, then envelope) and
//! decoding stops at the first problem, which is named in the error.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::{EnvelopeLayout, WireConfig};
use crate::error::DecodeError;
use crate::specification::{
    BaseEnvelope, ErrorMessage, Field, ListResponse, SpecificationResponse,
};

type Object = Map<String, Value>;

/// Decodes a response payload.
///
/// # Errors
///
/// Returns [`DecodeError`] if the text is not a JSON object or if any
/// domain or envelope field is missing or mistyped.
pub fn parse_response(raw: &str, wire: &WireConfig) -> Result<SpecificationResponse, DecodeError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    parse_response_value(&value, wire)
}

/// Decodes an already-parsed response payload.
///
/// # Errors
///
/// Same as [`parse_response`], minus JSON syntax errors.
pub fn parse_response_value(
    value: &Value,
    wire: &WireConfig,
) -> Result<SpecificationResponse, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let name = text(object, wire, Field::Name)?;
    let code = text(object, wire, Field::Code)?;
    let description = text(object, wire, Field::Description)?;
    let status = status(object, wire)?;

    let meta = match &wire.envelope {
        EnvelopeLayout::Flat => object,
        EnvelopeLayout::Nested { key } => match object.get(key) {
            None | Some(Value::Null) => return Err(DecodeError::MissingField(Field::Id)),
            Some(Value::Object(inner)) => inner,
            Some(_) => {
                return Err(DecodeError::WrongType {
                    field: Field::Id,
                    expected: "inside a nested envelope object",
                })
            }
        },
    };

    let id = require(meta, wire, Field::Id)?
        .as_i64()
        .ok_or(DecodeError::WrongType { field: Field::Id, expected: "an integer" })?;
    let created_at = instant(meta, wire, Field::CreatedAt)?;
    let updated_at = instant(meta, wire, Field::UpdatedAt)?;

    Ok(SpecificationResponse::new(
        BaseEnvelope::new(id, created_at, updated_at),
        name,
        code,
        description,
        status,
    ))
}

/// Decodes a paged listing of responses.
///
/// # Errors
///
/// Returns [`DecodeError::ListKey`] for a missing or mistyped paging key and
/// [`DecodeError::Item`] for the first record that fails to decode.
pub fn parse_list_response(
    raw: &str,
    wire: &WireConfig,
) -> Result<ListResponse<SpecificationResponse>, DecodeError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let items = list_value(object, wire, "content")?
        .as_array()
        .ok_or_else(|| DecodeError::ListKey(wire.list_key("content").into_owned()))?;
    let content = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            parse_response_value(item, wire)
                .map_err(|source| DecodeError::Item { index, source: Box::new(source) })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListResponse {
        content,
        page: list_u32(object, wire, "page")?,
        size: list_u32(object, wire, "size")?,
        total_elements: list_value(object, wire, "total_elements")?
            .as_u64()
            .ok_or_else(|| DecodeError::ListKey(wire.list_key("total_elements").into_owned()))?,
        total_pages: list_u32(object, wire, "total_pages")?,
        last: list_value(object, wire, "last")?
            .as_bool()
            .ok_or_else(|| DecodeError::ListKey(wire.list_key("last").into_owned()))?,
    })
}

/// Decodes the error body the service sends with a rejection.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if the body does not match the
/// error message shape.
pub fn parse_error_message(raw: &str) -> Result<ErrorMessage, DecodeError> {
    serde_json::from_str(raw).map_err(|e| DecodeError::Malformed(e.to_string()))
}

fn require<'v>(object: &'v Object, wire: &WireConfig, field: Field) -> Result<&'v Value, DecodeError> {
    match object.get(&*wire.key(field)) {
        None | Some(Value::Null) => Err(DecodeError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn text(object: &Object, wire: &WireConfig, field: Field) -> Result<String, DecodeError> {
    require(object, wire, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(DecodeError::WrongType { field, expected: "a string" })
}

fn status(object: &Object, wire: &WireConfig) -> Result<i32, DecodeError> {
    require(object, wire, Field::Status)?
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(DecodeError::WrongType { field: Field::Status, expected: "a 32-bit integer" })
}

fn instant(object: &Object, wire: &WireConfig, field: Field) -> Result<DateTime<Utc>, DecodeError> {
    let wrong = DecodeError::WrongType { field, expected: "an RFC 3339 timestamp" };
    let raw = require(object, wire, field)?.as_str().ok_or_else(|| wrong.clone())?;
    DateTime::parse_from_rfc3339(raw).map(|at| at.with_timezone(&Utc)).map_err(|_| wrong)
}

fn list_value<'v>(object: &'v Object, wire: &WireConfig, snake: &str) -> Result<&'v Value, DecodeError> {
    let key = wire.list_key(snake);
    match object.get(&*key) {
        None | Some(Value::Null) => Err(DecodeError::ListKey(key.into_owned())),
        Some(value) => Ok(value),
    }
}

fn list_u32(object: &Object, wire: &WireConfig, snake: &str) -> Result<u32, DecodeError> {
    list_value(object, wire, snake)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| DecodeError::ListKey(wire.list_key(snake).into_owned()))
}
