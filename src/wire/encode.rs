//! Record to JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::{EnvelopeLayout, WireConfig};
use crate::specification::{Field, ListResponse, SpecificationRequest, SpecificationResponse};

/// Produces the wire text of a request.
///
/// Output is compact JSON with keys in sorted order, so equal requests
/// always serialize to identical text. The ordering comes from
/// `serde_json::Map` being a `BTreeMap`; enabling serde_json's
/// `preserve_order` feature anywhere in the build would switch it to
/// insertion order.
#[must_use]
pub fn serialize_request(request: &SpecificationRequest, wire: &WireConfig) -> String {
    let mut object = Map::new();
    insert_domain(
        &mut object,
        wire,
        request.name(),
        request.code(),
        request.description(),
        request.status(),
    );
    Value::Object(object).to_string()
}

/// Produces the wire object of a response, envelope included.
#[must_use]
pub fn encode_response(response: &SpecificationResponse, wire: &WireConfig) -> Value {
    let mut object = Map::new();
    insert_domain(
        &mut object,
        wire,
        response.name(),
        response.code(),
        response.description(),
        response.status(),
    );

    let envelope = response.envelope();
    let mut meta = Map::new();
    meta.insert(wire.key(Field::Id).into_owned(), Value::from(envelope.id()));
    meta.insert(wire.key(Field::CreatedAt).into_owned(), timestamp(envelope.created_at()));
    meta.insert(wire.key(Field::UpdatedAt).into_owned(), timestamp(envelope.updated_at()));

    match &wire.envelope {
        EnvelopeLayout::Flat => object.extend(meta),
        EnvelopeLayout::Nested { key } => {
            object.insert(key.clone(), Value::Object(meta));
        }
    }
    Value::Object(object)
}

/// Produces the wire object of a listing page.
#[must_use]
pub fn encode_list_response(list: &ListResponse<SpecificationResponse>, wire: &WireConfig) -> Value {
    let mut object = Map::new();
    let content = list.content.iter().map(|item| encode_response(item, wire)).collect();
    object.insert(wire.list_key("content").into_owned(), Value::Array(content));
    object.insert(wire.list_key("page").into_owned(), Value::from(list.page));
    object.insert(wire.list_key("size").into_owned(), Value::from(list.size));
    object.insert(wire.list_key("total_elements").into_owned(), Value::from(list.total_elements));
    object.insert(wire.list_key("total_pages").into_owned(), Value::from(list.total_pages));
    object.insert(wire.list_key("last").into_owned(), Value::from(list.last));
    Value::Object(object)
}

fn insert_domain(
    object: &mut Map<String, Value>,
    wire: &WireConfig,
    name: &str,
    code: &str,
    description: &str,
    status: i32,
) {
    object.insert(wire.key(Field::Name).into_owned(), Value::from(name));
    object.insert(wire.key(Field::Code).into_owned(), Value::from(code));
    object.insert(wire.key(Field::Description).into_owned(), Value::from(description));
    object.insert(wire.key(Field::Status).into_owned(), Value::from(status));
}

fn timestamp(at: DateTime<Utc>) -> Value {
    Value::from(at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::specification::BaseEnvelope;
    use crate::wire::FieldCasing;

    fn sample_response() -> SpecificationResponse {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap();
        SpecificationResponse::new(BaseEnvelope::new(3, created, updated), "RAM", "RAM", "Memory", 1)
    }

    #[test]
    fn serialized_request_carries_all_four_fields() {
        let request = SpecificationRequest::new("Spec A", "SPEC_A", "desc", 1);
        let text = serialize_request(&request, &WireConfig::default());

        assert_eq!(text, r#"{"code":"SPEC_A","description":"desc","name":"Spec A","status":1}"#);
    }

    #[test]
    fn serialization_is_deterministic() {
        let request = SpecificationRequest::new("n", "c", "d", 2);
        let wire = WireConfig::default();
        assert_eq!(serialize_request(&request, &wire), serialize_request(&request, &wire));
    }

    #[test]
    fn flat_envelope_uses_camel_case_keys() {
        let value = encode_response(&sample_response(), &WireConfig::default());

        assert_eq!(
            value,
            json!({
                "id": 3,
                "createdAt": "2024-03-01T09:30:00.000Z",
                "updatedAt": "2024-03-02T10:00:00.000Z",
                "name": "RAM",
                "code": "RAM",
                "description": "Memory",
                "status": 1
            })
        );
    }

    #[test]
    fn nested_envelope_sits_under_its_key() {
        let wire = WireConfig {
            casing: FieldCasing::Snake,
            envelope: EnvelopeLayout::Nested { key: "meta".to_string() },
            ..WireConfig::default()
        };
        let value = encode_response(&sample_response(), &wire);

        assert_eq!(value["meta"]["id"], json!(3));
        assert_eq!(value["meta"]["created_at"], json!("2024-03-01T09:30:00.000Z"));
        assert!(value.get("id").is_none());
        assert_eq!(value["status"], json!(1));
    }
}
