//! Wire representation of specification records.
//!
//! Requests and responses are JSON objects. Key spelling and envelope
//! placement come from [`WireConfig`] rather than being fixed here.

mod config;
mod decode;
mod encode;

pub use config::{EnvelopeLayout, FieldCasing, KeyConflict, WireConfig, DEFAULT_RESOURCE_PATH};
pub use decode::{parse_error_message, parse_list_response, parse_response, parse_response_value};
pub use encode::{encode_list_response, encode_response, serialize_request};
