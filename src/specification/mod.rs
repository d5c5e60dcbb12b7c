//! Specification record types.
//!
//! A specification is a named, coded, described catalogue item with a
//! numeric status. It travels in two shapes: [`SpecificationRequest`] (what
//! a caller sends to create or update one) and [`SpecificationResponse`]
//! (what the service returns, wrapped in its [`BaseEnvelope`]).

mod envelope;
mod error_message;
mod field;
mod listing;
mod request;
mod response;

pub use envelope::BaseEnvelope;
pub use error_message::ErrorMessage;
pub use field::Field;
pub use listing::ListResponse;
pub use request::SpecificationRequest;
pub use response::SpecificationResponse;
