//! Transport port carrying wire payloads to and from the remote service.
//!
//! The real HTTP client is not part of this crate; anything that can move
//! a request body to the service and hand back its reply implements
//! [`Transport`].

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`Transport::send`], keeping the trait dyn-compatible.
pub type TransportFuture<'a> = Pin<
    Box<dyn Future<Output = Result<TransportResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>,
>;

/// Request verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read.
    Get,
    /// Create.
    Post,
    /// Replace.
    Put,
    /// Remove.
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// An outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Verb.
    pub method: Method,
    /// Path relative to the service root.
    pub path: String,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<String>,
}

impl TransportRequest {
    fn new(method: Method, path: impl Into<String>, body: Option<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body }
    }

    /// A `GET` without a body.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    /// A `POST` with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self::new(Method::Post, path, Some(body))
    }

    /// A `PUT` with a JSON body.
    #[must_use]
    pub fn put(path: impl Into<String>, body: String) -> Self {
        Self::new(Method::Put, path, Some(body))
    }

    /// A `DELETE` without a body.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// The first value of a query parameter.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// The service's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body (possibly empty).
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the remote service.
pub trait Transport: Send + Sync {
    /// Sends one request and resolves to the service's reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be delivered or no reply
    /// was received. A reply with a non-2xx status is not an error here.
    fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_are_looked_up_by_key() {
        let request = TransportRequest::get("/x").with_query("page", 2).with_query("size", 10);
        assert_eq!(request.query_param("size"), Some("10"));
        assert_eq!(request.query_param("sort"), None);
    }

    #[test]
    fn success_means_2xx() {
        let ok = TransportResponse { status: 204, body: String::new() };
        let conflict = TransportResponse { status: 409, body: String::new() };
        assert!(ok.is_success());
        assert!(!conflict.is_success());
    }
}
