//! Specification client.
//!
//! Drives the request/response cycle with the remote service: serializes
//! requests, sends them through a [`Transport`], and decodes the replies.
//! Retrying and logging are left to the caller.

use crate::config::ContractConfig;
use crate::error::DecodeError;
use crate::ports::{Transport, TransportRequest, TransportResponse};
use crate::specification::{ErrorMessage, ListResponse, SpecificationRequest, SpecificationResponse};
use crate::wire::{parse_error_message, parse_list_response, parse_response, serialize_request};

/// Failure of one client call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be delivered.
    #[error("transport failed: {0}")]
    Transport(String),
    /// The service answered with a non-2xx status.
    #[error("service rejected the request with status {status}{}", detail(.message.as_ref()))]
    Rejected {
        /// Status code of the reply.
        status: u16,
        /// Decoded error body, when the service sent one.
        message: Option<ErrorMessage>,
    },
    /// The reply could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

fn detail(message: Option<&ErrorMessage>) -> String {
    message.map(|m| format!(": {}", m.message)).unwrap_or_default()
}

/// CRUD operations on specifications over a borrowed transport.
pub struct SpecificationClient<'a> {
    transport: &'a dyn Transport,
    config: &'a ContractConfig,
}

impl<'a> SpecificationClient<'a> {
    /// Creates a client using `config` for wire naming and endpoint paths.
    #[must_use]
    pub fn new(transport: &'a dyn Transport, config: &'a ContractConfig) -> Self {
        Self { transport, config }
    }

    /// Creates a specification.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if delivery fails, the service rejects the
    /// request, or the reply cannot be decoded.
    pub async fn create(
        &self,
        request: &SpecificationRequest,
    ) -> Result<SpecificationResponse, ClientError> {
        let body = serialize_request(request, &self.config.wire);
        let reply = self.send(TransportRequest::post(self.collection_path(), body)).await?;
        Ok(parse_response(&reply.body, &self.config.wire)?)
    }

    /// Fetches one specification by id.
    ///
    /// # Errors
    ///
    /// Same as [`SpecificationClient::create`].
    pub async fn get(&self, id: i64) -> Result<SpecificationResponse, ClientError> {
        let reply = self.send(TransportRequest::get(self.config.wire.item_path(id))).await?;
        Ok(parse_response(&reply.body, &self.config.wire)?)
    }

    /// Fetches one page of specifications. Pages start at 1.
    ///
    /// # Errors
    ///
    /// Same as [`SpecificationClient::create`].
    pub async fn list(
        &self,
        page: u32,
        size: u32,
    ) -> Result<ListResponse<SpecificationResponse>, ClientError> {
        let request =
            TransportRequest::get(self.collection_path()).with_query("page", page).with_query("size", size);
        let reply = self.send(request).await?;
        Ok(parse_list_response(&reply.body, &self.config.wire)?)
    }

    /// Replaces the fields of an existing specification.
    ///
    /// # Errors
    ///
    /// Same as [`SpecificationClient::create`].
    pub async fn update(
        &self,
        id: i64,
        request: &SpecificationRequest,
    ) -> Result<SpecificationResponse, ClientError> {
        let body = serialize_request(request, &self.config.wire);
        let reply = self.send(TransportRequest::put(self.config.wire.item_path(id), body)).await?;
        Ok(parse_response(&reply.body, &self.config.wire)?)
    }

    /// Deletes a specification.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if delivery fails or the service rejects the request.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.send(TransportRequest::delete(self.config.wire.item_path(id))).await?;
        Ok(())
    }

    fn collection_path(&self) -> &str {
        &self.config.wire.resource_path
    }

    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        let reply =
            self.transport.send(request).await.map_err(|e| ClientError::Transport(e.to_string()))?;
        if reply.is_success() {
            Ok(reply)
        } else {
            Err(ClientError::Rejected {
                status: reply.status,
                message: parse_error_message(&reply.body).ok(),
            })
        }
    }
}
