//! Loopback adapter for the `Transport` port.
//!
//! Serves the specification endpoints from an in-memory table, speaking the
//! same wire format as the remote service:
//!
//! | Verb   | Path            | Success |
//! |--------|-----------------|---------|
//! | POST   | `<path>`        | 201 + record |
//! | GET    | `<path>`        | 200 + page (`page` from 1, `size`) |
//! | GET    | `<path>/<id>`   | 200 + record |
//! | PUT    | `<path>/<id>`   | 200 + record |
//! | DELETE | `<path>/<id>`   | 204 |
//!
//! Rejections carry an [`ErrorMessage`] body: 400 for unparsable or invalid
//! bodies, 404 for unknown ids, 405 for other routes, 409 for a duplicate code.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use crate::config::ContractConfig;
use crate::ports::{Clock, Method, Transport, TransportFuture, TransportRequest, TransportResponse};
use crate::specification::{
    BaseEnvelope, ErrorMessage, ListResponse, SpecificationRequest, SpecificationResponse,
};
use crate::validate::validate_request;
use crate::wire::{encode_list_response, encode_response};

/// Page size used when a listing request does not give one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// In-process stand-in for the remote specification service.
pub struct LoopbackTransport {
    clock: Box<dyn Clock>,
    config: ContractConfig,
    table: Mutex<Table>,
}

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, SpecificationResponse>,
}

struct Rejection {
    status: u16,
    message: String,
}

impl Rejection {
    fn new(status: u16, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

enum Target {
    Collection,
    Item(i64),
}

type Outcome = Result<(u16, String), Rejection>;

impl LoopbackTransport {
    /// Creates an empty service that validates and encodes with `config`.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, config: ContractConfig) -> Self {
        Self { clock, config, table: Mutex::new(Table::default()) }
    }

    fn handle(&self, request: &TransportRequest) -> Outcome {
        match (request.method, self.route(&request.path)?) {
            (Method::Post, Target::Collection) => self.create(request),
            (Method::Get, Target::Collection) => self.list(request),
            (Method::Get, Target::Item(id)) => self.get(id),
            (Method::Put, Target::Item(id)) => self.update(id, request),
            (Method::Delete, Target::Item(id)) => self.delete(id),
            _ => Err(Rejection::new(405, "Method not allowed")),
        }
    }

    fn route(&self, path: &str) -> Result<Target, Rejection> {
        let base = self.config.wire.resource_path.trim_end_matches('/');
        let path = path.trim_end_matches('/');
        if path == base {
            return Ok(Target::Collection);
        }
        path.strip_prefix(base)
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|id| id.parse().ok())
            .map(Target::Item)
            .ok_or_else(|| Rejection::new(404, "Resource not found"))
    }

    fn create(&self, request: &TransportRequest) -> Outcome {
        let fields = self.read_body(request)?;
        let mut table = self.lock()?;
        ensure_unique_code(&table, &fields, None)?;

        table.last_id += 1;
        let id = table.last_id;
        let now = self.clock.now();
        let record = SpecificationResponse::from_request(BaseEnvelope::new(id, now, now), &fields);
        let body = encode_response(&record, &self.config.wire).to_string();
        table.rows.insert(id, record);
        Ok((201, body))
    }

    fn get(&self, id: i64) -> Outcome {
        let table = self.lock()?;
        let record = table.rows.get(&id).ok_or_else(|| not_found(id))?;
        Ok((200, encode_response(record, &self.config.wire).to_string()))
    }

    fn list(&self, request: &TransportRequest) -> Outcome {
        let page = positive_param(request, "page")?.unwrap_or(1);
        let size = positive_param(request, "size")?.unwrap_or(DEFAULT_PAGE_SIZE);
        let table = self.lock()?;

        let total = u64::try_from(table.rows.len()).unwrap_or(u64::MAX);
        let total_pages = u32::try_from(total.div_ceil(u64::from(size))).unwrap_or(u32::MAX);
        let skip = usize::try_from(page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(usize::try_from(size).unwrap_or(usize::MAX));
        let content = table
            .rows
            .values()
            .skip(skip)
            .take(usize::try_from(size).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        let list = ListResponse {
            content,
            page,
            size,
            total_elements: total,
            total_pages,
            last: page >= total_pages,
        };
        Ok((200, encode_list_response(&list, &self.config.wire).to_string()))
    }

    fn update(&self, id: i64, request: &TransportRequest) -> Outcome {
        let fields = self.read_body(request)?;
        let mut table = self.lock()?;
        let created_at = table.rows.get(&id).ok_or_else(|| not_found(id))?.envelope().created_at();
        ensure_unique_code(&table, &fields, Some(id))?;

        let record = SpecificationResponse::from_request(
            BaseEnvelope::new(id, created_at, self.clock.now()),
            &fields,
        );
        let body = encode_response(&record, &self.config.wire).to_string();
        table.rows.insert(id, record);
        Ok((200, body))
    }

    fn delete(&self, id: i64) -> Outcome {
        let mut table = self.lock()?;
        table.rows.remove(&id).ok_or_else(|| not_found(id))?;
        Ok((204, String::new()))
    }

    fn read_body(&self, request: &TransportRequest) -> Result<SpecificationRequest, Rejection> {
        let value: Value = request
            .body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
            .ok_or_else(|| Rejection::new(400, "Invalid JSON format"))?;
        validate_request(&value, &self.config).map_err(|e| Rejection::new(400, e.to_string()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, Rejection> {
        self.table.lock().map_err(|_| Rejection::new(500, "loopback table lock poisoned"))
    }

    fn reply(&self, request: &TransportRequest) -> Result<TransportResponse, serde_json::Error> {
        match self.handle(request) {
            Ok((status, body)) => Ok(TransportResponse { status, body }),
            Err(rejection) => {
                let message = ErrorMessage {
                    status_code: rejection.status,
                    timestamp: self.clock.now(),
                    message: rejection.message,
                    description: format!("uri={}", request.path),
                };
                Ok(TransportResponse { status: rejection.status, body: serde_json::to_string(&message)? })
            }
        }
    }
}

impl Transport for LoopbackTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        let result: Result<TransportResponse, Box<dyn Error + Send + Sync>> =
            self.reply(&request).map_err(Into::into);
        if let Ok(response) = &result {
            tracing::debug!(
                method = %request.method,
                path = %request.path,
                status = response.status,
                "loopback exchange"
            );
        }
        Box::pin(async move { result })
    }
}

fn ensure_unique_code(
    table: &Table,
    fields: &SpecificationRequest,
    except: Option<i64>,
) -> Result<(), Rejection> {
    let taken = table
        .rows
        .iter()
        .any(|(id, row)| Some(*id) != except && row.code() == fields.code());
    if taken {
        return Err(Rejection::new(
            409,
            format!("Specification code already exists: {}", fields.code()),
        ));
    }
    Ok(())
}

fn not_found(id: i64) -> Rejection {
    Rejection::new(404, format!("Specification not found with id: {id}"))
}

fn positive_param(request: &TransportRequest, key: &str) -> Result<Option<u32>, Rejection> {
    match request.query_param(key) {
        None => Ok(None),
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(Rejection::new(400, format!("Invalid {key} parameter: {raw}"))),
        },
    }
}
