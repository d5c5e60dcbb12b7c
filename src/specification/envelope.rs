//! Metadata the service wraps around every returned record.

use chrono::{DateTime, Utc};

/// Server-assigned fields common to every response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseEnvelope {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BaseEnvelope {
    /// Creates an envelope.
    #[must_use]
    pub fn new(id: i64, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self { id, created_at, updated_at }
    }

    /// Server-assigned identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// When the record was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the record was last modified.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
