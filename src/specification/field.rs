//! Field identifiers shared by validation, decoding, and wire naming.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named field of the specification record or its envelope.
///
/// The `Display` form is the canonical snake-case name, independent of how
/// the field is spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Human-readable name.
    Name,
    /// Short machine-usable code.
    Code,
    /// Free-text description.
    Description,
    /// Numeric status code.
    Status,
    /// Server-assigned identifier (envelope).
    Id,
    /// Creation instant (envelope).
    CreatedAt,
    /// Last modification instant (envelope).
    UpdatedAt,
}

impl Field {
    /// The four domain fields, in declaration order.
    pub const DOMAIN: [Self; 4] = [Self::Name, Self::Code, Self::Description, Self::Status];

    /// The envelope fields, in declaration order.
    pub const ENVELOPE: [Self; 3] = [Self::Id, Self::CreatedAt, Self::UpdatedAt];

    /// Canonical snake-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::Description => "description",
            Self::Status => "status",
            Self::Id => "id",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
