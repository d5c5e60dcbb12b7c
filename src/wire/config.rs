//! How field names and the envelope are laid out on the wire.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::specification::Field;

/// Default collection endpoint.
pub const DEFAULT_RESOURCE_PATH: &str = "/api/specifications";

/// Spelling convention for multi-word keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCasing {
    /// `createdAt`
    #[default]
    Camel,
    /// `created_at`
    Snake,
}

impl FieldCasing {
    /// Spells a snake-case key in this casing.
    #[must_use]
    pub fn apply(self, snake: &str) -> Cow<'_, str> {
        match self {
            Self::Snake => Cow::Borrowed(snake),
            Self::Camel if !snake.contains('_') => Cow::Borrowed(snake),
            Self::Camel => {
                let mut out = String::with_capacity(snake.len());
                let mut upper = false;
                for ch in snake.chars() {
                    if ch == '_' {
                        upper = true;
                    } else if upper {
                        out.extend(ch.to_uppercase());
                        upper = false;
                    } else {
                        out.push(ch);
                    }
                }
                Cow::Owned(out)
            }
        }
    }
}

/// Where the envelope fields sit relative to the domain fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum EnvelopeLayout {
    /// Beside the domain fields at the top level.
    #[default]
    Flat,
    /// Inside a sub-object under `key`.
    Nested {
        /// Key of the sub-object.
        key: String,
    },
}

/// Two things would be written under the same wire key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyConflict {
    /// Two fields map to one key.
    #[error("fields `{first}` and `{second}` both use wire key `{key}`")]
    Shared {
        /// The contested key.
        key: String,
        /// Field that claimed the key first.
        first: Field,
        /// Field that collided with it.
        second: Field,
    },
    /// The nested envelope object would replace a domain field.
    #[error("envelope key `{key}` is already the wire key of `{field}`")]
    EnvelopeShadows {
        /// The envelope object's key.
        key: String,
        /// The domain field using it.
        field: Field,
    },
}

/// Wire naming for requests, responses, and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    /// Casing applied to every key without an explicit rename.
    pub casing: FieldCasing,
    /// Per-field key overrides.
    pub renames: BTreeMap<Field, String>,
    /// Envelope placement in responses.
    pub envelope: EnvelopeLayout,
    /// Collection endpoint path; items live at `<path>/<id>`.
    pub resource_path: String,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            casing: FieldCasing::default(),
            renames: BTreeMap::new(),
            envelope: EnvelopeLayout::default(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
        }
    }
}

impl WireConfig {
    /// The wire key of a record field.
    #[must_use]
    pub fn key(&self, field: Field) -> Cow<'_, str> {
        match self.renames.get(&field) {
            Some(renamed) => Cow::Borrowed(renamed.as_str()),
            None => self.casing.apply(field.as_str()),
        }
    }

    /// The wire key of a listing key given in snake case.
    #[must_use]
    pub fn list_key<'a>(&self, snake: &'a str) -> Cow<'a, str> {
        self.casing.apply(snake)
    }

    /// Checks that every field has its own wire key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyConflict`] if two fields share a key, or a nested
    /// envelope key equals the key of a domain field.
    pub fn validate(&self) -> Result<(), KeyConflict> {
        let mut seen: BTreeMap<Cow<'_, str>, Field> = BTreeMap::new();
        for field in Field::DOMAIN.into_iter().chain(Field::ENVELOPE) {
            let key = self.key(field);
            if let Some(&first) = seen.get(&key) {
                return Err(KeyConflict::Shared { key: key.into_owned(), first, second: field });
            }
            seen.insert(key, field);
        }
        if let EnvelopeLayout::Nested { key } = &self.envelope {
            if let Some(field) = Field::DOMAIN.into_iter().find(|&f| self.key(f) == key.as_str()) {
                return Err(KeyConflict::EnvelopeShadows { key: key.clone(), field });
            }
        }
        Ok(())
    }

    /// Path of a single record.
    #[must_use]
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.resource_path.trim_end_matches('/'))
    }
}
