//! Shared value types for the lookup domain.
//!
//! [`RawPayload`] is the untyped shape a transport hands over; [`RiderRecord`]
//! is the validated shape the rest of the system trusts. The only path from
//! one to the other is the validator in [`crate::validate`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Raw payload
// ---------------------------------------------------------------------------

/// An untyped record as produced by a transport when an entity exists.
///
/// Keys are field names; values are arbitrary JSON. A payload may be
/// malformed relative to the [`RiderRecord`] schema — missing, misnamed, or
/// mistyped fields are all representable here. Construction never checks the
/// schema; validation does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPayload(Map<String, Value>);

impl RawPayload {
    /// Creates a payload from a JSON object map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Creates a payload from a JSON value, returning `None` unless the
    /// value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Returns the value carried for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Number of fields carried by the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for RawPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

// ---------------------------------------------------------------------------
// Validated record
// ---------------------------------------------------------------------------

/// The validated domain shape for a rider: exactly the two required string
/// fields, `name` and `status`.
///
/// A [`RiderRecord`] is only ever produced by successful schema validation
/// (see [`crate::validate`]); there is no other construction path, so holding
/// one is proof the source payload satisfied the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiderRecord {
    name: String,
    status: String,
}

impl RiderRecord {
    // Construction is reserved for the validator.
    pub(crate) fn from_validated(name: String, status: String) -> Self {
        Self { name, status }
    }

    /// The rider's name, verbatim from the source payload.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rider's status, verbatim from the source payload.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl std::fmt::Display for RiderRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.status)
    }
}
