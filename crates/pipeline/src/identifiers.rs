//! Newtype domain identifiers.
//!
//! Every identity-bearing concept is a distinct newtype wrapping a primitive.
//! This prevents accidentally interchanging — for example — a [`RiderId`]
//! with a run correlation id even though one is an integer and the other a
//! UUID under the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identifiers — backend-integer-backed
// ---------------------------------------------------------------------------

/// Identifies a rider in the roster backing store.
///
/// Wraps the integer key assigned by the backend. The pipeline enforces no
/// uniqueness constraint on these keys; the backing store guarantees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiderId(u64);

impl RiderId {
    /// Creates a new identifier from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RiderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers — UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single lookup invocation (one pass through the pipeline).
///
/// Generated fresh for every invocation; propagated through spans so all
/// activity from a single lookup can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupRunId(Uuid);

impl LookupRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a [`LookupRunId`] from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for LookupRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rider_id_roundtrips_raw_value() {
        let id = RiderId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn lookup_run_ids_are_unique() {
        assert_ne!(LookupRunId::new_random(), LookupRunId::new_random());
    }

    #[test]
    fn lookup_run_id_from_uuid_roundtrip() {
        let uuid = Uuid::new_v4();
        assert_eq!(LookupRunId::from_uuid(uuid).as_uuid(), uuid);
    }
}
