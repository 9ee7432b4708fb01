//! Error types for the lookup pipeline.
//!
//! Two independent failure kinds are modelled and never conflated:
//! [`LookupError::Transport`] (the query could not be completed) and
//! [`LookupError::Validation`] (the query completed but the payload does not
//! satisfy the record schema). Absence of a rider is not an error at all —
//! it is represented by [`crate::Presence::Absent`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Field-level validation faults
// ---------------------------------------------------------------------------

/// How a single payload field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// The field is absent from the payload.
    Missing,
    /// The field is present but its value is not a string.
    WrongType,
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaultKind::Missing => write!(f, "missing"),
            FaultKind::WrongType => write!(f, "wrong type"),
        }
    }
}

// ---------------------------------------------------------------------------

/// One field-level validation fault: the offending field plus the nature of
/// the mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFault {
    field: String,
    kind: FaultKind,
}

impl FieldFault {
    /// Creates a fault for `field`.
    pub fn new(field: impl Into<String>, kind: FaultKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// The name of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The nature of the mismatch.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }
}

impl std::fmt::Display for FieldFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.field)
    }
}

// ---------------------------------------------------------------------------

/// A non-empty ordered list of field-level validation faults.
///
/// Emptiness is rejected at construction, so a validation failure with no
/// named faults is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultList(Vec<FieldFault>);

impl FaultList {
    /// Creates a fault list, returning `None` if `faults` is empty.
    pub fn new(faults: Vec<FieldFault>) -> Option<Self> {
        if faults.is_empty() {
            None
        } else {
            Some(Self(faults))
        }
    }

    /// Creates a list carrying a single fault.
    pub fn single(fault: FieldFault) -> Self {
        Self(vec![fault])
    }

    /// Appends a further fault. The list only ever grows.
    pub fn push(&mut self, fault: FieldFault) {
        self.0.push(fault);
    }

    /// The faults, in the order they were recorded (schema field order for
    /// the default validator).
    pub fn faults(&self) -> &[FieldFault] {
        &self.0
    }

    /// Number of faults carried. Always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the faults in order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldFault> {
        self.0.iter()
    }
}

impl std::fmt::Display for FaultList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for fault in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{fault}")?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// The payload did not satisfy the rider record schema.
///
/// Carries every offending field, not just the first. Field data that did
/// validate is discarded rather than partially trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid rider payload: {faults}")]
pub struct ValidationError {
    faults: FaultList,
}

impl ValidationError {
    /// Creates a validation error from its fault list.
    pub fn new(faults: FaultList) -> Self {
        Self { faults }
    }

    /// The full fault list.
    pub fn faults(&self) -> &FaultList {
        &self.faults
    }
}

// ---------------------------------------------------------------------------

/// Errors terminating a lookup.
///
/// Both variants are terminal for the request: they are caught at the
/// rendering boundary and converted to a user-visible message, never
/// re-raised past it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LookupError {
    /// The query could not be completed at all.
    ///
    /// Produced when the transport obtains no answer (connection failure,
    /// timeout, unusable response). The pipeline never retries; retry
    /// policy, where wanted, belongs to the transport adapter.
    #[error("transport failure: {reason}")]
    Transport {
        /// Human-readable description of the transport fault.
        reason: String,
    },

    /// The query completed and returned data, but the payload does not
    /// satisfy the rider record schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
