//! Schema validation of raw payloads into [`RiderRecord`]s.
//!
//! The field policy lives behind [`RecordValidator`] so it is isolated and
//! independently testable; the pipeline itself never inspects payload
//! fields.

use serde_json::Value;

use crate::errors::{FaultKind, FaultList, FieldFault, ValidationError};
use crate::types::{RawPayload, RiderRecord};

/// Decides whether a raw payload satisfies the rider record schema.
///
/// Implementations must be pure: same payload in, same verdict out, no side
/// effects.
pub trait RecordValidator {
    /// Validates `payload`, producing a record or the full fault list.
    fn validate(&self, payload: &RawPayload) -> Result<RiderRecord, ValidationError>;
}

/// The default field policy: exactly two required string fields, `name` and
/// `status`.
///
/// No type coercion; unknown extra fields are ignored; missing or mistyped
/// fields are rejected. Every offending field is reported, in schema field
/// order — never just the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl RecordValidator for SchemaValidator {
    fn validate(&self, payload: &RawPayload) -> Result<RiderRecord, ValidationError> {
        let name = string_field(payload, "name");
        let status = string_field(payload, "status");
        match (name, status) {
            (Ok(name), Ok(status)) => Ok(RiderRecord::from_validated(name, status)),
            (Err(fault), Ok(_)) | (Ok(_), Err(fault)) => {
                Err(ValidationError::new(FaultList::single(fault)))
            }
            (Err(name_fault), Err(status_fault)) => {
                let mut faults = FaultList::single(name_fault);
                faults.push(status_fault);
                Err(ValidationError::new(faults))
            }
        }
    }
}

/// Extracts a required string field, with no coercion from other JSON types.
fn string_field(payload: &RawPayload, field: &'static str) -> Result<String, FieldFault> {
    match payload.get(field) {
        None => Err(FieldFault::new(field, FaultKind::Missing)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(FieldFault::new(field, FaultKind::WrongType)),
    }
}
