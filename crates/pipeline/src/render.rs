//! Exhaustive rendering of lookup results into user-visible messages.
//!
//! [`render`] is the outermost boundary: both error kinds are converted to a
//! message here and nothing propagates further. The conversion is a
//! structurally exhaustive match with no wildcard arm, so growing the result
//! type is a compile-time-visible gap, never a silent fallthrough.

use crate::errors::LookupError;
use crate::resolve::{LookupResult, Presence};
use crate::types::RiderRecord;

/// The single user-visible message produced for one lookup.
///
/// Exactly three shapes exist, one per terminal pipeline state.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
    /// The lookup failed; carries the full error for diagnostic display.
    Failure(LookupError),
    /// The rider does not exist. Distinct from every failure shape.
    NotFound,
    /// The rider was found and its payload validated.
    Delivered(RiderRecord),
}

impl Rendering {
    /// Returns `true` for the failure shape.
    pub fn is_failure(&self) -> bool {
        matches!(self, Rendering::Failure(_))
    }
}

/// Maps one lookup result to exactly one rendering.
pub fn render(result: LookupResult) -> Rendering {
    match result {
        Err(err) => Rendering::Failure(err),
        Ok(Presence::Absent) => Rendering::NotFound,
        Ok(Presence::Present(record)) => Rendering::Delivered(record),
    }
}

impl std::fmt::Display for Rendering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rendering::Failure(err) => write!(f, "lookup failed: {err}"),
            Rendering::NotFound => write!(f, "rider not found"),
            Rendering::Delivered(record) => {
                write!(f, "found {}, status: {}", record.name(), record.status())
            }
        }
    }
}
