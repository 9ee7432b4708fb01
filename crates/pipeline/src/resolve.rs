//! Normalisation of transport outcomes into the layered lookup result.
//!
//! This is the composition point of the three failure-capable stages:
//! transport call, existence check, schema validation. Everything here is
//! pure apart from the transport call itself.

use tracing::debug;

use crate::errors::LookupError;
use crate::identifiers::RiderId;
use crate::transport::{Transport, TransportOutcome};
use crate::types::RiderRecord;
use crate::validate::RecordValidator;

/// Reason attached to transport failures when no response was obtained.
pub const NO_RESPONSE: &str = "no response obtained";

/// The inner layer of a [`LookupResult`]: whether the rider exists.
///
/// Only reachable through the outer success layer, so a [`Presence::Present`]
/// value is guaranteed to satisfy the record schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    /// The rider exists and its payload validated.
    Present(RiderRecord),
    /// The backend answered: no such rider. Not an error.
    Absent,
}

/// The two-level result of one lookup: transport or validation failure on
/// the outside, presence or absence on the inside.
///
/// The outer `Err` and the inner `Present`/`Absent` are mutually exclusive
/// by construction.
pub type LookupResult = Result<Presence, LookupError>;

/// Collapses one transport outcome into one [`LookupResult`].
///
/// Total and deterministic: every well-formed outcome maps to exactly one
/// result, with no hidden state. Validation runs only on `Found` payloads;
/// absence is passed through as a success, never as an error.
pub fn resolve<V: RecordValidator>(outcome: TransportOutcome, validator: &V) -> LookupResult {
    match outcome {
        TransportOutcome::Unavailable => Err(LookupError::Transport {
            reason: NO_RESPONSE.to_string(),
        }),
        TransportOutcome::NotFound => Ok(Presence::Absent),
        TransportOutcome::Found(payload) => match validator.validate(&payload) {
            Ok(record) => Ok(Presence::Present(record)),
            Err(err) => Err(err.into()),
        },
    }
}

/// Runs one lookup end to end: transport call, then normalisation.
///
/// The transport call is the only suspending step; everything downstream is
/// pure, so concurrent invocations need no coordination.
pub async fn lookup<T, V>(transport: &T, validator: &V, id: RiderId) -> LookupResult
where
    T: Transport + ?Sized,
    V: RecordValidator,
{
    let outcome = transport.lookup(id).await;
    debug!(rider_id = %id, outcome = outcome.kind(), "transport answered");
    resolve(outcome, validator)
}
