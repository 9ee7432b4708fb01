//! The transport port: how the pipeline reaches the roster backend.
//!
//! Infrastructure crates implement [`Transport`]; the pipeline sees only the
//! three-way [`TransportOutcome`] contract and stays agnostic to whatever
//! protocol (HTTP, RPC, in-memory fixture) backs the call.

use async_trait::async_trait;

use crate::identifiers::RiderId;
use crate::types::RawPayload;

/// The three-way answer a transport produces for one [`RiderId`].
///
/// `Unavailable` is distinct from `NotFound`: the former means the query
/// could not be answered at all, the latter that it was answered negatively.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportOutcome {
    /// The backend answered with a raw record for the id.
    Found(RawPayload),
    /// The backend answered: no entity with this id exists.
    NotFound,
    /// No response was obtained for the query.
    Unavailable,
}

impl TransportOutcome {
    /// Stable tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportOutcome::Found(_) => "found",
            TransportOutcome::NotFound => "not_found",
            TransportOutcome::Unavailable => "unavailable",
        }
    }
}

/// A roster backend reachable by identifier lookup.
///
/// One call resolves to exactly one outcome — no partial responses, no
/// streaming. Retry, timeout, and cancellation policy live behind this
/// trait, never in the pipeline. Implementations hold no state the pipeline
/// depends on across calls, so callers may run lookups concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Looks up `id`, resolving to exactly one [`TransportOutcome`].
    async fn lookup(&self, id: RiderId) -> TransportOutcome;
}
