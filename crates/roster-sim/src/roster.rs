//! The in-memory fixture roster and its transport implementation.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use pipeline::{RawPayload, RiderId, Transport, TransportOutcome};

use crate::faults::FaultInjector;

/// A simulated roster backend: fixture records served through a flaky
/// simulated network.
///
/// The fixture contents are demo data, not contract. The record for id 4
/// carries a misnamed `nome` field so the validation-failure path can be
/// exercised end to end.
pub struct SimTransport<F> {
    injector: F,
}

impl<F: FaultInjector> SimTransport<F> {
    /// Creates a simulated backend whose availability is decided by
    /// `injector`.
    pub fn new(injector: F) -> Self {
        Self { injector }
    }
}

#[async_trait]
impl<F: FaultInjector> Transport for SimTransport<F> {
    async fn lookup(&self, id: RiderId) -> TransportOutcome {
        if self.injector.should_drop() {
            debug!(rider_id = %id, "simulated network dropped the call");
            return TransportOutcome::Unavailable;
        }
        match fixture(id) {
            Some(payload) => TransportOutcome::Found(payload),
            None => TransportOutcome::NotFound,
        }
    }
}

fn fixture(id: RiderId) -> Option<RawPayload> {
    let record = match id.as_u64() {
        1 => json!({"name": "Peter Sagan", "status": "Fading"}),
        2 => json!({"name": "Tadej Pogačar", "status": "Rising"}),
        // Misnamed on purpose; see the type-level doc.
        4 => json!({"nome": "Lance Armstrong", "status": "Shameless"}),
        7 => json!({"name": "Marianne Vos", "status": "GOAT"}),
        _ => return None,
    };
    RawPayload::from_value(record)
}
