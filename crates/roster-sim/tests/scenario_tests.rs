//! End-to-end scenarios: simulated transport, pipeline, renderer.
//!
//! Each scenario pins one terminal state of the request lifecycle
//! (delivered, not found, validation failed, transport failed) using a
//! deterministic fault injector, so no test depends on the random fault
//! distribution.

use pipeline::{
    lookup, render, FaultKind, LookupError, Presence, Rendering, RiderId, SchemaValidator,
    NO_RESPONSE,
};
use roster_sim::{AlwaysAvailable, AlwaysUnavailable, RandomFaults, SimTransport};

#[tokio::test]
async fn known_rider_is_delivered_with_name_and_status() {
    let transport = SimTransport::new(AlwaysAvailable);
    let result = lookup(&transport, &SchemaValidator, RiderId::new(1)).await;
    match render(result) {
        Rendering::Delivered(record) => {
            assert_eq!(record.name(), "Peter Sagan");
            assert_eq!(record.status(), "Fading");
        }
        other => panic!("expected a delivered rider, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_rider_renders_not_found() {
    let transport = SimTransport::new(AlwaysAvailable);
    let result = lookup(&transport, &SchemaValidator, RiderId::new(99)).await;
    assert_eq!(render(result), Rendering::NotFound);
}

#[tokio::test]
async fn malformed_record_renders_the_fault_list() {
    let transport = SimTransport::new(AlwaysAvailable);
    let result = lookup(&transport, &SchemaValidator, RiderId::new(4)).await;
    let rendering = render(result);
    match &rendering {
        Rendering::Failure(LookupError::Validation(err)) => {
            let faults = err.faults().faults();
            assert!(faults
                .iter()
                .any(|f| f.field() == "name" && f.kind() == FaultKind::Missing));
        }
        other => panic!("expected a validation failure, got {other:?}"),
    }
    assert!(rendering.to_string().contains("missing: name"));
}

#[tokio::test]
async fn dropped_call_renders_a_transport_failure() {
    let transport = SimTransport::new(AlwaysUnavailable);
    let result = lookup(&transport, &SchemaValidator, RiderId::new(7)).await;
    match render(result) {
        Rendering::Failure(LookupError::Transport { reason }) => {
            assert_eq!(reason, NO_RESPONSE);
        }
        other => panic!("expected a transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn absence_is_never_routed_through_an_error_path() {
    let transport = SimTransport::new(AlwaysAvailable);
    for raw in [0, 3, 5, 42, 99] {
        let result = lookup(&transport, &SchemaValidator, RiderId::new(raw)).await;
        assert_eq!(result, Ok(Presence::Absent), "id {raw} is not in the roster");
    }
}

#[tokio::test]
async fn seeded_runs_replay_identically() {
    let ids: Vec<RiderId> = (0..16).map(RiderId::new).collect();
    let mut runs = Vec::new();
    for _ in 0..2 {
        let transport = SimTransport::new(RandomFaults::from_seed(2024));
        let mut outcomes = Vec::new();
        for id in &ids {
            let result = lookup(&transport, &SchemaValidator, *id).await;
            outcomes.push(render(result));
        }
        runs.push(outcomes);
    }
    assert_eq!(runs[0], runs[1]);
}
