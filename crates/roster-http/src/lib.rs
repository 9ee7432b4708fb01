//! Peloton HTTP roster adapter.
//!
//! Implements [`pipeline::Transport`] over HTTP: `GET {base_url}/riders/{id}`
//! against a real roster service. All protocol detail — status mapping, body
//! deserialisation, connection faults — lives here; the [`pipeline`] crate
//! sees only the three-way outcome contract.
//!
//! ## Status mapping
//!
//! | Backend answer | Outcome |
//! |----------------|---------|
//! | `200` with a JSON object body | `Found(payload)` |
//! | `404` | `NotFound` |
//! | any other status, connection fault, or unusable body | `Unavailable` |
//!
//! Runtime faults never surface as Rust errors from the trait method; the
//! contract is that every call resolves to exactly one outcome.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use pipeline::{RawPayload, RiderId, Transport, TransportOutcome};

/// Errors constructing an [`HttpTransport`].
///
/// Construction-time only: once built, the adapter reports faults through
/// [`TransportOutcome::Unavailable`], never through `Result`.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// The configured base URL could not be parsed.
    #[error("invalid roster base url '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL as configured.
        url: String,
        /// Parser description of the problem.
        reason: String,
    },
}

/// A roster service reached over HTTP.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates an adapter for the service at `base_url`, with a default
    /// client.
    pub fn new(base_url: &str) -> Result<Self, HttpTransportError> {
        Ok(Self::with_client(Client::new(), parse_base_url(base_url)?))
    }

    /// Creates an adapter with a preconfigured [`Client`] (timeouts,
    /// proxies, TLS setup are the caller's concern).
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn rider_url(&self, id: RiderId) -> String {
        format!("{}/riders/{}", self.base_url, id.as_u64())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn lookup(&self, id: RiderId) -> TransportOutcome {
        let url = self.rider_url(id);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(rider_id = %id, error = %err, "roster request obtained no response");
                return TransportOutcome::Unavailable;
            }
        };
        let status = response.status();
        let body = response.json::<Value>().await.ok();
        let outcome = map_response(status, body);
        debug!(rider_id = %id, status = %status, outcome = outcome.kind(), "roster answered");
        outcome
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, HttpTransportError> {
    Url::parse(base_url).map_err(|err| HttpTransportError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: err.to_string(),
    })
}

/// Maps an HTTP answer onto the transport contract.
///
/// Factored apart from socket I/O so the mapping is testable without a live
/// server. A `200` whose body is not a JSON object is unusable and maps to
/// `Unavailable`, not to a validation failure — no payload was obtained.
fn map_response(status: StatusCode, body: Option<Value>) -> TransportOutcome {
    match (status, body) {
        (StatusCode::OK, Some(value)) => match RawPayload::from_value(value) {
            Some(payload) => TransportOutcome::Found(payload),
            None => TransportOutcome::Unavailable,
        },
        (StatusCode::OK, None) => TransportOutcome::Unavailable,
        (StatusCode::NOT_FOUND, _) => TransportOutcome::NotFound,
        _ => TransportOutcome::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_with_object_body_maps_to_found() {
        let outcome = map_response(
            StatusCode::OK,
            Some(json!({"name": "Marianne Vos", "status": "GOAT"})),
        );
        match outcome {
            TransportOutcome::Found(payload) => {
                assert_eq!(payload.get("name"), Some(&json!("Marianne Vos")));
            }
            other => panic!("expected found, got {other:?}"),
        }
    }

    #[test]
    fn ok_with_unusable_body_maps_to_unavailable() {
        assert_eq!(
            map_response(StatusCode::OK, Some(json!("not an object"))),
            TransportOutcome::Unavailable
        );
        assert_eq!(
            map_response(StatusCode::OK, None),
            TransportOutcome::Unavailable
        );
    }

    #[test]
    fn not_found_maps_to_not_found() {
        assert_eq!(
            map_response(StatusCode::NOT_FOUND, None),
            TransportOutcome::NotFound
        );
        // A body on a 404 changes nothing.
        assert_eq!(
            map_response(StatusCode::NOT_FOUND, Some(json!({"error": "gone"}))),
            TransportOutcome::NotFound
        );
    }

    #[test]
    fn other_statuses_map_to_unavailable() {
        for status in [
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::BAD_GATEWAY,
            StatusCode::FORBIDDEN,
        ] {
            assert_eq!(
                map_response(status, Some(json!({"name": "x", "status": "y"}))),
                TransportOutcome::Unavailable,
                "status {status} must map to unavailable"
            );
        }
    }

    #[test]
    fn rider_urls_are_joined_without_duplicate_slashes() {
        let with_slash = HttpTransport::new("https://roster.example.com/api/").unwrap();
        let without_slash = HttpTransport::new("https://roster.example.com/api").unwrap();
        assert_eq!(
            with_slash.rider_url(RiderId::new(7)),
            "https://roster.example.com/api/riders/7"
        );
        assert_eq!(
            without_slash.rider_url(RiderId::new(7)),
            "https://roster.example.com/api/riders/7"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let err = HttpTransport::new("not a url").expect_err("garbage must not parse");
        assert!(err.to_string().contains("not a url"));
    }
}
