//! Peloton CLI entry point.
//!
//! This binary is the composition root for the entire system.
//! Responsibilities:
//!
//! 1. **Parse arguments** — rider id, transport selection, fault seed.
//! 2. **Wire observability** — configure `tracing-subscriber` with an
//!    env-filter layer. All `tracing` spans and structured events emitted by
//!    every crate in the workspace flow through this layer.
//! 3. **Construct infrastructure** — build the chosen
//!    [`pipeline::Transport`] implementation and inject it, together with
//!    the default validator, into the pipeline entry point.
//! 4. **Run one lookup** — exactly one request per invocation, inside a
//!    span carrying the run id, rendered to exactly one outcome event.
//!
//! A rendered failure is a user-visible outcome, not a process error: the
//! binary exits 0 for all three rendered shapes. Non-zero exit is reserved
//! for composition-root problems (unusable arguments, subscriber setup).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use pipeline::{lookup, render, LookupRunId, Rendering, RiderId, SchemaValidator, Transport};
use roster_http::HttpTransport;
use roster_sim::{RandomFaults, SimTransport};

/// Which backend answers the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TransportKind {
    /// In-memory fixture roster behind a simulated flaky network.
    Sim,
    /// A real roster service over HTTP.
    Http,
}

#[derive(Debug, Parser)]
#[command(
    name = "peloton",
    about = "Look up one rider through the layered result pipeline"
)]
struct Args {
    /// Rider identifier to look up.
    #[arg(long, default_value_t = 4)]
    id: u64,

    /// Transport backing the lookup.
    #[arg(long, value_enum, default_value_t = TransportKind::Sim)]
    transport: TransportKind,

    /// Base URL of the roster service. Required with `--transport http`.
    #[arg(long)]
    endpoint: Option<String>,

    /// Seed for the simulated network's fault sequence. Defaults to OS
    /// entropy. Sim transport only.
    #[arg(long)]
    seed: Option<u64>,
}

fn build_transport(args: &Args) -> Result<Box<dyn Transport>> {
    match args.transport {
        TransportKind::Sim => {
            let faults = match args.seed {
                Some(seed) => RandomFaults::from_seed(seed),
                None => RandomFaults::from_entropy(),
            };
            Ok(Box::new(SimTransport::new(faults)))
        }
        TransportKind::Http => {
            let endpoint = args
                .endpoint
                .as_deref()
                .context("--endpoint is required with --transport http")?;
            let transport =
                HttpTransport::new(endpoint).context("constructing the HTTP transport")?;
            Ok(Box::new(transport))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let transport = build_transport(&args)?;
    let run_id = LookupRunId::new_random();
    let rider_id = RiderId::new(args.id);

    let result = lookup(transport.as_ref(), &SchemaValidator, rider_id)
        .instrument(info_span!("lookup_run", run_id = %run_id, rider_id = %rider_id))
        .await;

    let rendering = render(result);
    match &rendering {
        Rendering::Failure(_) => error!(run_id = %run_id, "{rendering}"),
        Rendering::NotFound | Rendering::Delivered(_) => info!(run_id = %run_id, "{rendering}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_invocation() {
        let args = Args::parse_from(["peloton"]);
        assert_eq!(args.id, 4);
        assert_eq!(args.transport, TransportKind::Sim);
        assert!(args.endpoint.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn sim_transport_builds_without_an_endpoint() {
        let args = Args::parse_from(["peloton", "--seed", "7"]);
        assert!(build_transport(&args).is_ok());
    }

    #[test]
    fn http_transport_requires_an_endpoint() {
        let args = Args::parse_from(["peloton", "--transport", "http"]);
        let err = build_transport(&args).expect_err("missing endpoint must be rejected");
        assert!(err.to_string().contains("--endpoint"));
    }

    #[test]
    fn http_transport_builds_from_a_valid_endpoint() {
        let args = Args::parse_from([
            "peloton",
            "--transport",
            "http",
            "--endpoint",
            "https://roster.example.com",
        ]);
        assert!(build_transport(&args).is_ok());
    }
}
