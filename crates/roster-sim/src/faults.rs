//! Injectable availability decisions for the simulated network.
//!
//! Random unavailability stands in for real-world unreliability. It sits
//! behind [`FaultInjector`] so pipeline tests can swap in a deterministic
//! decision instead.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides, per lookup, whether the simulated network responds at all.
pub trait FaultInjector: Send + Sync {
    /// Returns `true` if the next call should obtain no response.
    fn should_drop(&self) -> bool;
}

/// Drops calls at a fixed probability, the way a flaky network would.
///
/// Runs on a seeded [`StdRng`]: a given seed replays the same availability
/// sequence, call for call.
#[derive(Debug)]
pub struct RandomFaults {
    rng: Mutex<StdRng>,
    drop_probability: f64,
}

impl RandomFaults {
    /// Drop probability used by [`RandomFaults::from_seed`] and
    /// [`RandomFaults::from_entropy`].
    pub const DEFAULT_DROP_PROBABILITY: f64 = 0.33;

    /// Creates an injector dropping calls with `drop_probability`.
    ///
    /// Returns `None` unless `drop_probability` is a finite value in
    /// `[0.0, 1.0]`.
    #[must_use]
    pub fn new(seed: u64, drop_probability: f64) -> Option<Self> {
        if drop_probability.is_finite() && (0.0..=1.0).contains(&drop_probability) {
            Some(Self {
                rng: Mutex::new(StdRng::seed_from_u64(seed)),
                drop_probability,
            })
        } else {
            None
        }
    }

    /// Creates an injector with the default drop probability.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            drop_probability: Self::DEFAULT_DROP_PROBABILITY,
        }
    }

    /// Creates an injector seeded from OS entropy, for non-reproducible runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            drop_probability: Self::DEFAULT_DROP_PROBABILITY,
        }
    }
}

impl FaultInjector for RandomFaults {
    fn should_drop(&self) -> bool {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen::<f64>() < self.drop_probability
    }
}

/// Never drops a call. The deterministic default for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAvailable;

impl FaultInjector for AlwaysAvailable {
    fn should_drop(&self) -> bool {
        false
    }
}

/// Drops every call, as a permanently unreachable backend would.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysUnavailable;

impl FaultInjector for AlwaysUnavailable {
    fn should_drop(&self) -> bool {
        true
    }
}
