use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::LatencyConfig;

/// Source of the index choices behind response sampling and latency jitter.
///
/// Injected into every session so tests can pin the output: a seeded
/// [`RandomPicker`] for reproducible sequences, or [`FirstPicker`] to always
/// take the first entry.
pub trait Picker: Send {
    /// Return an index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by a `rand` generator.
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + Send> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always picks index 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// The answering side of a chat session.
///
/// The portfolio assistant and each playground lab implement this trait so
/// sessions and the reply timer treat them uniformly.
pub trait Responder: Send + Sync {
    /// Human-readable responder name.
    fn name(&self) -> &str;

    /// Opening message for a new session, optionally about a named subject.
    fn greeting(&self, subject: Option<&str>) -> String;

    /// Produce the reply text for `query`. Must not fail.
    fn compose(&self, query: &str, subject: Option<&str>, picker: &mut dyn Picker) -> String;

    /// Simulated "thinking" delay applied before the reply is delivered.
    fn latency(&self) -> LatencyConfig;
}
