use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draws made while assembling lunches.
pub trait ItemPicker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> ItemPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each index is reduced modulo the list length.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl ItemPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        value % len
    }
}
