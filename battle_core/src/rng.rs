//! Random source abstraction
//!
//! Every roll in a battle goes through [`RandomSource`] so tests can swap
//! in [`ScriptedSource`] and force exact outcomes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Bernoulli and uniform-choice sampling
pub trait RandomSource {
    /// Draw `true` with probability `p`.
    ///
    /// `p <= 0` (or NaN) never triggers and `p >= 1` always triggers.
    fn bool(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform choice from a slice, `None` if it is empty
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn bool(&mut self, p: f64) -> bool {
        (**self).bool(p)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Adapts any `rand` generator into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

/// Seedable source used by default
pub type SeededSource = RngSource<ChaCha8Rng>;

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic source: the same seed replays the same battle
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn bool(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            false
        } else if p >= 1.0 {
            true
        } else {
            self.rng.gen_bool(p)
        }
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays queued outcomes instead of rolling.
///
/// Bool draws are consumed in call order regardless of the requested
/// probability. Exhausted queues yield `false` and index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    bools: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source whose every bool draw is `false`
    pub fn never() -> Self {
        Self::default()
    }

    pub fn with_bools(mut self, outcomes: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(outcomes);
        self
    }

    pub fn with_picks(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(indices);
        self
    }

    pub fn push_bool(&mut self, outcome: bool) {
        self.bools.push_back(outcome);
    }

    pub fn push_pick(&mut self, index: usize) {
        self.picks.push_back(index);
    }

    /// Number of bool outcomes not yet consumed
    pub fn remaining_bools(&self) -> usize {
        self.bools.len()
    }
}

impl RandomSource for ScriptedSource {
    fn bool(&mut self, _p: f64) -> bool {
        self.bools.pop_front().unwrap_or(false)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let index = self.picks.pop_front().unwrap_or(0);
        if len == 0 {
            0
        } else {
            index.min(len - 1)
        }
    }
}
