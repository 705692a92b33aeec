//! Score generation
//!
//! Scores are cosmetic. They are drawn uniformly from `0..=100` with a
//! non-cryptographic RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Highest score a challenger can be seeded with (inclusive)
pub const MAX_SCORE: u8 = 100;

/// Anything that can hand out scores for new entries
pub trait ScoreSource: Send {
    /// Next score, always within `0..=MAX_SCORE`
    fn next_score(&mut self) -> u8;
}

/// Uniform random scores
///
/// Uses the thread-local RNG by default. A seeded instance replays the
/// same score sequence, which is handy for demos and bug reports.
#[derive(Debug)]
pub struct RandomScore {
    seeded: Option<StdRng>,
}

impl RandomScore {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    /// Deterministic sequence for the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Build from an optional seed (config / CLI)
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomScore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSource for RandomScore {
    fn next_score(&mut self) -> u8 {
        match &mut self.seeded {
            Some(rng) => rng.gen_range(0..=MAX_SCORE),
            None => rand::thread_rng().gen_range(0..=MAX_SCORE),
        }
    }
}

/// Hands out a fixed list of scores, then falls back to zero
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedScores {
    scores: std::collections::VecDeque<u8>,
}

#[cfg(test)]
impl ScriptedScores {
    pub fn new(scores: impl IntoIterator<Item = u8>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl ScoreSource for ScriptedScores {
    fn next_score(&mut self) -> u8 {
        self.scores.pop_front().unwrap_or(0)
    }
}
