use crate::domain::model::{Combination, Draw, NumberSet};
use crate::domain::rules::{LOTTO_MAX, LOTTO_MIN, MAX_DRAW_ATTEMPTS, NUMBERS_PER_COMBINATION};
use crate::utils::error::{DrawError, Result};
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;

/// Collapse combinations with equal value-sets, keeping first-occurrence order.
pub fn unique_value_sets(combinations: &[Combination]) -> Vec<NumberSet> {
    let mut seen = HashSet::with_capacity(combinations.len());
    combinations
        .iter()
        .map(Combination::value_set)
        .filter(|set| seen.insert(*set))
        .collect()
}

/// Rejection sampler for draws that avoid every submitted value-set.
#[derive(Debug, Clone, Copy)]
pub struct DrawGenerator {
    max_attempts: usize,
}

impl DrawGenerator {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Uniform sample of distinct numbers in the game range.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> NumberSet {
        let span = (LOTTO_MAX - LOTTO_MIN) as usize + 1;
        index::sample(rng, span, NUMBERS_PER_COMBINATION)
            .into_iter()
            .map(|i| LOTTO_MIN + i as u8)
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(&self, forbidden: &[NumberSet], rng: &mut R) -> Result<Draw> {
        let forbidden: HashSet<NumberSet> = forbidden.iter().copied().collect();

        for attempt in 1..=self.max_attempts {
            let candidate = Self::sample(rng);
            if !forbidden.contains(&candidate) {
                tracing::debug!("Draw found after {} attempt(s)", attempt);
                return Ok(Draw::from(candidate));
            }
            tracing::warn!(
                "Sampled draw {:?} matches a submitted combination, resampling",
                candidate.to_sorted_vec()
            );
        }

        tracing::error!(
            "❌ No non-matching draw after {} attempts ({} forbidden sets)",
            self.max_attempts,
            forbidden.len()
        );
        Err(DrawError::DrawGenerationFailed {
            attempts: self.max_attempts,
        })
    }
}

impl Default for DrawGenerator {
    fn default() -> Self {
        Self::new(MAX_DRAW_ATTEMPTS)
    }
}
