//! Per-term difficulty weights and the weighted draw over them.
//!
//! Each term behaves as if it appeared `weight` times in a bag that is drawn
//! from uniformly, so a term is picked with probability
//! `weight(term) / total_weight`. Missed terms gain weight faster than
//! answered ones lose it:
//! - correct answer: weight - 1, never below [`MIN_WEIGHT`]
//! - wrong answer: weight + [`MISS_PENALTY`]

use super::Vocabulary;
use crate::error::DrillError;
use rand::Rng;
use std::collections::BTreeMap;

pub const MIN_WEIGHT: u32 = 1;
pub const MISS_PENALTY: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTable {
    weights: BTreeMap<String, u32>,
}

impl ScoreTable {
    /// Builds a table with weight 1 for every vocabulary term.
    pub fn reset(vocabulary: &Vocabulary) -> Self {
        Self {
            weights: vocabulary
                .terms()
                .map(|term| (term.to_string(), MIN_WEIGHT))
                .collect(),
        }
    }

    pub fn weight(&self, term: &str) -> Option<u32> {
        self.weights.get(term).copied()
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.values().map(|&w| u64::from(w)).sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    /// Draws one term with probability proportional to its weight.
    pub fn pick_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, DrillError> {
        let total = self.total_weight();
        if total == 0 {
            return Err(DrillError::EmptyVocabulary);
        }

        let mut ticket = rng.random_range(0..total);
        for (term, &weight) in &self.weights {
            let weight = u64::from(weight);
            if ticket < weight {
                return Ok(term);
            }
            ticket -= weight;
        }

        // ticket < total, so the walk always ends inside the table
        unreachable!("weighted draw ran past the end of the score table")
    }

    /// Lowers the weight of a correctly answered term. Returns the new weight.
    pub fn reward(&mut self, term: &str) -> Result<u32, DrillError> {
        let weight = self.weight_mut(term)?;
        *weight = weight.saturating_sub(1).max(MIN_WEIGHT);
        Ok(*weight)
    }

    /// Raises the weight of a missed term. Returns the new weight.
    pub fn penalize(&mut self, term: &str) -> Result<u32, DrillError> {
        let weight = self.weight_mut(term)?;
        *weight = weight.saturating_add(MISS_PENALTY);
        Ok(*weight)
    }

    fn weight_mut(&mut self, term: &str) -> Result<&mut u32, DrillError> {
        self.weights
            .get_mut(term)
            .ok_or_else(|| DrillError::UnknownTerm(term.to_string()))
    }

    #[cfg(test)]
    pub(crate) fn with_weights<'a>(weights: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        Self {
            weights: weights
                .into_iter()
                .map(|(term, w)| (term.to_string(), w.max(MIN_WEIGHT)))
                .collect(),
        }
    }
}
