//! Read-only summary of a drill session: scores, percentages, timing and the
//! terms that were missed most often.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionStatistics {
    pub correct: u32,
    pub incorrect: u32,
    pub answered: u32,
    pub accuracy_percent: f64,
    pub error_percent: f64,
    pub elapsed: Duration,
    pub paused: Duration,
    /// Most missed terms first; ties are ordered alphabetically.
    pub most_missed: Vec<MissedTerm>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedTerm {
    pub term: String,
    pub errors: u32,
}

impl SessionStatistics {
    pub fn compute(
        correct: u32,
        incorrect: u32,
        error_counts: &BTreeMap<String, u32>,
        elapsed: Duration,
        paused: Duration,
        most_missed_len: usize,
    ) -> Self {
        let answered = correct + incorrect;
        let (accuracy_percent, error_percent) = if answered == 0 {
            (0.0, 0.0)
        } else {
            let total = f64::from(answered);
            (
                f64::from(correct) * 100.0 / total,
                f64::from(incorrect) * 100.0 / total,
            )
        };

        Self {
            correct,
            incorrect,
            answered,
            accuracy_percent,
            error_percent,
            elapsed,
            paused,
            most_missed: rank_missed(error_counts, most_missed_len),
        }
    }

    /// Score line shown under the drill form.
    pub fn score_line(&self) -> String {
        format!(
            "Score: {} corrects, {} incorrects",
            self.correct, self.incorrect
        )
    }
}

fn rank_missed(error_counts: &BTreeMap<String, u32>, limit: usize) -> Vec<MissedTerm> {
    let mut ranked: Vec<_> = error_counts
        .iter()
        .filter(|(_, errors)| **errors > 0)
        .map(|(term, &errors)| MissedTerm {
            term: term.clone(),
            errors,
        })
        .collect();
    // BTreeMap order is alphabetical and sort_by is stable
    ranked.sort_by(|a, b| b.errors.cmp(&a.errors));
    ranked.truncate(limit);
    ranked
}
