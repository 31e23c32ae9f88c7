//! Grading of free-text answers.
//!
//! Answers are compared after trimming and lowercasing. When that fails, both
//! sides are compared again with diacritics removed; a match there counts as
//! correct but the learner is shown the accented spelling.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    ExactCorrect,
    AccentCorrect,
    Incorrect,
}

impl AnswerOutcome {
    pub fn is_correct(self) -> bool {
        !matches!(self, AnswerOutcome::Incorrect)
    }

    /// How long feedback stays on screen before the next question.
    pub fn pause_ms(self, correct_pause_ms: u64, incorrect_pause_ms: u64) -> u64 {
        if self.is_correct() {
            correct_pause_ms
        } else {
            incorrect_pause_ms
        }
    }
}

/// Result handed back to the presentation layer after an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub term: String,
    pub outcome: AnswerOutcome,
    pub expected: String,
    pub given: String,
}

impl AnswerFeedback {
    pub fn message(&self) -> String {
        match self.outcome {
            AnswerOutcome::ExactCorrect => "✅ Correct !".to_string(),
            AnswerOutcome::AccentCorrect => {
                format!("✅ Correct ! Attention aux accents : '{}'", self.expected)
            }
            AnswerOutcome::Incorrect => {
                format!("❌ Faux ! La bonne réponse est '{}'.", self.expected)
            }
        }
    }
}

/// Compares a raw answer with the expected spelling.
pub fn grade(user_answer: &str, expected: &str) -> AnswerOutcome {
    let given = normalize(user_answer);
    let wanted = normalize(expected);

    if given == wanted {
        AnswerOutcome::ExactCorrect
    } else if strip_accents(&given) == strip_accents(&wanted) {
        AnswerOutcome::AccentCorrect
    } else {
        AnswerOutcome::Incorrect
    }
}

/// Trims, composes (NFC) and lowercases, so precomposed and combining
/// spellings of the same letter compare equal.
pub fn normalize(s: &str) -> String {
    s.trim().nfc().collect::<String>().to_lowercase()
}

pub fn strip_accents(s: &str) -> String {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        assert_eq!(grade("  la maison ", "La maison"), AnswerOutcome::ExactCorrect);
        assert_eq!(grade("DER HUND", "Der Hund"), AnswerOutcome::ExactCorrect);
    }

    #[test]
    fn test_accent_only_mismatch() {
        assert_eq!(grade("l'ete", "L'été"), AnswerOutcome::AccentCorrect);
        assert_eq!(grade("Grunden", "Gründen"), AnswerOutcome::AccentCorrect);
        assert!(AnswerOutcome::AccentCorrect.is_correct());
    }

    #[test]
    fn test_decomposed_input_is_exact() {
        // "é" typed as e + combining acute
        assert_eq!(grade("la capacite\u{301}", "La capacité"), AnswerOutcome::ExactCorrect);
    }

    #[test]
    fn test_wrong_answer() {
        assert_eq!(grade("der hunde", "Der Hund"), AnswerOutcome::Incorrect);
        assert_eq!(grade("", "Der Hund"), AnswerOutcome::Incorrect);
        assert!(!AnswerOutcome::Incorrect.is_correct());
    }

    #[test]
    fn test_pause_depends_on_outcome() {
        assert_eq!(AnswerOutcome::ExactCorrect.pause_ms(1000, 2000), 1000);
        assert_eq!(AnswerOutcome::AccentCorrect.pause_ms(1000, 2000), 1000);
        assert_eq!(AnswerOutcome::Incorrect.pause_ms(1000, 2000), 2000);
    }

    #[test]
    fn test_strip_accents_keeps_sharp_s() {
        assert_eq!(strip_accents("äusserst groß"), "ausserst groß");
    }

    #[test]
    fn test_feedback_message_mentions_spelling() {
        let feedback = AnswerFeedback {
            term: "Das Werk".to_string(),
            outcome: AnswerOutcome::AccentCorrect,
            expected: "L'usine".to_string(),
            given: "l'usine".to_string(),
        };
        assert!(feedback.message().contains("L'usine"));
    }
}
