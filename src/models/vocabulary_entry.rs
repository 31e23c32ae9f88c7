//! VocabularyEntry is a pair <term, translation>. The term is the German side,
//! the translation the French side.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub term: String,
    pub translation: String,
}

impl VocabularyEntry {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}
