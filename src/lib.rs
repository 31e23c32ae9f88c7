pub mod config;
pub mod error;
pub mod export;
pub mod models;

pub use error::{ConfigError, DrillError, VocabularyError};
pub use models::{
    AnswerFeedback, AnswerOutcome, DrillDirection, DrillSession, ScoreTable, SessionStatistics,
    Vocabulary, VocabularyEntry,
};
