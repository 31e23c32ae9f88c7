pub mod answer;
pub mod direction;
pub mod drill_session;
pub mod score_table;
pub mod session_clock;
pub mod statistics;
pub mod vocabulary;
pub mod vocabulary_entry;

pub use answer::{AnswerFeedback, AnswerOutcome};
pub use direction::{DrillDirection, QuestionSide};
pub use drill_session::{DrillSession, Question, SessionState};
pub use score_table::ScoreTable;
pub use session_clock::SessionClock;
pub use statistics::{MissedTerm, SessionStatistics};
pub use vocabulary::Vocabulary;
pub use vocabulary_entry::VocabularyEntry;
