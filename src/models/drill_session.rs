//! Drill session management for weighted vocabulary practice.
//! Owns the score table, the current question and the running counters.

use super::answer::{self, AnswerFeedback};
use super::{DrillDirection, QuestionSide, ScoreTable, SessionClock, SessionStatistics, Vocabulary};
use crate::error::DrillError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::time::Instant;

/// Lifecycle of a session. There is no finished state: drilling goes on
/// until the learner resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    AwaitingDirection,
    Drilling,
}

/// A question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub term: String,
    pub side: QuestionSide,
    pub prompt: String,
    pub expected: String,
}

pub struct DrillSession {
    vocabulary: Vocabulary,
    scores: ScoreTable,
    state: SessionState,
    direction: Option<DrillDirection>,
    current: Option<Question>,
    correct: u32,
    incorrect: u32,
    error_counts: BTreeMap<String, u32>,
    clock: SessionClock,
    rng: ChaCha8Rng,
}

impl DrillSession {
    /// Creates a session seeded from the thread RNG.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_seed(vocabulary, rand::random())
    }

    /// Creates a session whose draws are reproducible for a given seed.
    pub fn with_seed(vocabulary: Vocabulary, seed: u64) -> Self {
        let scores = ScoreTable::reset(&vocabulary);
        Self {
            vocabulary,
            scores,
            state: SessionState::NotStarted,
            direction: None,
            current: None,
            correct: 0,
            incorrect: 0,
            error_counts: BTreeMap::new(),
            clock: SessionClock::start(Instant::now()),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Leaves `NotStarted`. An empty vocabulary cannot be drilled.
    pub fn start(&mut self) -> Result<(), DrillError> {
        if self.vocabulary.is_empty() {
            return Err(DrillError::EmptyVocabulary);
        }
        if self.state == SessionState::NotStarted {
            self.state = SessionState::AwaitingDirection;
            self.clock = SessionClock::start(Instant::now());
            tracing::info!(
                vocabulary = %self.vocabulary.name,
                terms = self.vocabulary.len(),
                "drill session started"
            );
        }
        Ok(())
    }

    /// Sets the drill direction and asks the first question.
    pub fn choose_direction(&mut self, direction: DrillDirection) -> Result<&Question, DrillError> {
        if self.state == SessionState::NotStarted {
            return Err(DrillError::NotStarted);
        }
        tracing::debug!(?direction, "drill direction chosen");
        self.direction = Some(direction);
        self.state = SessionState::Drilling;
        self.next_question()
    }

    /// Grades `input` against the current question, updates the weights and
    /// moves on to the next question.
    pub fn submit_answer(&mut self, input: &str) -> Result<AnswerFeedback, DrillError> {
        let question = self.current.take().ok_or(DrillError::NoActiveQuestion)?;
        let feedback = match self.record_answer(&question.term, input, &question.expected) {
            Ok(feedback) => feedback,
            Err(err) => {
                self.current = Some(question);
                return Err(err);
            }
        };
        self.next_question()?;
        Ok(feedback)
    }

    /// Grades one answer for `term` and applies the score policy:
    /// a correct answer lowers the weight by one (floor 1), a wrong answer
    /// raises it by two and counts an error for the term.
    pub fn record_answer(
        &mut self,
        term: &str,
        user_answer: &str,
        expected_answer: &str,
    ) -> Result<AnswerFeedback, DrillError> {
        let outcome = answer::grade(user_answer, expected_answer);

        let weight = if outcome.is_correct() {
            let weight = self.scores.reward(term)?;
            self.correct += 1;
            weight
        } else {
            let weight = self.scores.penalize(term)?;
            self.incorrect += 1;
            *self.error_counts.entry(term.to_string()).or_insert(0) += 1;
            weight
        };

        tracing::debug!(term, ?outcome, weight, "answer recorded");

        Ok(AnswerFeedback {
            term: term.to_string(),
            outcome,
            expected: expected_answer.to_string(),
            given: user_answer.trim().to_string(),
        })
    }

    /// Back to `NotStarted` with every weight at 1 and all counters cleared.
    pub fn reset(&mut self) {
        self.scores = ScoreTable::reset(&self.vocabulary);
        self.state = SessionState::NotStarted;
        self.direction = None;
        self.current = None;
        self.correct = 0;
        self.incorrect = 0;
        self.error_counts.clear();
        self.clock = SessionClock::start(Instant::now());
        tracing::info!("drill session reset");
    }

    /// Swaps the word list; the session starts over.
    pub fn replace_vocabulary(&mut self, vocabulary: Vocabulary) {
        tracing::info!(
            vocabulary = %vocabulary.name,
            terms = vocabulary.len(),
            "vocabulary replaced"
        );
        self.vocabulary = vocabulary;
        self.reset();
    }

    fn next_question(&mut self) -> Result<&Question, DrillError> {
        let direction = self.direction.ok_or(DrillError::NotStarted)?;
        let term = self.scores.pick_next(&mut self.rng)?.to_string();
        let translation = self
            .vocabulary
            .translation(&term)
            .ok_or_else(|| DrillError::UnknownTerm(term.clone()))?;

        let side = direction.resolve(&mut self.rng);
        let question = Question {
            prompt: side.prompt(&term, translation),
            expected: side.expected(&term, translation).to_string(),
            term,
            side,
        };
        let question: &Question = self.current.insert(question);
        Ok(question)
    }

    pub fn pause(&mut self, now: Instant) {
        self.clock.pause(now);
    }

    pub fn resume(&mut self, now: Instant) {
        self.clock.resume(now);
    }

    pub fn statistics(&self, now: Instant, most_missed_len: usize) -> SessionStatistics {
        SessionStatistics::compute(
            self.correct,
            self.incorrect,
            &self.error_counts,
            self.clock.elapsed(now),
            self.clock.paused(now),
            most_missed_len,
        )
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn direction(&self) -> Option<DrillDirection> {
        self.direction
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn error_count(&self, term: &str) -> u32 {
        self.error_counts.get(term).copied().unwrap_or(0)
    }

    pub fn error_counts(&self) -> &BTreeMap<String, u32> {
        &self.error_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerOutcome, VocabularyEntry};

    fn two_words() -> Vocabulary {
        [
            VocabularyEntry::new("Das Haus", "La maison"),
            VocabularyEntry::new("Der Hund", "Le chien"),
        ]
        .into_iter()
        .collect()
    }

    fn drilling(direction: DrillDirection) -> DrillSession {
        let mut session = DrillSession::with_seed(two_words(), 7);
        session.start().unwrap();
        session.choose_direction(direction).unwrap();
        session
    }

    #[test]
    fn test_new_session_has_uniform_weights() {
        let session = DrillSession::with_seed(two_words(), 1);

        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.scores().weight("Das Haus"), Some(1));
        assert_eq!(session.scores().weight("Der Hund"), Some(1));
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_start_with_empty_vocabulary_fails() {
        let mut session = DrillSession::with_seed(Vocabulary::new("Empty"), 1);

        assert_eq!(session.start(), Err(DrillError::EmptyVocabulary));
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_direction_requires_start() {
        let mut session = DrillSession::with_seed(two_words(), 1);

        assert_eq!(
            session.choose_direction(DrillDirection::Mixed).err(),
            Some(DrillError::NotStarted)
        );
    }

    #[test]
    fn test_choose_direction_asks_first_question() {
        let session = drilling(DrillDirection::GermanToFrench);

        assert_eq!(session.state(), SessionState::Drilling);
        let question = session.current_question().unwrap();
        assert_eq!(question.side, QuestionSide::AskFrench);
        assert_eq!(
            Some(question.expected.as_str()),
            session.vocabulary().translation(&question.term)
        );
    }

    #[test]
    fn test_mixed_direction_varies_per_question() {
        let mut session = drilling(DrillDirection::Mixed);
        let mut sides = Vec::new();

        for _ in 0..50 {
            let question = session.current_question().unwrap().clone();
            let expected = match question.side {
                QuestionSide::AskFrench => session.vocabulary().translation(&question.term),
                QuestionSide::AskGerman => Some(question.term.as_str()),
            };
            assert_eq!(expected, Some(question.expected.as_str()));
            sides.push(question.side);
            session.submit_answer(&question.expected).unwrap();
        }

        assert!(sides.contains(&QuestionSide::AskGerman));
        assert!(sides.contains(&QuestionSide::AskFrench));
        assert_eq!(session.direction(), Some(DrillDirection::Mixed));
    }

    #[test]
    fn test_submit_correct_answer() {
        let mut session = drilling(DrillDirection::FrenchToGerman);
        let question = session.current_question().unwrap().clone();

        let feedback = session.submit_answer(&question.expected.to_uppercase()).unwrap();

        assert_eq!(feedback.outcome, AnswerOutcome::ExactCorrect);
        assert_eq!(feedback.term, question.term);
        assert_eq!(session.correct(), 1);
        assert_eq!(session.scores().weight(&question.term), Some(1));
        assert!(session.current_question().is_some());
    }

    #[test]
    fn test_submit_wrong_answer() {
        let mut session = drilling(DrillDirection::GermanToFrench);
        let term = session.current_question().unwrap().term.clone();

        let feedback = session.submit_answer("keine Ahnung").unwrap();

        assert_eq!(feedback.outcome, AnswerOutcome::Incorrect);
        assert_eq!(session.incorrect(), 1);
        assert_eq!(session.error_count(&term), 1);
        assert_eq!(session.scores().weight(&term), Some(3));
    }

    #[test]
    fn test_submit_without_question_fails() {
        let mut session = DrillSession::with_seed(two_words(), 1);
        session.start().unwrap();

        assert_eq!(session.submit_answer("x"), Err(DrillError::NoActiveQuestion));
    }

    #[test]
    fn test_record_answer_unknown_term_changes_nothing() {
        let mut session = drilling(DrillDirection::Mixed);

        let result = session.record_answer("Die Katze", "le chat", "Le chat");

        assert_eq!(result, Err(DrillError::UnknownTerm("Die Katze".to_string())));
        assert_eq!(session.correct() + session.incorrect(), 0);
    }

    #[test]
    fn test_accent_mismatch_updates_like_exact() {
        let vocab: Vocabulary = [VocabularyEntry::new("Der Sommer", "L'été")]
            .into_iter()
            .collect();
        let mut session = DrillSession::with_seed(vocab, 1);
        session.record_answer("Der Sommer", "wrong", "L'été").unwrap();
        session.record_answer("Der Sommer", "wrong", "L'été").unwrap();
        assert_eq!(session.scores().weight("Der Sommer"), Some(5));

        let feedback = session.record_answer("Der Sommer", "l'ete", "L'été").unwrap();

        assert_eq!(feedback.outcome, AnswerOutcome::AccentCorrect);
        assert_eq!(feedback.expected, "L'été");
        assert_eq!(session.scores().weight("Der Sommer"), Some(4));
        assert_eq!(session.correct(), 1);
    }

    #[test]
    fn test_counters_match_answers() {
        let mut session = drilling(DrillDirection::Mixed);
        for i in 0..25 {
            let question = session.current_question().unwrap().clone();
            let input = if i % 3 == 0 { "falsch" } else { question.expected.as_str() };
            session.submit_answer(input).unwrap();
        }

        assert_eq!(session.correct() + session.incorrect(), 25);
        assert_eq!(session.incorrect(), 9);
        assert!(session.scores().iter().all(|(_, w)| w >= 1));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = drilling(DrillDirection::Mixed);
        session.submit_answer("falsch").unwrap();
        session.submit_answer("falsch").unwrap();

        session.reset();

        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.direction(), None);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.incorrect(), 0);
        assert!(session.error_counts().is_empty());
        assert!(session.scores().iter().all(|(_, w)| w == 1));
        assert_eq!(session.scores().len(), 2);
    }

    #[test]
    fn test_replace_vocabulary_rebuilds_scores() {
        let mut session = drilling(DrillDirection::Mixed);
        session.replace_vocabulary(Vocabulary::builtin());

        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.scores().len(), Vocabulary::builtin().len());
    }

    #[test]
    fn test_same_seed_same_questions() {
        let mut a = drilling(DrillDirection::Mixed);
        let mut b = drilling(DrillDirection::Mixed);
        for _ in 0..10 {
            assert_eq!(a.current_question(), b.current_question());
            a.submit_answer("x").unwrap();
            b.submit_answer("x").unwrap();
        }
    }

    #[test]
    fn test_statistics_snapshot() {
        let mut session = DrillSession::with_seed(two_words(), 1);
        session.record_answer("Der Hund", "le chien", "Le chien").unwrap();
        session.record_answer("Das Haus", "la maisonette", "La maison").unwrap();

        let stats = session.statistics(Instant::now(), 10);

        assert_eq!(stats.correct, 1);
        assert_eq!(stats.incorrect, 1);
        assert_eq!(stats.accuracy_percent, 50.0);
        assert_eq!(stats.most_missed.len(), 1);
        assert_eq!(stats.most_missed[0].term, "Das Haus");
    }
}
