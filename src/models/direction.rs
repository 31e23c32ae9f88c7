//! Which language a question is asked in.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Direction chosen by the learner before drilling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillDirection {
    GermanToFrench,
    FrenchToGerman,
    /// Every question flips a coin between the two other directions.
    Mixed,
}

/// Direction of one concrete question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionSide {
    /// Shows the German term, expects the French translation.
    AskFrench,
    /// Shows the French translation, expects the German term.
    AskGerman,
}

impl DrillDirection {
    pub const ALL: [DrillDirection; 3] = [
        DrillDirection::FrenchToGerman,
        DrillDirection::GermanToFrench,
        DrillDirection::Mixed,
    ];

    /// Resolves the side of the next question. Only `Mixed` consumes randomness.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> QuestionSide {
        match self {
            DrillDirection::GermanToFrench => QuestionSide::AskFrench,
            DrillDirection::FrenchToGerman => QuestionSide::AskGerman,
            DrillDirection::Mixed => {
                if rng.random_bool(0.5) {
                    QuestionSide::AskGerman
                } else {
                    QuestionSide::AskFrench
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrillDirection::FrenchToGerman => "Français → Allemand",
            DrillDirection::GermanToFrench => "Allemand → Français",
            DrillDirection::Mixed => "Révision mixte",
        }
    }
}

impl QuestionSide {
    /// Question text shown for a German term and its French translation.
    pub fn prompt(self, term: &str, translation: &str) -> String {
        match self {
            QuestionSide::AskGerman => format!("Quel est le mot allemand pour '{translation}' ?"),
            QuestionSide::AskFrench => format!("Quel est le mot français pour '{term}' ?"),
        }
    }

    pub fn expected<'a>(self, term: &'a str, translation: &'a str) -> &'a str {
        match self {
            QuestionSide::AskGerman => term,
            QuestionSide::AskFrench => translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fixed_directions_ignore_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..20 {
            assert_eq!(DrillDirection::GermanToFrench.resolve(&mut rng), QuestionSide::AskFrench);
            assert_eq!(DrillDirection::FrenchToGerman.resolve(&mut rng), QuestionSide::AskGerman);
        }
    }

    #[test]
    fn test_mixed_produces_both_sides() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let sides: Vec<_> = (0..200).map(|_| DrillDirection::Mixed.resolve(&mut rng)).collect();

        assert!(sides.contains(&QuestionSide::AskGerman));
        assert!(sides.contains(&QuestionSide::AskFrench));
    }

    #[test]
    fn test_prompt_and_expected_answer() {
        let side = QuestionSide::AskGerman;
        assert_eq!(
            side.prompt("Der Hund", "Le chien"),
            "Quel est le mot allemand pour 'Le chien' ?"
        );
        assert_eq!(side.expected("Der Hund", "Le chien"), "Der Hund");
        assert_eq!(QuestionSide::AskFrench.expected("Der Hund", "Le chien"), "Le chien");
    }
}
