//! Vocabulary is a named set of German/French pairs keyed by the German term.
use super::VocabularyEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word list the trainer starts with when no file is configured.
const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("Das Haus", "La maison"),
    ("Der Baum", "L'arbre"),
    ("Der Freund", "L'ami"),
    ("Das Buch", "Le livre"),
    ("Der Hund", "Le chien"),
    ("Der Beruf", "La profession"),
    ("Das Werk", "L'usine"),
    ("Die Stelle", "Le poste"),
    ("Schmutzig", "Sale"),
    ("Anstrengend", "Fatigant"),
    ("Der Lohn", "Le salaire"),
    ("Geld verdienen", "Gagner de l'argent"),
    ("Sein Brot verdienen", "Gagner sa vie"),
    ("Seinen Lebensunterhalt verdienen", "Gagner sa vie"),
    ("Die Fähigkeit", "La capacité"),
    ("Der Betrieb", "L'entreprise"),
    ("Das Unternehmen", "L'entreprise"),
    ("Gründen", "Fonder"),
    ("Die Arbeitslosigkeit", "Le chômage"),
    ("Der Arbeitgeber", "L'employeur"),
    ("Der Arbeitnehmer", "Le salarié"),
    ("Die Arbeitskräfte", "La main d'oeuvre"),
    ("Einen Beruf ausüben", "Exercer un métier"),
    ("Jdn beschäftigen", "Employer qn"),
    ("Einstellen", "Embaucher"),
    ("Der Mitarbeiter", "L'employé"),
    ("Der Angestellte", "L'employé"),
    ("Jdn entlassen", "Licencier qn"),
    ("Vor die Tür setzen", "Mettre à la porte"),
    ("Der Bereich", "Le domaine, le secteur"),
    ("Häufig", "Souvent, fréquent"),
    ("Der Begriff", "Le terme, le concept"),
    ("Verwenden", "Utiliser"),
    ("Ergänzen", "Compléter, ajouter"),
    ("Gering", "Faible, minime"),
    ("Passende", "Approprié"),
    ("Äusserst", "Extrêmement"),
    ("Nützen", "Servir, être utile, profiter à qn"),
    ("Die Lohnerhöhung", "L'augmentation de salaire"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub name: String,
    entries: BTreeMap<String, String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut vocab = Self::new("Deutsch - Französisch");
        for &(term, translation) in BUILTIN_WORDS {
            vocab.insert(VocabularyEntry::new(term, translation));
        }
        vocab
    }

    /// Inserts an entry; an existing term gets its translation overwritten.
    /// Returns the previous translation, if any.
    pub fn insert(&mut self, entry: VocabularyEntry) -> Option<String> {
        self.entries.insert(entry.term, entry.translation)
    }

    pub fn translation(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<VocabularyEntry> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = VocabularyEntry>>(iter: I) -> Self {
        let mut vocab = Self::new("Vocabulary");
        for entry in iter {
            vocab.insert(entry);
        }
        vocab
    }
}
