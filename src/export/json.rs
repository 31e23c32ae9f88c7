//! JSON import/export for vocabulary decks and session statistics.

use crate::error::VocabularyError;
use crate::models::{SessionStatistics, Vocabulary};
use std::fs;
use std::path::Path;

/// Writes a vocabulary deck as pretty-printed JSON.
pub fn export_vocabulary_to_path(
    vocabulary: &Vocabulary,
    path: &Path,
) -> Result<(), VocabularyError> {
    let json_string = serde_json::to_string_pretty(vocabulary)?;
    write(path, &json_string)?;
    tracing::info!(path = %path.display(), terms = vocabulary.len(), "vocabulary exported");
    Ok(())
}

/// Reads a vocabulary deck written by [`export_vocabulary_to_path`].
/// A deck without entries is rejected.
pub fn import_vocabulary(path: &Path) -> Result<Vocabulary, VocabularyError> {
    let contents = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let vocabulary: Vocabulary = serde_json::from_str(&contents)?;
    if vocabulary.is_empty() {
        return Err(VocabularyError::Empty);
    }

    tracing::info!(
        name = %vocabulary.name,
        terms = vocabulary.len(),
        path = %path.display(),
        "vocabulary imported"
    );
    Ok(vocabulary)
}

/// Writes a statistics snapshot as pretty-printed JSON.
pub fn export_statistics_to_path(
    statistics: &SessionStatistics,
    path: &Path,
) -> Result<(), VocabularyError> {
    let json_string = serde_json::to_string_pretty(statistics)?;
    write(path, &json_string)
}

fn write(path: &Path, contents: &str) -> Result<(), VocabularyError> {
    fs::write(path, contents).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })
}
