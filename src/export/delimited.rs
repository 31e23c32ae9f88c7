//! Loading vocabulary from delimited text tables (CSV, semicolon or tab
//! separated) with a header row naming the term and translation columns.
//!
//! Quoted fields may contain the delimiter, line breaks and `""` escapes. A UTF-8 byte
//! order mark and blank lines are skipped. Later rows overwrite earlier rows
//! with the same term.

use crate::error::VocabularyError;
use crate::models::{Vocabulary, VocabularyEntry};
use std::fs;
use std::path::Path;

const DELIMITERS: [char; 3] = [',', ';', '\t'];

/// Reads a delimited vocabulary file. The vocabulary is named after the file stem.
pub fn load_delimited(
    path: &Path,
    term_column: &str,
    translation_column: &str,
) -> Result<Vocabulary, VocabularyError> {
    let text = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Vocabulary".to_string());

    let vocabulary = parse_delimited(&name, &text, term_column, translation_column)?;
    tracing::info!(
        path = %path.display(),
        terms = vocabulary.len(),
        "vocabulary loaded"
    );
    Ok(vocabulary)
}

pub fn parse_delimited(
    name: &str,
    text: &str,
    term_column: &str,
    translation_column: &str,
) -> Result<Vocabulary, VocabularyError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(header_line) = text.lines().find(|line| !line.trim().is_empty()) else {
        return Err(VocabularyError::Empty);
    };
    let delimiter = detect_delimiter(header_line);

    let mut records = split_records(text, delimiter).into_iter();
    let Some(header) = records.next() else {
        return Err(VocabularyError::Empty);
    };

    let term_idx = column_index(&header.fields, term_column)?;
    let translation_idx = column_index(&header.fields, translation_column)?;
    let needed = term_idx.max(translation_idx) + 1;

    let mut vocabulary = Vocabulary::new(name);
    for record in records {
        let fields = &record.fields;
        if fields.len() < needed {
            return Err(VocabularyError::MalformedRow {
                line: record.line,
                expected: needed,
                found: fields.len(),
            });
        }

        let term = fields[term_idx].trim();
        let translation = fields[translation_idx].trim();
        if term.is_empty() || translation.is_empty() {
            tracing::warn!(line = record.line, "skipping row with an empty field");
            continue;
        }

        if let Some(previous) = vocabulary.insert(VocabularyEntry::new(term, translation)) {
            tracing::debug!(term, previous = %previous, "duplicate term overwritten");
        }
    }

    if vocabulary.is_empty() {
        return Err(VocabularyError::Empty);
    }
    Ok(vocabulary)
}

/// Picks the delimiter that occurs most often in the header, comma on a tie.
fn detect_delimiter(header: &str) -> char {
    DELIMITERS
        .iter()
        .copied()
        .rev()
        .max_by_key(|&d| header.matches(d).count())
        .filter(|&d| header.contains(d))
        .unwrap_or(',')
}

fn column_index(header: &[String], column: &str) -> Result<usize, VocabularyError> {
    let column_key = column.trim().to_lowercase();
    header
        .iter()
        .position(|h| h.trim().to_lowercase() == column_key)
        .ok_or_else(|| VocabularyError::MissingColumn {
            column: column.to_string(),
        })
}

/// One table row and the line it starts on (1-based).
struct Record {
    line: usize,
    fields: Vec<String>,
}

/// Splits the whole text into records. A newline only ends a record when it
/// is outside quotes, so quoted cells may span several lines.
fn split_records(text: &str, delimiter: char) -> Vec<Record> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut start_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            '\n' if in_quotes => {
                field.push('\n');
                line += 1;
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, start_line, std::mem::take(&mut fields));
                line += 1;
                start_line = line;
            }
            c if c == delimiter && !in_quotes => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, start_line, fields);
    }
    records
}

/// Blank lines produce no record.
fn push_record(records: &mut Vec<Record>, line: usize, fields: Vec<String>) {
    if fields.iter().any(|f| !f.trim().is_empty()) {
        records.push(Record { line, fields });
    }
}
