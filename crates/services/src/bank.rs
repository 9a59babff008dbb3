//! Question bank sources.
//!
//! Where a bank comes from (built-in list, JSON file) is irrelevant to the
//! engine; it only ever sees an ordered `Vec<Question>`.

use std::fs;
use std::path::Path;

use trivia_core::{Question, QuestionId};

use crate::error::BankError;

/// The built-in starter bank.
#[must_use]
pub fn builtin_bank() -> Vec<Question> {
    vec![
        Question::new(QuestionId::new(1), "What is 2 + 2?", "4", "easy"),
        Question::new(QuestionId::new(2), "What color is the sky?", "blue", "easy"),
        Question::new(
            QuestionId::new(3),
            "What is the capital of France?",
            "Paris",
            "easy",
        ),
        Question::new(QuestionId::new(4), "What planet do we live on?", "Earth", "easy"),
        Question::new(QuestionId::new(5), "What is H2O?", "water", "easy"),
    ]
}

/// Parse a bank from a JSON array of question records.
///
/// Content is taken as-is: duplicate ids or an empty array are the caller's
/// concern, not a parse failure.
///
/// # Errors
///
/// Returns `BankError::Parse` when the JSON does not decode.
pub fn parse_bank(raw: &str) -> Result<Vec<Question>, BankError> {
    Ok(serde_json::from_str(raw)?)
}

/// Load a bank from a JSON file on disk.
///
/// # Errors
///
/// Returns `BankError::Io` when the file cannot be read and
/// `BankError::Parse` when its contents do not decode.
pub fn load_bank(path: impl AsRef<Path>) -> Result<Vec<Question>, BankError> {
    let raw = fs::read_to_string(path)?;
    parse_bank(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_bank_has_five_unique_questions() {
        let bank = builtin_bank();
        assert_eq!(bank.len(), 5);

        let ids: HashSet<_> = bank.iter().map(Question::id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn parse_bank_reads_a_json_array() {
        let raw = r#"[
            { "id": 1, "text": "What is 2 + 2?", "answer": "4", "category": "easy" },
            { "id": 2, "text": "What color is the sky?", "answer": "blue", "category": "easy" }
        ]"#;

        let bank = parse_bank(raw).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0].id(), QuestionId::new(1));
        assert_eq!(bank[1].answer(), "blue");
    }

    #[test]
    fn parse_bank_accepts_an_empty_array() {
        let bank = parse_bank("[]").unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn parse_bank_rejects_malformed_json() {
        let err = parse_bank("not json").unwrap_err();
        assert!(matches!(err, BankError::Parse(_)));
    }

    #[test]
    fn load_bank_reports_missing_file() {
        let err = load_bank("does/not/exist.json").unwrap_err();
        assert!(matches!(err, BankError::Io(_)));
    }
}
