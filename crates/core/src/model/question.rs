use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// A single prompt/answer pair from a question bank.
///
/// Questions are immutable once built; the engine never rewrites bank
/// content, it only tracks which ids have been presented. The `category`
/// tag is informational and plays no part in transition logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    answer: String,
    category: String,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Prompt shown to the user.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Canonical expected answer string.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}
