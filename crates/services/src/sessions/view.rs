use trivia_core::Session;

/// Presentation-agnostic card for the most recently answered question.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// The render layer decides how to phrase the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsCard {
    pub text: String,
    pub answer: String,
    pub was_correct: bool,
}

impl ResultsCard {
    /// Build a card from the session's previous question, if any.
    #[must_use]
    pub fn from_session(session: &Session) -> Option<Self> {
        let previous = session.previous_question()?;
        Some(Self {
            text: previous.text().to_string(),
            answer: previous.answer().to_string(),
            was_correct: session.last_answer_correct(),
        })
    }
}
