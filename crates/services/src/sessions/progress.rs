use trivia_core::Session;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub asked: usize,
    pub remaining: usize,
    pub correct: u32,
    pub wrong: u32,
    pub is_exhausted: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            total: session.total_questions(),
            asked: session.asked_count(),
            remaining: session.remaining_count(),
            correct: session.correct_count(),
            wrong: session.wrong_count(),
            is_exhausted: session.is_exhausted(),
        }
    }
}
