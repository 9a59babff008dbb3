use std::fmt;

use trivia_core::{Question, QuestionId, QuizIntent, Sampler, Session};

use super::progress::QuizProgress;

//
// ─── ANSWER RESULT ─────────────────────────────────────────────────────────────
//

/// Result of answering the current question and advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub question_id: QuestionId,
    pub was_correct: bool,
    pub is_exhausted: bool,
}

//
// ─── QUIZ SERVICE ──────────────────────────────────────────────────────────────
//

/// Hosting layer for one quiz taker.
///
/// Owns exactly one `Session` value and the sampler it draws from, replacing
/// the snapshot after every dispatched intent. There is no shared mutable
/// store behind this: a second quiz taker gets a second `QuizService`.
#[derive(Clone)]
pub struct QuizService {
    session: Session,
    sampler: Sampler,
}

impl QuizService {
    /// Create a service over a fresh session for the given bank.
    #[must_use]
    pub fn new(bank: Vec<Question>) -> Self {
        Self {
            session: Session::new(bank),
            sampler: Sampler::default_sampler(),
        }
    }

    /// Swap in a different sampler, typically a seeded one for tests.
    #[must_use]
    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Current snapshot, for rendering.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::from_session(&self.session)
    }

    /// Apply one intent, replacing the owned snapshot.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        self.session = self.session.apply(intent, &mut self.sampler);
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.dispatch(QuizIntent::SetUserName(name.into()));
    }

    /// Advance to the next unseen question, returning it if one remains.
    pub fn next_question(&mut self) -> Option<&Question> {
        self.dispatch(QuizIntent::NextQuestion);
        self.session.current_question()
    }

    /// Score an answer against the current question without advancing.
    ///
    /// Returns whether the answer was correct; `false` also covers the
    /// out-of-protocol case where no question was current (which leaves the
    /// score untouched).
    pub fn submit_answer(&mut self, raw_answer: &str) -> bool {
        let had_current = self.session.current_question().is_some();
        self.dispatch(QuizIntent::SubmitAnswer(raw_answer.to_string()));
        had_current && self.session.last_answer_correct()
    }

    /// Discard all progress and start over with a fresh bank.
    pub fn reset(&mut self, fresh_bank: Vec<Question>) {
        self.dispatch(QuizIntent::Reset(fresh_bank));
    }

    /// The composed start flow: record the name, then present a question.
    ///
    /// Mirrors how a host typically wires a name form: one submit issues
    /// both intents.
    pub fn start(&mut self, name: impl Into<String>) -> Option<&Question> {
        self.set_user_name(name);
        self.next_question()
    }

    /// The composed answer flow: score the current question, then advance.
    ///
    /// Returns `None` when no question is current, without dispatching
    /// anything.
    pub fn answer_and_advance(&mut self, raw_answer: &str) -> Option<QuizAnswerResult> {
        let question_id = self.session.current_question()?.id();

        self.dispatch(QuizIntent::SubmitAnswer(raw_answer.to_string()));
        let was_correct = self.session.last_answer_correct();
        self.dispatch(QuizIntent::NextQuestion);

        Some(QuizAnswerResult {
            question_id,
            was_correct,
            is_exhausted: self.session.is_exhausted(),
        })
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("session", &self.session)
            .field("seeded", &self.sampler.is_seeded())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::builtin_bank;
    use trivia_core::sampler::fixed_sampler;

    #[test]
    fn start_names_the_taker_and_presents_a_question() {
        let mut quiz = QuizService::new(builtin_bank()).with_sampler(fixed_sampler());
        let first = quiz.start("Ada").cloned();

        assert!(first.is_some());
        assert_eq!(quiz.session().user_name(), Some("Ada"));
        assert_eq!(quiz.progress().asked, 1);
    }

    #[test]
    fn answer_and_advance_scores_then_moves_on() {
        let mut quiz = QuizService::new(builtin_bank()).with_sampler(fixed_sampler());
        let first = quiz.start("Ada").cloned().unwrap();

        let result = quiz
            .answer_and_advance(first.answer())
            .expect("a question was current");
        assert_eq!(result.question_id, first.id());
        assert!(result.was_correct);
        assert!(!result.is_exhausted);
        assert_eq!(quiz.session().previous_question().unwrap().id(), first.id());
    }

    #[test]
    fn answer_and_advance_without_a_current_question_does_nothing() {
        let mut quiz = QuizService::new(builtin_bank()).with_sampler(fixed_sampler());
        quiz.set_user_name("Ada");

        assert!(quiz.answer_and_advance("4").is_none());
        assert_eq!(quiz.progress().asked, 0);
        assert_eq!(quiz.progress().correct + quiz.progress().wrong, 0);
    }

    #[test]
    fn submit_answer_reports_the_verdict_without_advancing() {
        let mut quiz = QuizService::new(builtin_bank()).with_sampler(fixed_sampler());
        let first = quiz.start("Ada").cloned().unwrap();

        assert!(quiz.submit_answer(first.answer()));
        assert!(!quiz.submit_answer("definitely wrong"));
        assert_eq!(quiz.session().current_question().unwrap().id(), first.id());

        // No current question: submission is a no-op and reports false.
        quiz.reset(builtin_bank());
        assert!(!quiz.submit_answer(first.answer()));
        assert_eq!(quiz.progress().correct + quiz.progress().wrong, 0);
    }

    #[test]
    fn reset_zeroes_progress() {
        let mut quiz = QuizService::new(builtin_bank()).with_sampler(fixed_sampler());
        let first = quiz.start("Ada").cloned().unwrap();
        quiz.answer_and_advance(first.answer());

        quiz.reset(builtin_bank());
        let progress = quiz.progress();
        assert_eq!(progress.asked, 0);
        assert_eq!(progress.correct, 0);
        assert_eq!(progress.wrong, 0);
        assert!(quiz.session().user_name().is_none());
    }
}
