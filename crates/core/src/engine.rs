use crate::model::{Question, Session};
use crate::sampler::Sampler;

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

/// A named request to transition the session.
///
/// Collaborating layers translate user events (form submit, button click)
/// into one of these and apply it via [`Session::apply`]. The four named
/// methods on [`Session`] are the same contract without the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    /// Record the quiz taker's name. No trimming or validation here.
    SetUserName(String),
    /// Move the current question to previous and select the next unseen one.
    NextQuestion,
    /// Compare a raw answer against the current question and update the score.
    SubmitAnswer(String),
    /// Discard all progress and start over with a fresh bank.
    Reset(Vec<Question>),
}

//
// ─── TRANSITIONS ───────────────────────────────────────────────────────────────
//

impl Session {
    /// Apply one intent and return the next snapshot.
    ///
    /// Every intent is total: out-of-protocol calls (advancing an exhausted
    /// session, answering with no current question) degrade to no-ops
    /// instead of failing. The input snapshot is never mutated.
    #[must_use]
    pub fn apply(&self, intent: QuizIntent, sampler: &mut Sampler) -> Session {
        match intent {
            QuizIntent::SetUserName(name) => self.with_user_name(name),
            QuizIntent::NextQuestion => self.next_question(sampler),
            QuizIntent::SubmitAnswer(raw) => self.submit_answer(&raw),
            QuizIntent::Reset(bank) => self.reset(bank),
        }
    }

    /// Set the quiz taker's name, leaving everything else unchanged.
    #[must_use]
    pub fn with_user_name(&self, name: impl Into<String>) -> Session {
        let mut next = self.clone();
        next.set_user_name_field(name.into());
        next
    }

    /// Select the next unseen question uniformly at random.
    ///
    /// Selection and history update are atomic: the picked id lands in
    /// `asked_ids` in the same snapshot that makes it current, so a question
    /// is presented at most once per session. When no questions remain the
    /// current question becomes absent and the previous question is left as
    /// it was; calling again on an exhausted session changes nothing.
    ///
    /// Safe to call while a question is still awaiting an answer: this is
    /// "next", not "advance-if-answered", and the unanswered question simply
    /// becomes the previous one.
    #[must_use]
    pub fn next_question(&self, sampler: &mut Sampler) -> Session {
        let remaining: Vec<&Question> = self
            .bank()
            .iter()
            .filter(|q| !self.asked_ids().contains(&q.id()))
            .collect();

        let mut next = self.clone();
        match sampler.pick(remaining.len()) {
            Some(index) => next.advance_to(remaining[index].clone()),
            None => next.clear_current(),
        }
        next
    }

    /// Score a raw answer against the current question.
    ///
    /// Comparison is a case-insensitive exact match; surrounding whitespace
    /// is the caller's problem. The current question stays current —
    /// advancing is a separate intent — so submitting twice against the same
    /// question counts twice. Callers that debounce retries must do so
    /// before dispatching.
    ///
    /// With no current question this is a defensive no-op.
    #[must_use]
    pub fn submit_answer(&self, raw_answer: &str) -> Session {
        let Some(current) = self.current_question() else {
            return self.clone();
        };
        let is_correct = raw_answer.to_lowercase() == current.answer().to_lowercase();

        let mut next = self.clone();
        next.record_answer(is_correct);
        next
    }

    /// Return a brand-new session over a fresh bank.
    ///
    /// Equivalent to `Session::new`: counters zeroed, no current or previous
    /// question, name cleared.
    #[must_use]
    pub fn reset(&self, fresh_bank: Vec<Question>) -> Session {
        Session::new(fresh_bank)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
