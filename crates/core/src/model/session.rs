use std::collections::HashSet;
use std::fmt;

use crate::model::{Question, QuestionId};

/// Snapshot of one quiz attempt.
///
/// A session is a value, not a place: every intent applied to it returns a
/// brand-new snapshot and leaves the input untouched, so readers holding the
/// old snapshot stay consistent. One session per quiz taker; the hosting
/// layer owns the value and replaces it after each transition.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    user_name: Option<String>,
    bank: Vec<Question>,
    asked_ids: HashSet<QuestionId>,
    current_question: Option<Question>,
    previous_question: Option<Question>,
    last_answer_correct: bool,
    correct_count: u32,
    wrong_count: u32,
}

impl Session {
    /// Create a fresh session over the given bank.
    ///
    /// The bank is fixed for the session's lifetime; the engine never
    /// validates its content.
    #[must_use]
    pub fn new(bank: Vec<Question>) -> Self {
        Self {
            user_name: None,
            bank,
            asked_ids: HashSet::new(),
            current_question: None,
            previous_question: None,
            last_answer_correct: false,
            correct_count: 0,
            wrong_count: 0,
        }
    }

    /// Name of the quiz taker, absent until the session has started.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    #[must_use]
    pub fn bank(&self) -> &[Question] {
        &self.bank
    }

    /// Ids of questions already presented, in no particular order.
    #[must_use]
    pub fn asked_ids(&self) -> &HashSet<QuestionId> {
        &self.asked_ids
    }

    /// The question awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    /// The question that was current before the last advance.
    #[must_use]
    pub fn previous_question(&self) -> Option<&Question> {
        self.previous_question.as_ref()
    }

    /// Result of the most recent answer submission.
    ///
    /// Meaningful only once at least one answer has been submitted.
    #[must_use]
    pub fn last_answer_correct(&self) -> bool {
        self.last_answer_correct
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Total number of questions in the bank.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// Number of questions already presented.
    #[must_use]
    pub fn asked_count(&self) -> usize {
        self.asked_ids.len()
    }

    /// Number of bank questions not yet presented.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.bank
            .iter()
            .filter(|q| !self.asked_ids.contains(&q.id()))
            .count()
    }

    /// True once every bank question has been presented.
    ///
    /// An empty bank is exhausted from the start.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining_count() == 0
    }

    pub(crate) fn set_user_name_field(&mut self, name: String) {
        self.user_name = Some(name);
    }

    pub(crate) fn advance_to(&mut self, selected: Question) {
        self.previous_question = self.current_question.take();
        self.asked_ids.insert(selected.id());
        self.current_question = Some(selected);
    }

    pub(crate) fn clear_current(&mut self) {
        self.current_question = None;
    }

    pub(crate) fn record_answer(&mut self, is_correct: bool) {
        self.last_answer_correct = is_correct;
        if is_correct {
            self.correct_count += 1;
        } else {
            self.wrong_count += 1;
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_name", &self.user_name)
            .field("bank_len", &self.bank.len())
            .field("asked", &self.asked_ids.len())
            .field("current", &self.current_question.as_ref().map(Question::id))
            .field("previous", &self.previous_question.as_ref().map(Question::id))
            .field("correct", &self.correct_count)
            .field("wrong", &self.wrong_count)
            .finish_non_exhaustive()
    }
}
