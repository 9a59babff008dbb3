#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod sessions;

pub use trivia_core::{Question, QuestionId, QuizIntent, Sampler, Session};

pub use bank::{builtin_bank, load_bank, parse_bank};
pub use error::BankError;
pub use sessions::{QuizAnswerResult, QuizProgress, QuizService, ResultsCard};
