#![forbid(unsafe_code)]

pub mod engine;
pub mod model;
pub mod sampler;

pub use engine::QuizIntent;
pub use model::{Question, QuestionId, Session};
pub use sampler::Sampler;
