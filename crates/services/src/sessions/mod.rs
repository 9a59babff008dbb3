mod progress;
mod service;
mod view;

// Public API of the session subsystem.
pub use progress::QuizProgress;
pub use service::{QuizAnswerResult, QuizService};
pub use view::ResultsCard;
