mod ids;
mod question;
mod session;

pub use ids::{ParseIdError, QuestionId};
pub use question::Question;
pub use session::Session;
