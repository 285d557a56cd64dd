mod ids;
mod media;
mod question;
mod response;

pub use ids::{ParseIdError, QuestionId};
pub use media::{ImageRef, MediaValidationError};
pub use question::{Choice, MatchPair, Question, QuestionDraft, QuestionError, QuestionKind};
pub use response::Response;
