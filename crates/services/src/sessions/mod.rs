mod keys;
mod navigation;
mod plan;
mod responses;
mod service;
mod settings;
mod view;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use keys::NavKey;
pub use navigation::{Navigator, parse_jump_target};
pub use plan::QuestionSetBuilder;
pub use responses::ResponseStore;
pub use service::QuizSession;
pub use settings::QuizSettings;
pub use view::QuestionView;
pub use workflow::{QuizAction, QuizService, QuizState};
