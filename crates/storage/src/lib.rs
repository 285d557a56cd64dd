#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{JsonFileSource, QuestionRecord};
pub use repository::{InMemorySource, QuestionSource, StorageError};
