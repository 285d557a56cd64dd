use quiz_core::model::{Question, QuestionId};
use std::collections::HashSet;
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("question {id} is invalid: {source}")]
    InvalidRecord {
        id: QuestionId,
        #[source]
        source: quiz_core::Error,
    },

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),
}

/// Provider of the complete, validated question collection.
///
/// Loading is synchronous; the whole collection is available at once.
pub trait QuestionSource {
    /// Load every question in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be read or fails validation.
    fn load_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Source backed by questions already held in memory, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    questions: Vec<Question>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl QuestionSource for InMemorySource {
    fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        ensure_unique_ids(&self.questions)?;
        Ok(self.questions.clone())
    }
}

/// Responses are keyed by id, so ids must be unique within a collection.
pub(crate) fn ensure_unique_ids(questions: &[Question]) -> Result<(), StorageError> {
    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(question.id()) {
            return Err(StorageError::DuplicateId(question.id()));
        }
    }
    Ok(())
}
