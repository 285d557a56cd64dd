use std::path::{Path, PathBuf};

use quiz_core::model::Question;

use crate::repository::{QuestionSource, StorageError, ensure_unique_ids};

mod mapping;

pub use mapping::{ChoiceRecord, PairRecord, QuestionRecord, questions_from_json};

/// Question source reading a JSON array of records from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonFileSource {
    fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let questions = questions_from_json(&raw)?;
        ensure_unique_ids(&questions)?;
        tracing::debug!(
            path = %self.path.display(),
            count = questions.len(),
            "loaded question collection"
        );
        Ok(questions)
    }
}
