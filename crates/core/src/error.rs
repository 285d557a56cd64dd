use thiserror::Error;

use crate::model::{MediaValidationError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    MediaValidation(#[from] MediaValidationError),
    #[error(transparent)]
    QuestionValidation(#[from] QuestionError),
}
