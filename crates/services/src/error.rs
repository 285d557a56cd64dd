//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted while starting a quiz session.
///
/// Navigation, selection, and evaluation never fail; bad input is ignored.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
