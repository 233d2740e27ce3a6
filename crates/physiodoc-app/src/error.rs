use thiserror::Error;
use uuid::Uuid;

use physiodoc_core::error::CoreError;
use physiodoc_notes::NoteError;
use physiodoc_storage::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected user input; nothing was mutated.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Model(#[from] CoreError),

    #[error("no patient selected")]
    NoPatientSelected,

    #[error("no session selected")]
    NoSessionSelected,

    #[error("unknown patient: {0}")]
    UnknownPatient(Uuid),

    #[error("unknown session: {0}")]
    UnknownSession(Uuid),

    #[error(transparent)]
    Note(#[from] NoteError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
