use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("session {session_id} does not belong to this patient")]
    SessionNotFound { session_id: Uuid },
}
