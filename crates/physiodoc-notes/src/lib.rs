//! physiodoc-notes
//!
//! The note composer: a deterministic Patient+Session → text
//! transformation. Purely functional — callers decide whether the returned
//! text and score are persisted back onto the session.

pub mod compose;
pub mod error;

pub use compose::{compose_for_session, compose_note};
pub use error::NoteError;
