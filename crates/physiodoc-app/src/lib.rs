//! physiodoc-app
//!
//! The explicit application-state object the UI shell owns: the patient
//! list, the current patient/session selection, and every user-triggered
//! operation. Single-threaded and synchronous — all operations run to
//! completion on the calling thread, and state is mutated only through
//! these methods, never from background tasks.

pub mod error;
pub mod state;

pub use error::AppError;
pub use state::{AppState, GenerateOutcome, RegisterOutcome, RegisterPatient};
