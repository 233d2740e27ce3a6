pub mod document;
pub mod patient;
pub mod session;

pub use document::{PatientDocument, DOCUMENT_VERSION};
pub use patient::{Diagnosis, Patient, ScorePoint};
pub use session::{Section, Session, SessionKind};
