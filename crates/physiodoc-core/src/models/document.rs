use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::patient::Patient;

/// Current persisted document version. Bump this when adding fields or
/// changing shape; loaders reject documents newer than they support.
pub const DOCUMENT_VERSION: u32 = 1;

/// The persisted root: the whole patient list, written and read as one
/// document. Selection state is runtime-only and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDocument {
    /// Schema version. Missing or 0 = pre-versioned document.
    #[serde(default)]
    pub document_version: u32,
    pub patients: Vec<Patient>,
}

impl Default for PatientDocument {
    fn default() -> Self {
        PatientDocument {
            document_version: DOCUMENT_VERSION,
            patients: Vec::new(),
        }
    }
}
