//! physiodoc-storage
//!
//! Best-effort local persistence of the patient document: one JSON file,
//! loaded whole at startup and overwritten whole on every change. A failed
//! save never corrupts the previous state — the new document either lands
//! completely or the old file is retained.

pub mod error;

use std::path::{Path, PathBuf};

use physiodoc_core::models::{PatientDocument, DOCUMENT_VERSION};
use tracing::info;

pub use error::StorageError;

/// Default location of the patient document: `<data dir>/physiodoc/patients.json`.
pub fn default_document_path() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(base.join("physiodoc").join("patients.json"))
}

/// Load the patient document. A missing file is not an error: first launch
/// starts from an empty document.
pub fn load_document(path: &Path) -> Result<PatientDocument, StorageError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(PatientDocument::default());
        }
        Err(e) => {
            return Err(StorageError::Read {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let document: PatientDocument = serde_json::from_str(&contents)?;
    if document.document_version > DOCUMENT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: document.document_version,
            supported: DOCUMENT_VERSION,
        });
    }
    Ok(document)
}

/// Save the patient document, stamped with the current version.
///
/// Writes to a sibling temp file and renames it into place so a failure
/// mid-write leaves the previous document intact.
pub fn save_document(path: &Path, document: &PatientDocument) -> Result<(), StorageError> {
    let write_err = |source: std::io::Error| StorageError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_err)?;
    }

    let mut stamped = document.clone();
    stamped.document_version = DOCUMENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)?;

    info!(
        path = %path.display(),
        patients = stamped.patients.len(),
        "patient document saved"
    );
    Ok(())
}
