use std::path::{Path, PathBuf};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use physiodoc_catalogs::diagnosis::DiagnosisCatalog;
use physiodoc_catalogs::Catalogs;
use physiodoc_core::models::{
    Diagnosis, Patient, PatientDocument, ScorePoint, Section, Session, SessionKind,
};
use physiodoc_notes::compose_note;
use physiodoc_scoring::{severity_score, SeverityBand};
use physiodoc_storage::{load_document, save_document};

use crate::error::AppError;

/// Registration form input.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegisterPatient {
    pub name: String,
    pub birth_year: Option<i16>,
    /// Free-text primary diagnosis, e.g. "M54.5" or "M54.5 Kreuzschmerz".
    pub diagnosis_input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegisterOutcome {
    pub patient_id: Uuid,
    pub session_id: Uuid,
    pub persisted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerateOutcome {
    pub score: i64,
    pub band: SeverityBand,
    pub note: String,
    pub persisted: bool,
}

/// The application state: the loaded patient document plus the current
/// selection. Every mutating operation persists the whole document
/// afterwards; a failed save is reported (`persisted: false`) but never
/// aborts the operation — the in-memory state stays authoritative for the
/// rest of the session.
pub struct AppState {
    doc: PatientDocument,
    selected_patient_id: Option<Uuid>,
    selected_session_id: Option<Uuid>,
    store_path: Option<PathBuf>,
}

impl AppState {
    /// Build from an already-loaded document. With `store_path: None` the
    /// state is memory-only and every mutation reports `persisted: true`.
    pub fn new(doc: PatientDocument, store_path: Option<PathBuf>) -> Self {
        AppState {
            doc,
            selected_patient_id: None,
            selected_session_id: None,
            store_path,
        }
    }

    /// Load the document at `path` (empty on first launch) and persist
    /// back to the same path from then on.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let doc = load_document(path)?;
        info!(path = %path.display(), patients = doc.patients.len(), "patient document loaded");
        Ok(AppState::new(doc, Some(path.to_path_buf())))
    }

    pub fn patients(&self) -> &[Patient] {
        &self.doc.patients
    }

    pub fn document(&self) -> &PatientDocument {
        &self.doc
    }

    pub fn selected_patient(&self) -> Option<&Patient> {
        let id = self.selected_patient_id?;
        self.doc.patients.iter().find(|p| p.id == id)
    }

    pub fn selected_session(&self) -> Option<&Session> {
        let session_id = self.selected_session_id?;
        self.selected_patient()?.session(session_id)
    }

    /// Register a patient with name, optional birth year, and a mandatory
    /// primary diagnosis entry. The entry is resolved against the injected
    /// catalog; with no match, its first token (uppercased) is kept as the
    /// code. The new patient and its initial session become selected.
    pub fn register_patient(
        &mut self,
        input: RegisterPatient,
        diagnoses: &DiagnosisCatalog,
    ) -> Result<RegisterOutcome, AppError> {
        let diagnosis_input = input.diagnosis_input.trim();
        if diagnosis_input.is_empty() {
            return Err(AppError::Validation(
                "a primary diagnosis is required".to_string(),
            ));
        }

        let diagnosis = match diagnoses.resolve(diagnosis_input) {
            Some(entry) => Diagnosis {
                code: entry.code.clone(),
                short_label: entry.short_label.clone(),
                long_label: entry.long_label.clone(),
            },
            None => Diagnosis {
                code: diagnosis_input
                    .split_whitespace()
                    .next()
                    .unwrap_or(diagnosis_input)
                    .to_uppercase(),
                short_label: String::new(),
                long_label: String::new(),
            },
        };

        let patient = Patient::register(&input.name, input.birth_year, Some(diagnosis))?;
        let patient_id = patient.id;
        let session_id = patient.sessions[0].id;
        info!(%patient_id, name = %patient.name, "patient registered");

        self.doc.patients.push(patient);
        self.selected_patient_id = Some(patient_id);
        self.selected_session_id = Some(session_id);

        Ok(RegisterOutcome {
            patient_id,
            session_id,
            persisted: self.persist(),
        })
    }

    /// Select a patient for editing. A patient that has ended up with zero
    /// sessions gets a fresh initial session; otherwise the first session
    /// becomes selected.
    pub fn select_patient(&mut self, patient_id: Uuid) -> Result<bool, AppError> {
        let patient = self
            .doc
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or(AppError::UnknownPatient(patient_id))?;

        let mut created = false;
        if patient.sessions.is_empty() {
            patient.sessions.push(Session::new(SessionKind::Initial));
            created = true;
        }
        self.selected_patient_id = Some(patient_id);
        self.selected_session_id = Some(patient.sessions[0].id);

        Ok(if created { self.persist() } else { true })
    }

    pub fn select_session(&mut self, session_id: Uuid) -> Result<(), AppError> {
        let patient = self.selected_patient().ok_or(AppError::NoPatientSelected)?;
        if patient.session(session_id).is_none() {
            return Err(AppError::UnknownSession(session_id));
        }
        self.selected_session_id = Some(session_id);
        Ok(())
    }

    /// Add a session of the given kind to the selected patient and select
    /// it. The kind is always stated explicitly by the caller.
    pub fn add_session(&mut self, kind: SessionKind) -> Result<RegisterOutcome, AppError> {
        let patient_id = self.selected_patient_id.ok_or(AppError::NoPatientSelected)?;
        let patient = self
            .doc
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or(AppError::UnknownPatient(patient_id))?;

        let session = Session::new(kind);
        let session_id = session.id;
        patient.sessions.push(session);
        self.selected_session_id = Some(session_id);

        Ok(RegisterOutcome {
            patient_id,
            session_id,
            persisted: self.persist(),
        })
    }

    /// Delete one of the selected patient's sessions. If it was selected,
    /// the first remaining session (if any) takes its place.
    pub fn delete_session(&mut self, session_id: Uuid) -> Result<bool, AppError> {
        let patient_id = self.selected_patient_id.ok_or(AppError::NoPatientSelected)?;
        let patient = self
            .doc
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or(AppError::UnknownPatient(patient_id))?;

        let before = patient.sessions.len();
        patient.sessions.retain(|s| s.id != session_id);
        if patient.sessions.len() == before {
            return Err(AppError::UnknownSession(session_id));
        }

        if self.selected_session_id == Some(session_id) {
            self.selected_session_id = patient.sessions.first().map(|s| s.id);
        }
        info!(%patient_id, %session_id, "session deleted");
        Ok(self.persist())
    }

    pub fn set_session_kind(&mut self, kind: SessionKind) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.kind = kind)
    }

    /// Set the session date; clearing it resets to today.
    pub fn set_session_date(&mut self, date: Option<Date>) -> Result<bool, AppError> {
        let date = date.unwrap_or_else(|| jiff::Zoned::now().date());
        self.with_selected_session(|session| session.date = Some(date))
    }

    pub fn set_pain(&mut self, pain: u8) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.pain = pain)
    }

    pub fn set_function(&mut self, function: u8) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.function = function)
    }

    pub fn toggle_complaint(&mut self, id: &str) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.toggle_complaint(id))
    }

    pub fn toggle_measure(&mut self, id: &str) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.toggle_measure(id))
    }

    pub fn set_section_text(&mut self, section: Section, text: &str) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.set_section_text(section, text))
    }

    /// The dictation boundary: append recognized text to the named section
    /// of the selected session. Appends always land on the field's current
    /// value, in recognition order.
    pub fn append_dictation(&mut self, section: Section, text: &str) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.append_dictated(section, text))
    }

    /// Manual edit of the generated note; kept verbatim until the next
    /// explicit regeneration.
    pub fn set_note(&mut self, text: &str) -> Result<bool, AppError> {
        self.with_selected_session(|session| session.note = text.to_string())
    }

    /// The explicit "generate" action: compute the severity score from the
    /// current ratings and complaint count, compose the note, and write
    /// both onto the selected session.
    pub fn generate_note(&mut self, catalogs: &Catalogs) -> Result<GenerateOutcome, AppError> {
        let patient_id = self.selected_patient_id.ok_or(AppError::NoPatientSelected)?;
        let session_id = self.selected_session_id.ok_or(AppError::NoSessionSelected)?;

        let patient = self
            .doc
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or(AppError::UnknownPatient(patient_id))?;
        let session = patient
            .session_mut(session_id)
            .ok_or(AppError::UnknownSession(session_id))?;

        let score = severity_score(session.pain, session.function, session.complaints.len());
        session.score = Some(score);

        let note = compose_note(&*patient, session_id, catalogs)?;
        let session = patient
            .session_mut(session_id)
            .ok_or(AppError::UnknownSession(session_id))?;
        session.note = note.clone();

        let band = SeverityBand::classify(score);
        info!(%patient_id, %session_id, score, band = %band, "note generated");

        Ok(GenerateOutcome {
            score,
            band,
            note,
            persisted: self.persist(),
        })
    }

    /// Band of the selected session's stored score, for the score display.
    /// `None` until a note has been generated for the session.
    pub fn selected_band(&self) -> Option<SeverityBand> {
        self.selected_session()?.score.map(SeverityBand::classify)
    }

    /// Sessions of the selected patient, newest first, for the session list.
    pub fn sessions_for_display(&self) -> Vec<&Session> {
        self.selected_patient()
            .map(|p| p.sessions_by_date_desc())
            .unwrap_or_default()
    }

    /// Chronological score points of the selected patient for the chart
    /// collaborator.
    pub fn score_history(&self) -> Vec<ScorePoint> {
        self.selected_patient()
            .map(|p| p.score_history())
            .unwrap_or_default()
    }

    /// Write the whole document to the store path. Returns whether the
    /// change reached disk; memory-only states always report `true`.
    fn persist(&self) -> bool {
        let Some(path) = &self.store_path else {
            return true;
        };
        match save_document(path, &self.doc) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "save failed; changes may not survive a reload");
                false
            }
        }
    }

    fn with_selected_session(
        &mut self,
        update: impl FnOnce(&mut Session),
    ) -> Result<bool, AppError> {
        let patient_id = self.selected_patient_id.ok_or(AppError::NoPatientSelected)?;
        let session_id = self.selected_session_id.ok_or(AppError::NoSessionSelected)?;

        let session = self
            .doc
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or(AppError::UnknownPatient(patient_id))?
            .session_mut(session_id)
            .ok_or(AppError::UnknownSession(session_id))?;

        update(session);
        Ok(self.persist())
    }
}
