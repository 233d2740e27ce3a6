use physiodoc_catalogs::Catalogs;
use physiodoc_core::models::{Patient, Section, Session, SessionKind};
use physiodoc_scoring::{severity_score, SeverityBand};
use uuid::Uuid;

use crate::error::NoteError;

/// Compose the note for one of the patient's sessions.
///
/// Fails when the session id does not belong to the patient; callers are
/// expected to check their selection state before invoking.
pub fn compose_note(
    patient: &Patient,
    session_id: Uuid,
    catalogs: &Catalogs,
) -> Result<String, NoteError> {
    let session = patient
        .session(session_id)
        .ok_or(NoteError::SessionNotFound { session_id })?;
    Ok(compose_for_session(patient, session, catalogs))
}

/// Compose the note text from the current field values.
///
/// Blocks appear in a fixed order and are joined by one blank line; a block
/// whose source is empty after trimming contributes nothing. Composing
/// twice from identical field values yields byte-identical text.
pub fn compose_for_session(patient: &Patient, session: &Session, catalogs: &Catalogs) -> String {
    let mut blocks = vec![header_line(session), diagnosis_line(patient)];

    for section in [
        Section::Anamnesis,
        Section::Findings,
        Section::Diagnosis,
        Section::TherapyPlan,
        Section::Course,
        Section::Epicrisis,
    ] {
        let text = session.section_text(section).trim();
        if !text.is_empty() {
            blocks.push(format!("{}:\n{}", section_heading(section), text));
        }
    }

    blocks.push(subjective_summary(session, catalogs));
    blocks.push(plan_summary(session, catalogs));
    blocks.push(score_line(session));

    blocks.join("\n\n")
}

fn header_line(session: &Session) -> String {
    let kind_label = match session.kind {
        SessionKind::Initial => "Initial assessment",
        SessionKind::Followup => "Follow-up",
    };
    let date_label = match session.date {
        Some(date) => date.strftime("%d.%m.%Y").to_string(),
        None => "no date".to_string(),
    };
    format!("{kind_label} on {date_label}")
}

fn diagnosis_line(patient: &Patient) -> String {
    match &patient.diagnosis {
        Some(d) if !d.short_label.trim().is_empty() => {
            format!("Diagnosis code: {} – {}", d.code, d.short_label.trim())
        }
        Some(d) => format!("Diagnosis code: {}", d.code),
        None => "Diagnosis code: not documented".to_string(),
    }
}

fn section_heading(section: Section) -> &'static str {
    match section {
        Section::Anamnesis => "Anamnesis",
        Section::Findings => "Current findings / status",
        Section::Diagnosis => "Diagnosis (physiotherapeutic / medical)",
        Section::TherapyPlan => "Therapy plan",
        Section::Course => "Course & documentation",
        Section::Epicrisis => "Epicrisis / assessment / recommendation",
        // Never composed into the note; kept here so the match stays
        // exhaustive when sections are added.
        Section::Transcript => "Full transcript",
    }
}

fn subjective_summary(session: &Session, catalogs: &Catalogs) -> String {
    let labels: Vec<&str> = session
        .complaints
        .iter()
        .map(|id| catalogs.complaints.label_for(id))
        .collect();

    let ratings = format!(
        "Current pain {}/10, limitation in daily activities {}/10.",
        session.pain, session.function
    );

    if labels.is_empty() {
        format!("Subjective (summary): no leading complaints reported. {ratings}")
    } else {
        format!(
            "Subjective (summary): patient reports {}. {ratings}",
            labels.join(", ")
        )
    }
}

fn plan_summary(session: &Session, catalogs: &Catalogs) -> String {
    let labels: Vec<&str> = session
        .measures
        .iter()
        .map(|id| catalogs.measures.label_for(id))
        .collect();

    const CLOSING: &str =
        "Therapy to be continued, with load and home exercise program adjusted as needed.";

    if labels.is_empty() {
        format!("Plan (summary): symptom-oriented treatment. {CLOSING}")
    } else {
        format!(
            "Plan (summary): performed today: {}. {CLOSING}",
            labels.join(", ")
        )
    }
}

fn score_line(session: &Session) -> String {
    let score = session
        .score
        .unwrap_or_else(|| severity_score(session.pain, session.function, session.complaints.len()));
    let band = SeverityBand::classify(score);
    format!("Severity score: {score}/100 ({}).", band.text())
}
