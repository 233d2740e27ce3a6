use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Whether a session is the first documented encounter or a follow-up.
/// Controls the note header wording only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionKind {
    Initial,
    Followup,
}

/// Typed selector for the free-text clinical sections of a session.
///
/// Dictated text is routed into whichever section the UI marks as active;
/// matching on this enum is exhaustive, so adding a section forces every
/// dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Anamnesis,
    Findings,
    Diagnosis,
    TherapyPlan,
    Course,
    Epicrisis,
    Transcript,
}

impl Section {
    /// UI label for the section tab.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Anamnesis => "Anamnesis",
            Section::Findings => "Current findings / status",
            Section::Diagnosis => "Diagnosis",
            Section::TherapyPlan => "Therapy plan",
            Section::Course => "Course & documentation",
            Section::Epicrisis => "Epicrisis / assessment",
            Section::Transcript => "Full transcript",
        }
    }
}

/// One documented treatment encounter.
///
/// `score` stays `None` until the clinician explicitly generates a note;
/// `null` on disk is distinct from a computed score of 0.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub kind: SessionKind,
    pub date: Option<Date>,
    pub complaints: Vec<String>,
    pub measures: Vec<String>,
    pub pain: u8,
    pub function: u8,
    pub anamnesis: String,
    pub findings: String,
    pub diagnosis_text: String,
    pub therapy_plan: String,
    pub course: String,
    pub epicrisis: String,
    pub transcript: String,
    pub score: Option<i64>,
    pub note: String,
}

impl Session {
    /// Create a session dated today with default ratings (5/10 each).
    pub fn new(kind: SessionKind) -> Self {
        Self::on_date(kind, Some(jiff::Zoned::now().date()))
    }

    pub fn on_date(kind: SessionKind, date: Option<Date>) -> Self {
        Session {
            id: Uuid::new_v4(),
            kind,
            date,
            complaints: Vec::new(),
            measures: Vec::new(),
            pain: 5,
            function: 5,
            anamnesis: String::new(),
            findings: String::new(),
            diagnosis_text: String::new(),
            therapy_plan: String::new(),
            course: String::new(),
            epicrisis: String::new(),
            transcript: String::new(),
            score: None,
            note: String::new(),
        }
    }

    /// Add the complaint id if absent, remove it if present.
    pub fn toggle_complaint(&mut self, id: &str) {
        toggle(&mut self.complaints, id);
    }

    /// Add the measure id if absent, remove it if present.
    pub fn toggle_measure(&mut self, id: &str) {
        toggle(&mut self.measures, id);
    }

    pub fn section_text(&self, section: Section) -> &str {
        match section {
            Section::Anamnesis => &self.anamnesis,
            Section::Findings => &self.findings,
            Section::Diagnosis => &self.diagnosis_text,
            Section::TherapyPlan => &self.therapy_plan,
            Section::Course => &self.course,
            Section::Epicrisis => &self.epicrisis,
            Section::Transcript => &self.transcript,
        }
    }

    pub fn set_section_text(&mut self, section: Section, text: impl Into<String>) {
        *self.section_text_mut(section) = text.into();
    }

    /// Append recognized speech to a section, separated from the existing
    /// content by a single space. Appends always target the current value
    /// of the field; recognition order is the only ordering guarantee.
    pub fn append_dictated(&mut self, section: Section, text: &str) {
        let addition = text.trim();
        if addition.is_empty() {
            return;
        }
        let target = self.section_text_mut(section);
        let mut combined = target.trim().to_string();
        if !combined.is_empty() {
            combined.push(' ');
        }
        combined.push_str(addition);
        *target = combined;
    }

    fn section_text_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Anamnesis => &mut self.anamnesis,
            Section::Findings => &mut self.findings,
            Section::Diagnosis => &mut self.diagnosis_text,
            Section::TherapyPlan => &mut self.therapy_plan,
            Section::Course => &mut self.course,
            Section::Epicrisis => &mut self.epicrisis,
            Section::Transcript => &mut self.transcript,
        }
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|existing| existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}
