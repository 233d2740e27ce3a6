//! ICD-10 diagnosis catalog: substring search for autocomplete and
//! best-match resolution of free-text entries.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Maximum number of entries a search returns.
pub const SEARCH_RESULT_CAP: usize = 15;

/// One catalog entry. Labels follow the catalog's locale; the built-in
/// excerpt uses ICD-10-GM wording.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisCode {
    pub code: String,
    pub short_label: String,
    pub long_label: String,
}

/// An ordered, immutable diagnosis-code catalog.
#[derive(Debug, Clone)]
pub struct DiagnosisCatalog {
    entries: Vec<DiagnosisCode>,
}

impl DiagnosisCatalog {
    pub fn new(entries: Vec<DiagnosisCode>) -> Self {
        DiagnosisCatalog { entries }
    }

    pub fn entries(&self) -> &[DiagnosisCode] {
        &self.entries
    }

    /// Entries whose code, short label, or long label contains the term as
    /// a case-insensitive substring, in catalog order, capped at
    /// [`SEARCH_RESULT_CAP`]. Empty terms match nothing.
    pub fn search(&self, term: &str) -> Vec<&DiagnosisCode> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.code.to_lowercase().contains(&term)
                    || entry.short_label.to_lowercase().contains(&term)
                    || entry.long_label.to_lowercase().contains(&term)
            })
            .take(SEARCH_RESULT_CAP)
            .collect()
    }

    /// Resolve a free-text entry such as "M54.5 Kreuzschmerz" to its
    /// catalog entry. The first whitespace token is matched against codes
    /// first; failing that, the whole trimmed input is matched against the
    /// short and long labels. All matching is case-insensitive; code
    /// matches rank above label matches.
    pub fn resolve(&self, input: &str) -> Option<&DiagnosisCode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let first_token = trimmed
            .split_whitespace()
            .next()
            .unwrap_or(trimmed)
            .to_uppercase();

        self.entries
            .iter()
            .find(|entry| entry.code.to_uppercase() == first_token)
            .or_else(|| {
                let lowered = trimmed.to_lowercase();
                self.entries.iter().find(|entry| {
                    entry.short_label.to_lowercase() == lowered
                        || entry.long_label.to_lowercase() == lowered
                })
            })
    }
}

/// The built-in ICD-10-GM excerpt: the musculoskeletal and neurological
/// codes most common in outpatient physiotherapy.
pub fn icd10_excerpt() -> DiagnosisCatalog {
    let entries = [
        ("M54.5", "Kreuzschmerz", "Kreuzschmerz, nicht näher bezeichnet"),
        ("M54.2", "Zervikalneuralgie", "Zervikalneuralgie"),
        ("M54.4", "Lumboischialgie", "Lumboischialgie"),
        ("M54.6", "Schmerzen im Bereich der Brustwirbelsäule", "Schmerzen im Bereich der Brustwirbelsäule"),
        ("M51.2", "Bandscheibenverlagerung", "Sonstige näher bezeichnete Bandscheibenverlagerung"),
        ("M53.1", "Zervikobrachial-Syndrom", "Zervikobrachial-Syndrom"),
        ("M75.1", "Rotatorenmanschettenläsion", "Läsionen der Rotatorenmanschette"),
        ("M75.0", "Adhäsive Entzündung der Schultergelenkkapsel", "Adhäsive Entzündung der Schultergelenkkapsel (Frozen Shoulder)"),
        ("M77.1", "Epicondylitis radialis humeri", "Epicondylitis radialis humeri (Tennisellenbogen)"),
        ("M77.0", "Epicondylitis ulnaris humeri", "Epicondylitis ulnaris humeri (Golferellenbogen)"),
        ("M17.1", "Gonarthrose", "Sonstige primäre Gonarthrose"),
        ("M16.1", "Koxarthrose", "Sonstige primäre Koxarthrose"),
        ("M19.9", "Arthrose", "Arthrose, nicht näher bezeichnet"),
        ("M23.2", "Meniskusschädigung", "Meniskusschädigung durch alten Riss oder alte Verletzung"),
        ("M25.5", "Gelenkschmerz", "Gelenkschmerz"),
        ("M62.4", "Muskelkontraktur", "Muskelkontraktur"),
        ("M62.5", "Muskelschwund und -atrophie", "Muskelschwund und -atrophie, anderenorts nicht klassifiziert"),
        ("M79.1", "Myalgie", "Myalgie"),
        ("M99.8", "Biomechanische Funktionsstörung", "Sonstige biomechanische Funktionsstörungen"),
        ("S83.5", "Kreuzbandverletzung", "Verstauchung und Zerrung des Kniegelenkes mit Beteiligung des Kreuzbandes"),
        ("S93.4", "Verstauchung des oberen Sprunggelenkes", "Verstauchung und Zerrung des oberen Sprunggelenkes"),
        ("S43.4", "Verstauchung des Schultergelenkes", "Verstauchung und Zerrung des Schultergelenkes"),
        ("G56.0", "Karpaltunnel-Syndrom", "Karpaltunnel-Syndrom"),
        ("G54.0", "Läsionen des Plexus brachialis", "Läsionen des Plexus brachialis"),
        ("R26.8", "Gangstörung", "Sonstige und nicht näher bezeichnete Störungen des Ganges und der Mobilität"),
        ("Z96.6", "Gelenkendoprothese", "Vorhandensein von orthopädischen Gelenkimplantaten"),
    ];

    DiagnosisCatalog::new(
        entries
            .iter()
            .map(|(code, short, long)| DiagnosisCode {
                code: code.to_string(),
                short_label: short.to_string(),
                long_label: long.to_string(),
            })
            .collect(),
    )
}
