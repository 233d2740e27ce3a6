//! physiodoc-scoring
//!
//! The severity score heuristic and its qualitative band classifier.
//! Pure functions — a coarse documentation aid, not a validated clinical
//! instrument.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Compute the 0–100 severity score from the current ratings and the
/// number of selected complaints.
///
/// Pain and function (each 0–10) are scaled to 0–100; the complaint count
/// is capped at 5 and scaled to 0–100. The weighted sum
/// `0.4·pain + 0.4·function + 0.2·complaints` is rounded half away from
/// zero, which for this non-negative domain is round-half-up.
///
/// Out-of-range inputs are processed as given. The weights and
/// normalization bases are frozen: changing them would break comparability
/// with scores already persisted in historical sessions.
pub fn severity_score(pain: u8, function: u8, complaints_count: usize) -> i64 {
    let pain_norm = f64::from(pain) * 10.0;
    let function_norm = f64::from(function) * 10.0;
    let complaint_norm = complaints_count.min(5) as f64 / 5.0 * 100.0;

    (pain_norm * 0.4 + function_norm * 0.4 + complaint_norm * 0.2).round() as i64
}

/// Qualitative severity band derived from a score via fixed thresholds.
///
/// The three-way partition at 34 and 67 is part of the documented contract;
/// scores outside [0, 100] still classify into the nearest band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Mild,
    Moderate,
    Pronounced,
}

impl SeverityBand {
    pub fn classify(score: i64) -> Self {
        if score < 34 {
            SeverityBand::Mild
        } else if score < 67 {
            SeverityBand::Moderate
        } else {
            SeverityBand::Pronounced
        }
    }

    /// Display phrase used in the generated note.
    pub fn text(&self) -> &'static str {
        match self {
            SeverityBand::Mild => "mild complaints",
            SeverityBand::Moderate => "moderate complaints",
            SeverityBand::Pronounced => "pronounced complaints",
        }
    }

    /// Color token handed to the presentation layer alongside the band.
    pub fn color(&self) -> &'static str {
        match self {
            SeverityBand::Mild => "#9ae6b4",
            SeverityBand::Moderate => "#faf089",
            SeverityBand::Pronounced => "#feb2b2",
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::Pronounced => "pronounced",
        };
        f.write_str(label)
    }
}
