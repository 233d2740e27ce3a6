use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::session::{Session, SessionKind};

/// A diagnosis attachment resolved at registration. The code is always
/// present; the labels are empty when the clinician's entry had no catalog
/// match and the raw token was kept as the code.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub code: String,
    pub short_label: String,
    pub long_label: String,
}

/// A registered patient and the sessions it exclusively owns.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub birth_year: Option<i16>,
    pub diagnosis: Option<Diagnosis>,
    pub sessions: Vec<Session>,
    pub created_at: jiff::Timestamp,
}

/// One point of the score-history chart: a session's date and its stored
/// severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScorePoint {
    pub date: Date,
    pub score: i64,
}

impl Patient {
    /// Register a patient. The name must be non-empty after trimming.
    /// Every patient starts with exactly one initial session dated today.
    pub fn register(
        name: &str,
        birth_year: Option<i16>,
        diagnosis: Option<Diagnosis>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        Ok(Patient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            birth_year,
            diagnosis,
            sessions: vec![Session::new(SessionKind::Initial)],
            created_at: jiff::Timestamp::now(),
        })
    }

    pub fn session(&self, id: Uuid) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn session_mut(&mut self, id: Uuid) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    /// Sessions ordered for the session list: newest date first, undated
    /// sessions last.
    pub fn sessions_by_date_desc(&self) -> Vec<&Session> {
        let mut sorted: Vec<&Session> = self.sessions.iter().collect();
        // `None < Some(_)`, so reversing the comparison puts undated last.
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Chronological `(date, score)` points for the score chart. Sessions
    /// without a computed score or without a date do not plot.
    pub fn score_history(&self) -> Vec<ScorePoint> {
        let mut points: Vec<ScorePoint> = self
            .sessions
            .iter()
            .filter_map(|s| {
                let date = s.date?;
                let score = s.score?;
                Some(ScorePoint { date, score })
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points
    }
}
