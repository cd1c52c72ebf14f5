use super::domain::SurveyAnswers;
use super::report::Report;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Opaque identifier assigned to a stored survey submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SurveyId(pub String);

impl std::fmt::Display for SurveyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored (input, output, timestamp) tuple.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyRecord {
    pub id: SurveyId,
    pub answers: SurveyAnswers,
    pub report: Report,
    pub created_at: DateTime<Utc>,
}

/// Storage abstraction so the engine and routes can be exercised against an
/// in-memory implementation. The store assigns the identifier and the
/// creation timestamp.
pub trait SurveyStore: Send + Sync {
    fn save(&self, answers: SurveyAnswers, report: Report) -> Result<SurveyRecord, StoreError>;
    fn fetch(&self, id: &SurveyId) -> Result<Option<SurveyRecord>, StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
