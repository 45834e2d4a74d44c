use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonCategory {
    BetterOpportunity,
    Personal,
    Relocation,
    Health,
    WorkEnvironment,
    Other,
}

/// Body for submitting a termination request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTermination {
    pub reason: String,
    pub reason_category: ReasonCategory,
    pub last_working_date: NaiveDate,
    /// Notice period in days as the form offers it ("30", "45", "60",
    /// "90"); the backend stores it verbatim and may hand back a free-form
    /// default, so this stays a string.
    pub notice_period: String,
    pub handover_notes: String,
}

/// Stored request as the termination endpoint returns it (snake_case
/// storage keys; handover notes are kept server-side only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationRequest {
    pub status: String,
    pub reason_category: ReasonCategory,
    pub reason: String,
    pub last_working_date: NaiveDate,
    pub notice_period: String,
    pub request_date: NaiveDateTime,
}
