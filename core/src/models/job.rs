use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Open position on the company job board (job table row, snake_case
/// keys).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: i64,
    pub job_title: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_location: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// Posting the employee was invited to or applied for, flattened with the
/// company name and application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_id: i64,
    pub job_title: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_location: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    pub comp_name: String,
    #[serde(default)]
    pub department: Option<String>,
    pub status: String,
    #[serde(default)]
    pub application_date: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posting_tolerates_null_columns() {
        let posting: JobPosting = serde_json::from_value(serde_json::json!({
            "job_id": 7,
            "job_title": "Data Engineer",
            "job_location": null
        }))
        .unwrap();
        assert_eq!(posting.job_id, 7);
        assert!(posting.job_location.is_none());
        assert!(posting.department.is_none());
    }

    #[test]
    fn application_parses_invited_row() {
        let application: JobApplication = serde_json::from_value(serde_json::json!({
            "job_id": 7,
            "job_title": "Data Engineer",
            "job_description": "Pipelines",
            "job_location": "Pune",
            "additional_info": null,
            "comp_name": "Acme",
            "department": "Data",
            "status": "Invited",
            "application_date": "2025-02-11T08:15:00"
        }))
        .unwrap();
        assert_eq!(application.status, "Invited");
        assert_eq!(application.comp_name, "Acme");
        assert!(application.application_date.is_some());
    }
}
