//! Profile page flow: fetch the joined record, score its completion, push
//! edits back.

use std::sync::Arc;

use staffdesk_core::models::profile::{
    EducationRecord, EmployeeProfile, ProfileCompletion, ProfileUpdate,
};

use crate::api::ProfileApi;
use crate::error::ApiError;
use crate::session::Session;

pub struct ProfileService {
    api: Arc<dyn ProfileApi>,
    session: Session,
}

impl ProfileService {
    pub fn new(api: Arc<dyn ProfileApi>, session: Session) -> Self {
        Self { api, session }
    }

    pub async fn profile(&self) -> Result<EmployeeProfile, ApiError> {
        self.api.profile(&self.session).await
    }

    /// Checklist the dashboard card renders, scored from a fresh fetch.
    pub async fn completion(&self) -> Result<ProfileCompletion, ApiError> {
        Ok(self.profile().await?.completion())
    }

    pub async fn update(&self, update: &ProfileUpdate) -> Result<String, ApiError> {
        let message = self.api.update_profile(&self.session, update).await?;
        tracing::info!(employee_id = %self.session.employee_id, "profile updated");
        Ok(message)
    }

    /// Replaces the skills list. Entries are trimmed and blanks dropped,
    /// matching what the skills form enforces.
    pub async fn update_skills(&self, skills: Vec<String>) -> Result<Vec<String>, ApiError> {
        let cleaned = normalize_skills(skills);
        self.api.update_skills(&self.session, &cleaned).await
    }

    pub async fn update_education(
        &self,
        education: &EducationRecord,
    ) -> Result<EducationRecord, ApiError> {
        self.api.update_education(&self.session, education).await
    }
}

fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}
