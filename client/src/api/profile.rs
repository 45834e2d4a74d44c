//! Profile endpoints: the joined employee record plus the editable
//! sections (contact fields, skills, education).

use async_trait::async_trait;
use serde::Deserialize;

use staffdesk_core::models::profile::{EducationRecord, EmployeeProfile, ProfileUpdate};

use super::client::{ApiClient, MessageResponse};
use crate::error::ApiError;
use crate::session::Session;

#[derive(Debug, Deserialize)]
struct SkillsResponse {
    skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EducationResponse {
    education: EducationRecord,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn profile(&self, session: &Session) -> Result<EmployeeProfile, ApiError>;

    /// Updates the four editable contact fields; returns the backend's
    /// acknowledgement message.
    async fn update_profile(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> Result<String, ApiError>;

    /// Replaces the whole skills list and returns it as stored.
    async fn update_skills(
        &self,
        session: &Session,
        skills: &[String],
    ) -> Result<Vec<String>, ApiError>;

    /// Replaces the education record and returns it as stored.
    async fn update_education(
        &self,
        session: &Session,
        education: &EducationRecord,
    ) -> Result<EducationRecord, ApiError>;
}

#[async_trait]
impl ProfileApi for ApiClient {
    async fn profile(&self, session: &Session) -> Result<EmployeeProfile, ApiError> {
        let url = self.url(&format!(
            "/api/profile/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().get(url).send().await?;
        self.map_json_response("profile", response).await
    }

    async fn update_profile(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!(
            "/api/profile/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().put(url).json(update).send().await?;
        let ack: MessageResponse = self.map_json_response("profile update", response).await?;
        Ok(ack.message)
    }

    async fn update_skills(
        &self,
        session: &Session,
        skills: &[String],
    ) -> Result<Vec<String>, ApiError> {
        let url = self.url(&format!(
            "/api/profile/{}/{}/skills",
            session.company_name, session.employee_id
        ));
        let body = serde_json::json!({ "skills": skills });
        let response = self.http().put(url).json(&body).send().await?;
        let stored: SkillsResponse = self.map_json_response("skills update", response).await?;
        Ok(stored.skills)
    }

    async fn update_education(
        &self,
        session: &Session,
        education: &EducationRecord,
    ) -> Result<EducationRecord, ApiError> {
        let url = self.url(&format!(
            "/api/profile/{}/{}/education",
            session.company_name, session.employee_id
        ));
        let response = self.http().put(url).json(education).send().await?;
        let stored: EducationResponse =
            self.map_json_response("education update", response).await?;
        Ok(stored.education)
    }
}
