//! Job board endpoints (read side).

use async_trait::async_trait;

use staffdesk_core::models::job::{JobApplication, JobPosting};

use super::client::ApiClient;
use crate::error::ApiError;
use crate::session::Session;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// Open postings for the session's company.
    async fn company_jobs(&self, session: &Session) -> Result<Vec<JobPosting>, ApiError>;

    /// Postings the employee was invited to or applied for.
    async fn my_applications(&self, session: &Session) -> Result<Vec<JobApplication>, ApiError>;
}

#[async_trait]
impl JobsApi for ApiClient {
    async fn company_jobs(&self, session: &Session) -> Result<Vec<JobPosting>, ApiError> {
        let url = self.url(&format!("/api/company-jobs/{}", session.company_name));
        let response = self.http().get(url).send().await?;
        self.map_json_response("company jobs", response).await
    }

    async fn my_applications(&self, session: &Session) -> Result<Vec<JobApplication>, ApiError> {
        let url = self.url(&format!(
            "/api/candidate-applications/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().get(url).send().await?;
        self.map_json_response("candidate applications", response)
            .await
    }
}
