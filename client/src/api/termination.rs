//! Termination request endpoints.

use async_trait::async_trait;
use reqwest::StatusCode;

use staffdesk_core::models::termination::{CandidateTermination, TerminationRequest};

use super::client::{ApiClient, MessageResponse};
use crate::error::ApiError;
use crate::session::Session;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TerminationApi: Send + Sync {
    /// The request on file, or `None`; the backend signals "none" with a
    /// 404.
    async fn termination_request(
        &self,
        session: &Session,
    ) -> Result<Option<TerminationRequest>, ApiError>;

    /// Files a termination request and returns the acknowledgement
    /// message.
    async fn submit_termination(
        &self,
        session: &Session,
        candidate: &CandidateTermination,
    ) -> Result<String, ApiError>;
}

#[async_trait]
impl TerminationApi for ApiClient {
    async fn termination_request(
        &self,
        session: &Session,
    ) -> Result<Option<TerminationRequest>, ApiError> {
        let url = self.url(&format!(
            "/api/termination-request/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.map_json_response("termination request", response)
            .await
            .map(Some)
    }

    async fn submit_termination(
        &self,
        session: &Session,
        candidate: &CandidateTermination,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!(
            "/api/termination-request/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().post(url).json(candidate).send().await?;
        let ack: MessageResponse = self
            .map_json_response("termination submission", response)
            .await?;
        Ok(ack.message)
    }
}
