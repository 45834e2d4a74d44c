//! Leave endpoints: request history, balance sheet, submission.

use async_trait::async_trait;

use staffdesk_core::models::leave::{CandidateLeave, LeaveBalances, LeaveRequest};

use super::client::ApiClient;
use crate::error::ApiError;
use crate::session::Session;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveApi: Send + Sync {
    /// Every stored leave request for the employee, newest last.
    async fn leave_requests(&self, session: &Session) -> Result<Vec<LeaveRequest>, ApiError>;

    /// The employee's balance sheet; never-allocated leave types are
    /// absent.
    async fn leave_balances(&self, session: &Session) -> Result<LeaveBalances, ApiError>;

    /// Submits a candidate the local checks already accepted and returns
    /// the stored request (status `Pending`).
    async fn submit_leave(
        &self,
        session: &Session,
        candidate: &CandidateLeave,
    ) -> Result<LeaveRequest, ApiError>;
}

#[async_trait]
impl LeaveApi for ApiClient {
    async fn leave_requests(&self, session: &Session) -> Result<Vec<LeaveRequest>, ApiError> {
        let url = self.url(&format!(
            "/api/leave-requests/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().get(url).send().await?;
        self.map_json_response("leave requests", response).await
    }

    async fn leave_balances(&self, session: &Session) -> Result<LeaveBalances, ApiError> {
        let url = self.url(&format!(
            "/api/leave-balance/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().get(url).send().await?;
        self.map_json_response("leave balance", response).await
    }

    async fn submit_leave(
        &self,
        session: &Session,
        candidate: &CandidateLeave,
    ) -> Result<LeaveRequest, ApiError> {
        let url = self.url(&format!(
            "/api/leave-requests/{}/{}",
            session.company_name, session.employee_id
        ));
        let response = self.http().post(url).json(candidate).send().await?;
        self.map_json_response("leave submission", response).await
    }
}
