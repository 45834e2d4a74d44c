//! Leave page flow: read the employee's requests and balances, vet a
//! candidate locally, submit only when it passes, then refresh.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use staffdesk_core::models::leave::{CandidateLeave, LeaveBalances, LeaveRequest};
use staffdesk_core::validation::leave::{decide, LeaveDecision, RejectionReason};

use crate::api::LeaveApi;
use crate::error::ApiError;
use crate::session::Session;

type TodaySource = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// What the leave page shows: request history plus the balance sheet.
#[derive(Debug, Clone)]
pub struct LeaveOverview {
    pub requests: Vec<LeaveRequest>,
    pub balances: LeaveBalances,
}

/// Outcome of a submission attempt. A rejection is a normal outcome, not
/// an error; `ApiError` is reserved for calls that failed.
#[derive(Debug)]
pub enum LeaveSubmission {
    Submitted {
        created: LeaveRequest,
        refreshed: LeaveOverview,
    },
    Rejected(RejectionReason),
}

pub struct LeaveService {
    api: Arc<dyn LeaveApi>,
    session: Session,
    today: TodaySource,
}

impl LeaveService {
    pub fn new(api: Arc<dyn LeaveApi>, session: Session) -> Self {
        Self::with_today(api, session, || Local::now().date_naive())
    }

    /// Same service with its own idea of "today"; tests pin the date with
    /// this.
    pub fn with_today<F>(api: Arc<dyn LeaveApi>, session: Session, today: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        Self {
            api,
            session,
            today: Arc::new(today),
        }
    }

    pub async fn overview(&self) -> Result<LeaveOverview, ApiError> {
        let requests = self.api.leave_requests(&self.session).await?;
        let balances = self.api.leave_balances(&self.session).await?;
        Ok(LeaveOverview { requests, balances })
    }

    /// Runs the submission checks against freshly fetched data and posts
    /// the candidate when they pass. The decision uses the service's
    /// `today`, never the wall clock directly.
    pub async fn submit(&self, candidate: CandidateLeave) -> Result<LeaveSubmission, ApiError> {
        let current = self.overview().await?;
        let today = (self.today)();

        match decide(&candidate, &current.requests, &current.balances, today) {
            LeaveDecision::Rejected(reason) => {
                tracing::debug!(reason = %reason.message(), "leave candidate rejected locally");
                Ok(LeaveSubmission::Rejected(reason))
            }
            LeaveDecision::Accepted => {
                let created = self.api.submit_leave(&self.session, &candidate).await?;
                tracing::info!(
                    employee_id = %self.session.employee_id,
                    leave_type = %candidate.leave_type,
                    "leave request submitted"
                );
                let refreshed = self.overview().await?;
                Ok(LeaveSubmission::Submitted { created, refreshed })
            }
        }
    }
}
