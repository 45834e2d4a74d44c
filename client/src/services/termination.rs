//! Termination page flow: show the request on file, accept a new one only
//! when none exists.

use std::sync::Arc;

use staffdesk_core::models::termination::{CandidateTermination, TerminationRequest};
use staffdesk_core::validation::termination::{decide, TerminationDecision, TerminationRejection};

use crate::api::TerminationApi;
use crate::error::ApiError;
use crate::session::Session;

/// Outcome of a submission attempt; the duplicate-request rejection is a
/// value, like the leave flow's.
#[derive(Debug)]
pub enum TerminationSubmission {
    Submitted { message: String },
    Rejected(TerminationRejection),
}

pub struct TerminationService {
    api: Arc<dyn TerminationApi>,
    session: Session,
}

impl TerminationService {
    pub fn new(api: Arc<dyn TerminationApi>, session: Session) -> Self {
        Self { api, session }
    }

    pub async fn current(&self) -> Result<Option<TerminationRequest>, ApiError> {
        self.api.termination_request(&self.session).await
    }

    /// Applies the one-request-on-file rule before posting; the backend
    /// enforces the same rule again server-side.
    pub async fn submit(
        &self,
        candidate: &CandidateTermination,
    ) -> Result<TerminationSubmission, ApiError> {
        let existing = self.current().await?;
        match decide(existing.as_ref()) {
            TerminationDecision::Rejected(rejection) => {
                tracing::debug!(
                    employee_id = %self.session.employee_id,
                    "termination request already on file"
                );
                Ok(TerminationSubmission::Rejected(rejection))
            }
            TerminationDecision::Accepted => {
                let message = self.api.submit_termination(&self.session, candidate).await?;
                tracing::info!(
                    employee_id = %self.session.employee_id,
                    "termination request submitted"
                );
                Ok(TerminationSubmission::Submitted { message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::termination::MockTerminationApi;
    use chrono::NaiveDate;
    use staffdesk_core::models::termination::ReasonCategory;

    fn session() -> Session {
        Session::new("acme", "E042")
    }

    fn candidate() -> CandidateTermination {
        CandidateTermination {
            reason: "relocating abroad".to_string(),
            reason_category: ReasonCategory::Relocation,
            last_working_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            notice_period: "60".to_string(),
            handover_notes: "runbooks in the wiki".to_string(),
        }
    }

    fn on_file() -> TerminationRequest {
        TerminationRequest {
            status: "Pending".to_string(),
            reason_category: ReasonCategory::Personal,
            reason: "sabbatical".to_string(),
            last_working_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
            notice_period: "30".to_string(),
            request_date: NaiveDate::from_ymd_opt(2025, 4, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn duplicate_request_is_rejected_without_posting() {
        let mut api = MockTerminationApi::new();
        api.expect_termination_request()
            .times(1)
            .returning(|_| Ok(Some(on_file())));
        api.expect_submit_termination().times(0);

        let service = TerminationService::new(Arc::new(api), session());
        let outcome = service.submit(&candidate()).await.unwrap();
        assert!(matches!(
            outcome,
            TerminationSubmission::Rejected(TerminationRejection::AlreadyRequested)
        ));
    }

    #[tokio::test]
    async fn first_request_is_posted() {
        let mut api = MockTerminationApi::new();
        api.expect_termination_request()
            .times(1)
            .returning(|_| Ok(None));
        api.expect_submit_termination()
            .times(1)
            .returning(|_, _| Ok("Termination request submitted successfully".to_string()));

        let service = TerminationService::new(Arc::new(api), session());
        let outcome = service.submit(&candidate()).await.unwrap();
        match outcome {
            TerminationSubmission::Submitted { message } => {
                assert_eq!(message, "Termination request submitted successfully");
            }
            other => panic!("expected submission, got {other:?}"),
        }
    }
}
