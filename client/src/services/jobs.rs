//! Job board flow: open postings and the employee's applications.

use std::sync::Arc;

use staffdesk_core::models::job::{JobApplication, JobPosting};

use crate::api::JobsApi;
use crate::error::ApiError;
use crate::session::Session;

pub struct JobBoardService {
    api: Arc<dyn JobsApi>,
    session: Session,
}

impl JobBoardService {
    pub fn new(api: Arc<dyn JobsApi>, session: Session) -> Self {
        Self { api, session }
    }

    pub async fn postings(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.api.company_jobs(&self.session).await
    }

    pub async fn my_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.api.my_applications(&self.session).await
    }
}
