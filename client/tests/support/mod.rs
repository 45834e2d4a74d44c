#![allow(dead_code)]

//! In-process stand-in for the staffdesk backend: the documented REST
//! contract over shared in-memory state, served on an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use staffdesk_core::models::job::{JobApplication, JobPosting};
use staffdesk_core::models::leave::{
    CandidateLeave, LeaveBalance, LeaveBalances, LeaveRequest, LeaveStatus,
};
use staffdesk_core::models::profile::{EducationRecord, EmployeeProfile, ProfileUpdate};
use staffdesk_core::models::termination::{CandidateTermination, TerminationRequest};

pub struct PortalData {
    pub requests: Vec<LeaveRequest>,
    pub balances: LeaveBalances,
    pub profile: EmployeeProfile,
    pub termination: Option<TerminationRequest>,
    pub jobs: Vec<JobPosting>,
    pub applications: Vec<JobApplication>,
}

/// One employee with full balances, a sparse profile and a small job
/// board; tests adjust what they need.
pub fn seeded() -> PortalData {
    PortalData {
        requests: Vec::new(),
        balances: LeaveBalances {
            casual: Some(LeaveBalance::new(10)),
            sick: Some(LeaveBalance::new(10)),
            annual: Some(LeaveBalance::new(10)),
        },
        profile: seeded_profile(),
        termination: None,
        jobs: vec![JobPosting {
            job_id: 7,
            job_title: "Data Engineer".to_string(),
            job_description: Some("Batch pipelines".to_string()),
            job_location: Some("Pune".to_string()),
            department: Some("Data".to_string()),
            additional_info: None,
        }],
        applications: vec![JobApplication {
            job_id: 9,
            job_title: "Backend Engineer".to_string(),
            job_description: None,
            job_location: Some("Remote".to_string()),
            additional_info: None,
            comp_name: "acme".to_string(),
            department: Some("Platform".to_string()),
            status: "Invited".to_string(),
            application_date: None,
        }],
    }
}

pub fn seeded_profile() -> EmployeeProfile {
    serde_json::from_value(json!({
        "employee_id": "E042",
        "first_name": "Asha",
        "last_name": "Rao",
        "email": "asha.rao@acme.test",
        "designation": "Engineer II",
        "location": "Pune",
        "department": "Platform",
        "skills": [],
    }))
    .expect("seed profile should deserialize")
}

#[derive(Clone)]
pub struct BackendState {
    inner: Arc<Mutex<PortalData>>,
}

impl BackendState {
    pub fn new(data: PortalData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(data)),
        }
    }

    /// Runs `f` with the locked portal data; used by handlers and by test
    /// assertions alike.
    pub fn with<R>(&self, f: impl FnOnce(&mut PortalData) -> R) -> R {
        let mut guard = self.inner.lock().expect("portal data lock");
        f(&mut guard)
    }
}

/// Binds an ephemeral port, serves the stub and returns its base URL plus
/// a handle onto the shared state.
pub async fn spawn_backend(data: PortalData) -> (String, BackendState) {
    let state = BackendState::new(data);
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    (format!("http://{addr}"), state)
}

pub fn router(state: BackendState) -> Router {
    Router::new()
        .route(
            "/api/leave-requests/{company}/{employee}",
            get(list_leave_requests).post(create_leave_request),
        )
        .route(
            "/api/leave-balance/{company}/{employee}",
            get(leave_balance),
        )
        .route(
            "/api/profile/{company}/{employee}",
            get(get_profile).put(put_profile),
        )
        .route("/api/profile/{company}/{employee}/skills", put(put_skills))
        .route(
            "/api/profile/{company}/{employee}/education",
            put(put_education),
        )
        .route("/api/company-jobs/{company}", get(company_jobs))
        .route(
            "/api/candidate-applications/{company}/{employee}",
            get(candidate_applications),
        )
        .route(
            "/api/termination-request/{company}/{employee}",
            get(get_termination).post(post_termination),
        )
        .with_state(state)
}

async fn list_leave_requests(State(state): State<BackendState>) -> Json<Vec<LeaveRequest>> {
    Json(state.with(|data| data.requests.clone()))
}

async fn leave_balance(State(state): State<BackendState>) -> Json<LeaveBalances> {
    Json(state.with(|data| data.balances.clone()))
}

async fn create_leave_request(
    State(state): State<BackendState>,
    Json(candidate): Json<CandidateLeave>,
) -> Response {
    state.with(|data| {
        let requested = candidate.requested_days();
        if data.balances.debit(candidate.leave_type, requested).is_err() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Insufficient leave balance" })),
            )
                .into_response();
        }

        let created = LeaveRequest {
            start_date: candidate.start_date,
            end_date: candidate.end_date,
            leave_type: candidate.leave_type,
            reason: candidate.reason,
            status: LeaveStatus::Pending,
            request_date: Utc::now().naive_utc(),
        };
        data.requests.push(created.clone());
        (StatusCode::CREATED, Json(created)).into_response()
    })
}

async fn get_profile(State(state): State<BackendState>) -> Json<EmployeeProfile> {
    Json(state.with(|data| data.profile.clone()))
}

async fn put_profile(
    State(state): State<BackendState>,
    Json(update): Json<ProfileUpdate>,
) -> Json<serde_json::Value> {
    state.with(|data| {
        data.profile.mobile_number = Some(update.mobile_number);
        data.profile.department = Some(update.department);
        data.profile.project_summary = Some(update.project_summary);
        data.profile.work_experience = Some(update.work_experience);
    });
    Json(json!({ "message": "Profile updated successfully" }))
}

#[derive(Deserialize)]
struct SkillsBody {
    skills: Vec<String>,
}

async fn put_skills(
    State(state): State<BackendState>,
    Json(body): Json<SkillsBody>,
) -> Json<serde_json::Value> {
    let stored = state.with(|data| {
        data.profile.skills = body.skills.clone();
        data.profile.skills.clone()
    });
    Json(json!({ "message": "Skills updated successfully", "skills": stored }))
}

async fn put_education(
    State(state): State<BackendState>,
    Json(education): Json<EducationRecord>,
) -> Json<serde_json::Value> {
    let stored = state.with(|data| {
        data.profile.education = Some(education.clone());
        education
    });
    Json(json!({ "message": "Education updated successfully", "education": stored }))
}

async fn company_jobs(State(state): State<BackendState>) -> Json<Vec<JobPosting>> {
    Json(state.with(|data| data.jobs.clone()))
}

async fn candidate_applications(
    State(state): State<BackendState>,
) -> Json<Vec<JobApplication>> {
    Json(state.with(|data| data.applications.clone()))
}

async fn get_termination(State(state): State<BackendState>) -> Response {
    match state.with(|data| data.termination.clone()) {
        Some(request) => Json(request).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No termination request found" })),
        )
            .into_response(),
    }
}

async fn post_termination(
    State(state): State<BackendState>,
    Json(candidate): Json<CandidateTermination>,
) -> Response {
    state.with(|data| {
        if data.termination.is_some() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "A termination request already exists" })),
            )
                .into_response();
        }

        data.termination = Some(TerminationRequest {
            status: "Pending".to_string(),
            reason_category: candidate.reason_category,
            reason: candidate.reason,
            last_working_date: candidate.last_working_date,
            notice_period: candidate.notice_period,
            request_date: Utc::now().naive_utc(),
        });
        Json(json!({ "message": "Termination request submitted successfully" })).into_response()
    })
}
