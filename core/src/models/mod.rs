//! Data models mirroring the backend's wire formats.
//!
//! Request and response bodies use camelCase keys; resources the backend
//! returns straight from storage (profiles, termination requests, job
//! rows) keep their snake_case column names. Each type documents which
//! side of that split it lives on through its serde attributes.

pub mod job;
pub mod leave;
pub mod profile;
pub mod termination;
