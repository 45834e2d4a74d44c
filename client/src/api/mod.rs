//! Typed REST surface of the staffdesk backend.
//!
//! One trait per resource group, each implemented by [`ApiClient`] and
//! mockable in tests. The session travels as an argument so one client can
//! serve any signed-in employee.

pub mod client;
pub mod jobs;
pub mod leave;
pub mod profile;
pub mod termination;

pub use client::ApiClient;
pub use jobs::JobsApi;
pub use leave::LeaveApi;
pub use profile::ProfileApi;
pub use termination::TerminationApi;
