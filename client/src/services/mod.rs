//! Page-level flows composed from the API surface and the core rules.
//!
//! Each service owns what one portal page does: fetch the data the page
//! shows, run the local decision rules, and call the backend only for
//! candidates that pass. Rejections are returned as values so callers can
//! show exactly one reason.

pub mod jobs;
pub mod leave;
pub mod profile;
pub mod termination;

pub use jobs::JobBoardService;
pub use leave::{LeaveOverview, LeaveService, LeaveSubmission};
pub use profile::ProfileService;
pub use termination::{TerminationService, TerminationSubmission};
