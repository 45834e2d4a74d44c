//! Decision rules the portal applies before a request reaches the backend.
//!
//! Rejections here are ordinary values, not errors: each rule returns a
//! decision carrying at most one reason, and the caller shows that reason
//! verbatim. Transport and server failures live elsewhere.

pub mod leave;
pub mod termination;
