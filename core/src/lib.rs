//! Domain core for the staffdesk employee self-service portal.
//!
//! Everything in this crate is pure: typed models mirroring the backend's
//! wire formats, and the decision rules the portal applies before a request
//! is sent (leave request validation, balance accounting, profile
//! completion, termination rules). Callers supply all inputs, including the
//! current date; nothing here reads a clock or performs I/O.

pub mod models;
pub mod validation;
