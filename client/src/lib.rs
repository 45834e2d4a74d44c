//! Native client for the staffdesk employee self-service backend.
//!
//! Pairs the typed REST surface (`api`) with the page-level flows the
//! portal runs (`services`): fetch what a page needs, apply the
//! `staffdesk-core` decision rules locally, and only call the backend for
//! candidates that pass. Domain rejections come back as ordinary values;
//! [`error::ApiError`] is reserved for calls that actually failed.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod session;
