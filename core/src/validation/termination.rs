//! Termination request validation: one open request per employee.

use crate::models::termination::TerminationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationDecision {
    Accepted,
    Rejected(TerminationRejection),
}

impl TerminationDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TerminationDecision::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationRejection {
    AlreadyRequested,
}

impl TerminationRejection {
    pub fn message(&self) -> &'static str {
        match self {
            TerminationRejection::AlreadyRequested => "A termination request already exists",
        }
    }
}

/// An employee may have at most one termination request on file; the
/// backend enforces the same rule and this mirrors it before the call.
pub fn decide(existing: Option<&TerminationRequest>) -> TerminationDecision {
    match existing {
        Some(_) => TerminationDecision::Rejected(TerminationRejection::AlreadyRequested),
        None => TerminationDecision::Accepted,
    }
}
