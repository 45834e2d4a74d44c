//! Leave request validation.
//!
//! `decide` runs the submission checks in a fixed order and stops at the
//! first failure, so a candidate always gets exactly one rejection reason.
//! The current date is an argument; the function never reads a clock,
//! which keeps every decision reproducible.

use chrono::NaiveDate;

use crate::models::leave::{CandidateLeave, LeaveBalances, LeaveRequest, LeaveType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveDecision {
    Accepted,
    Rejected(RejectionReason),
}

impl LeaveDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LeaveDecision::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The candidate window touches an existing request. Every stored
    /// request blocks, whatever its status.
    Overlap,
    /// Start date strictly after end date.
    InvalidRange,
    /// Start date strictly before the supplied current date.
    PastDate,
    /// The leave type has a balance account and it cannot cover the
    /// requested days.
    InsufficientBalance {
        leave_type: LeaveType,
        remaining: i64,
        requested: i64,
    },
}

impl RejectionReason {
    /// User-facing sentence for this rejection, suitable for showing
    /// verbatim next to the form.
    pub fn message(&self) -> String {
        match self {
            RejectionReason::Overlap => {
                "You already have a leave request for this period.".to_string()
            }
            RejectionReason::InvalidRange => "Start date cannot be after end date.".to_string(),
            RejectionReason::PastDate => "Leave request cannot be for a past date.".to_string(),
            RejectionReason::InsufficientBalance {
                leave_type,
                remaining,
                ..
            } => {
                format!(
                    "Insufficient {leave_type} leave balance. You have {remaining} days remaining."
                )
            }
        }
    }
}

/// Decides whether `candidate` may be submitted, checking in order:
///
/// 1. overlap with any existing request (closed intervals, so windows that
///    only touch on a boundary day count)
/// 2. inverted date range
/// 3. start date already in the past relative to `today`
/// 4. insufficient balance for the candidate's leave type, counting days
///    inclusively
///
/// A leave type with no balance account is not capped, so check 4 passes
/// for it. Same inputs always produce the same decision.
pub fn decide(
    candidate: &CandidateLeave,
    existing: &[LeaveRequest],
    balances: &LeaveBalances,
    today: NaiveDate,
) -> LeaveDecision {
    if existing.iter().any(|request| overlaps(candidate, request)) {
        return LeaveDecision::Rejected(RejectionReason::Overlap);
    }

    if candidate.start_date > candidate.end_date {
        return LeaveDecision::Rejected(RejectionReason::InvalidRange);
    }

    if candidate.start_date < today {
        return LeaveDecision::Rejected(RejectionReason::PastDate);
    }

    let requested = candidate.requested_days();
    if let Some(balance) = balances.get(candidate.leave_type) {
        if balance.remaining < requested {
            return LeaveDecision::Rejected(RejectionReason::InsufficientBalance {
                leave_type: candidate.leave_type,
                remaining: balance.remaining,
                requested,
            });
        }
    }

    LeaveDecision::Accepted
}

/// Closed-interval overlap against one stored request: the candidate
/// starts inside it, ends inside it, or covers it. Written as the three
/// endpoint cases rather than the usual two-comparison form so that a
/// not-yet-rejected inverted candidate still matches when one of its
/// endpoints lands inside the stored window.
fn overlaps(candidate: &CandidateLeave, request: &LeaveRequest) -> bool {
    let starts_inside =
        candidate.start_date >= request.start_date && candidate.start_date <= request.end_date;
    let ends_inside =
        candidate.end_date >= request.start_date && candidate.end_date <= request.end_date;
    let covers =
        candidate.start_date <= request.start_date && candidate.end_date >= request.end_date;
    starts_inside || ends_inside || covers
}
