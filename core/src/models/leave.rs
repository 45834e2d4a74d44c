use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Casual,
    Sick,
    Annual,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Casual, LeaveType::Sick, LeaveType::Annual];

    pub fn name(&self) -> &'static str {
        match self {
            LeaveType::Casual => "casual",
            LeaveType::Sick => "sick",
            LeaveType::Annual => "annual",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown leave type: {0}")]
pub struct UnknownLeaveType(pub String);

impl FromStr for LeaveType {
    type Err = UnknownLeaveType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "casual" => Ok(LeaveType::Casual),
            "sick" => Ok(LeaveType::Sick),
            "annual" => Ok(LeaveType::Annual),
            other => Err(UnknownLeaveType(other.to_string())),
        }
    }
}

// The backend stores these capitalized, so no rename here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for LeaveStatus {
    fn default() -> Self {
        LeaveStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: String,
    pub status: LeaveStatus,
    pub request_date: NaiveDateTime,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, LeaveStatus::Pending)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateLeave {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: String,
}

impl CandidateLeave {
    /// Inclusive day count of the requested window; a single-day request
    /// counts as one day. Negative when the range is inverted, which the
    /// validator rejects before the count is ever used.
    pub fn requested_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub allocated: i64,
    pub used: i64,
    pub remaining: i64,
}

impl LeaveBalance {
    pub fn new(allocated: i64) -> Self {
        Self {
            allocated,
            used: 0,
            remaining: allocated,
        }
    }

    /// Records `days` against this account, keeping
    /// `remaining = allocated - used`.
    pub fn debit(&mut self, days: i64) -> Result<(), BalanceError> {
        if self.remaining < days {
            return Err(BalanceError::Insufficient {
                remaining: self.remaining,
                requested: days,
            });
        }
        self.used += days;
        self.remaining -= days;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    #[error("insufficient leave balance: {requested} requested, {remaining} remaining")]
    Insufficient { remaining: i64, requested: i64 },
}

/// Per-employee balance sheet as the balance endpoint returns it. A leave
/// type that was never allocated is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalances {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casual: Option<LeaveBalance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick: Option<LeaveBalance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual: Option<LeaveBalance>,
}

impl LeaveBalances {
    pub fn get(&self, leave_type: LeaveType) -> Option<&LeaveBalance> {
        match leave_type {
            LeaveType::Casual => self.casual.as_ref(),
            LeaveType::Sick => self.sick.as_ref(),
            LeaveType::Annual => self.annual.as_ref(),
        }
    }

    pub fn get_mut(&mut self, leave_type: LeaveType) -> Option<&mut LeaveBalance> {
        match leave_type {
            LeaveType::Casual => self.casual.as_mut(),
            LeaveType::Sick => self.sick.as_mut(),
            LeaveType::Annual => self.annual.as_mut(),
        }
    }

    /// Debits the account for `leave_type`. A leave type with no account
    /// carries no cap, so the debit is a no-op there.
    pub fn debit(&mut self, leave_type: LeaveType, days: i64) -> Result<(), BalanceError> {
        match self.get_mut(leave_type) {
            Some(balance) => balance.debit(days),
            None => Ok(()),
        }
    }
}
