//! Design-check requests against the remote calculation service
//!
//! Each element type has an input struct that serializes to the JSON body
//! the service expects; the service replies with a table of demand/capacity
//! checks. All verification happens server-side, the client only validates
//! inputs well enough to avoid round trips that are certain to fail.

use serde::{Deserialize, Serialize};

pub mod beam;
pub mod client;
pub mod column;
pub mod foundation;

pub use beam::BeamInput;
pub use client::DesignClient;
pub use column::ColumnInput;
pub use foundation::FoundationInput;

/// Outcome of a single check or a whole report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// One row of a design-check table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRow {
    /// Check name, e.g. "Bearing pressure"
    pub name: String,
    /// Applied demand in the check's units
    pub demand: f64,
    /// Available capacity in the same units
    pub capacity: f64,
    /// Utilization ratio demand/capacity
    pub ratio: f64,
    /// Status reported by the service; older deployments omit it
    #[serde(default)]
    pub status: Option<CheckStatus>,
}

impl CheckRow {
    /// Reported status, falling back to the ratio when the service sent none
    pub fn effective_status(&self) -> CheckStatus {
        match self.status {
            Some(status) => status,
            None if self.ratio <= 1.0 => CheckStatus::Pass,
            None => CheckStatus::Fail,
        }
    }

    /// Whether this row passes
    pub fn passes(&self) -> bool {
        self.effective_status() == CheckStatus::Pass
    }
}

/// The full response for one element check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    /// Overall verdict; derived from the rows when omitted
    #[serde(default)]
    pub status: Option<CheckStatus>,
    /// Individual checks in the order the service evaluated them
    #[serde(default)]
    pub checks: Vec<CheckRow>,
    /// Free-form notes from the service
    #[serde(default)]
    pub remarks: Vec<String>,
}

impl DesignReport {
    /// Overall verdict: the reported status, or Fail if any row fails
    pub fn verdict(&self) -> CheckStatus {
        match self.status {
            Some(status) => status,
            None if self.checks.iter().all(CheckRow::passes) => CheckStatus::Pass,
            None => CheckStatus::Fail,
        }
    }

    /// The governing check: highest utilization ratio
    pub fn governing(&self) -> Option<&CheckRow> {
        self.checks
            .iter()
            .max_by(|a, b| a.ratio.total_cmp(&b.ratio))
    }
}
