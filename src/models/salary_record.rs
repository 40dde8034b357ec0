//! Create payloads, stored salary records and list filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SalaryAmounts, SalaryStatus, SalaryTotals};

/// Payload handed to the salary create operation.
///
/// Mirrors the draft field for field. Amounts and totals are flattened so
/// the wire shape is one flat object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSalaryRequest {
    /// The employee the salary belongs to.
    pub employee_id: String,
    /// Pay period month.
    pub month: u32,
    /// Pay period year.
    pub year: i32,
    /// Editable amounts.
    #[serde(flatten)]
    pub amounts: SalaryAmounts,
    /// Derived totals as the draft computed them.
    #[serde(flatten)]
    pub totals: SalaryTotals,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Submitted status, always `draft` from the form.
    #[serde(default)]
    pub status: SalaryStatus,
}

/// A salary record as stored by the create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique identifier assigned on creation.
    pub id: Uuid,
    /// The employee the salary belongs to.
    pub employee_id: String,
    /// Employee display name at the time of creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// Employee department at the time of creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Pay period month.
    pub month: u32,
    /// Pay period year.
    pub year: i32,
    /// Lifecycle status.
    pub status: SalaryStatus,
    /// Editable amounts.
    #[serde(flatten)]
    pub amounts: SalaryAmounts,
    /// Derived totals.
    #[serde(flatten)]
    pub totals: SalaryTotals,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last changed.
    pub updated_at: DateTime<Utc>,
}

/// Filters for listing salary records. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryFilters {
    /// Only records for this employee.
    pub employee_id: Option<String>,
    /// Only records for this month.
    pub month: Option<u32>,
    /// Only records for this year.
    pub year: Option<i32>,
    /// Only records in this status.
    pub status: Option<SalaryStatus>,
}

impl SalaryFilters {
    /// Returns true if the record passes every set filter.
    pub fn matches(&self, record: &SalaryRecord) -> bool {
        self.employee_id
            .as_deref()
            .is_none_or(|id| record.employee_id == id)
            && self.month.is_none_or(|m| record.month == m)
            && self.year.is_none_or(|y| record.year == y)
            && self.status.is_none_or(|s| record.status == s)
    }
}
