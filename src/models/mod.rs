//! Core data models for the salary draft engine.
//!
//! This module contains the domain models used throughout the engine.

mod employee;
mod notification;
mod salary_draft;
mod salary_record;

pub use employee::Employee;
pub use notification::{Notification, NotificationVariant};
pub use salary_draft::{
    PayPeriod, SalaryAmounts, SalaryDraft, SalaryField, SalaryStatus, SalaryTotals,
};
pub use salary_record::{CreateSalaryRequest, SalaryFilters, SalaryRecord};
