//! Salary draft engine
//!
//! This crate keeps a salary draft's derived totals (gross, deductions, net)
//! consistent with its editable amounts, seeds the draft from an employee's
//! defaults when one is selected, and submits the draft exactly once per
//! user action.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod store;
