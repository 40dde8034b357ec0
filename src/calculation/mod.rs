//! Calculation logic for the salary draft engine.
//!
//! This module contains the pure functions behind the salary form: amount
//! input parsing, derived totals (gross, deductions, net), the social
//! insurance contribution and overtime pay from hours.

mod amount_input;
mod overtime_pay;
mod salary_totals;
mod social_insurance;

pub use amount_input::{coerce_amount, parse_amount};
pub use overtime_pay::calculate_overtime_pay;
pub use salary_totals::calculate_totals;
pub use social_insurance::calculate_social_insurance;
