//! Overtime pay from hours worked.
//!
//! The hourly rate is derived from the monthly base salary over a fixed
//! working month, then multiplied by the overtime multiplier.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::OvertimeConfig;
use crate::error::{DraftError, DraftResult};

/// Calculates overtime pay for a number of overtime hours.
///
/// `hourly = base_salary / (hours_per_day * working_days_per_month)` and the
/// result `hours * hourly * multiplier` is rounded to whole currency units.
/// Zero or negative hours, or a zero-length working month, give zero. A
/// product that does not fit in a `Decimal` fails with
/// [`DraftError::AmountOutOfRange`].
///
/// # Examples
///
/// ```
/// use salary_draft::calculation::calculate_overtime_pay;
/// use salary_draft::config::OvertimeConfig;
/// use rust_decimal::Decimal;
///
/// let config = OvertimeConfig::default(); // 8 hours x 22 days
/// let pay = calculate_overtime_pay(
///     Decimal::new(8800, 0),
///     Decimal::new(10, 0),
///     Decimal::new(15, 1),
///     &config,
/// )
/// .unwrap();
/// assert_eq!(pay, Decimal::new(750, 0)); // 10h x 50/h x 1.5
/// ```
pub fn calculate_overtime_pay(
    base_salary: Decimal,
    hours: Decimal,
    multiplier: Decimal,
    config: &OvertimeConfig,
) -> DraftResult<Decimal> {
    let month_hours =
        Decimal::from(config.hours_per_day) * Decimal::from(config.working_days_per_month);
    if hours <= Decimal::ZERO || month_hours.is_zero() {
        return Ok(Decimal::ZERO);
    }

    base_salary
        .checked_div(month_hours)
        .and_then(|hourly_rate| hours.checked_mul(hourly_rate))
        .and_then(|pay| pay.checked_mul(multiplier))
        .map(|pay| pay.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| DraftError::AmountOutOfRange {
            field: "overtime".to_string(),
        })
}
