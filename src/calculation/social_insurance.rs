//! Social insurance (GOSI) contribution.
//!
//! The employee's contribution is a percentage of base salary that depends on
//! nationality, rounded to whole currency units.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::SocialInsuranceConfig;
use crate::error::{DraftError, DraftResult};

/// Calculates the social insurance deduction for a base salary.
///
/// # Arguments
///
/// * `base_salary` - The monthly base salary
/// * `is_saudi` - Whether the employee is a Saudi national
/// * `config` - The contribution rates, in percent
///
/// Fails with [`DraftError::AmountOutOfRange`] when the product does not fit
/// in a `Decimal`.
///
/// # Examples
///
/// ```
/// use salary_draft::calculation::calculate_social_insurance;
/// use salary_draft::config::SocialInsuranceConfig;
/// use rust_decimal::Decimal;
///
/// let config = SocialInsuranceConfig::default();
/// let gosi = calculate_social_insurance(Decimal::new(5000, 0), true, &config).unwrap();
/// assert_eq!(gosi, Decimal::new(488, 0)); // 9.75% of 5000 = 487.5, rounded
/// ```
pub fn calculate_social_insurance(
    base_salary: Decimal,
    is_saudi: bool,
    config: &SocialInsuranceConfig,
) -> DraftResult<Decimal> {
    let rate = if is_saudi {
        config.saudi_rate_percent
    } else {
        config.non_saudi_rate_percent
    };

    base_salary
        .checked_mul(rate)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .map(|v| v.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| DraftError::AmountOutOfRange {
            field: "social_insurance".to_string(),
        })
}
