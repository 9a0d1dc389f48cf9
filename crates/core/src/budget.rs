//! Derived monetary totals.
//!
//! Totals are never persisted: they are recomputed from their components
//! every time a row is read.

use crate::error::CoreError;
use crate::types::Money;

/// Upper bound on the number of yearly amounts an activity may carry.
pub const MAX_ACTIVITY_YEARS: usize = 50;

/// Total value of an activity: the sum of its per-year amounts.
///
/// An empty list sums to zero.
pub fn activity_total(per_year: &[Money]) -> Money {
    per_year.iter().copied().sum()
}

/// Total contribution of a partner to an activity (cash plus in-kind).
pub fn partner_contribution(efectivo: Money, especie: Money) -> Money {
    efectivo + especie
}

/// Validate a per-year amount list: bounded length, no negative amounts.
pub fn validate_per_year_amounts(per_year: &[Money]) -> Result<(), CoreError> {
    if per_year.len() > MAX_ACTIVITY_YEARS {
        return Err(CoreError::Validation(format!(
            "An activity may carry at most {MAX_ACTIVITY_YEARS} yearly amounts, got {}",
            per_year.len()
        )));
    }
    if let Some((year, amount)) = per_year
        .iter()
        .enumerate()
        .find(|(_, amount)| amount.is_sign_negative() && !amount.is_zero())
    {
        return Err(CoreError::Validation(format!(
            "Yearly amount for year {} must not be negative, got {amount}",
            year + 1
        )));
    }
    Ok(())
}
