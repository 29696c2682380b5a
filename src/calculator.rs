//! Fixed-rate amortization and affordability helpers.

use crate::error::{LoanError, Result};
use serde::Serialize;

pub const DEFAULT_ANNUAL_RATE: f64 = 8.5;

/// Share of monthly income a payment may take and still count as affordable.
pub const AFFORDABLE_RATIO_PERCENT: u32 = 40;

/// Monthly payment for a fixed-rate loan:
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r = annual_rate_percent / 1200`.
///
/// A zero rate falls back to straight-line repayment, `P / n`.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> Result<f64> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(LoanError::InvalidInput(format!(
            "principal must be greater than 0 (found {principal})"
        )));
    }
    if term_months == 0 {
        return Err(LoanError::InvalidInput(
            "term must be at least one month".to_string(),
        ));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(LoanError::InvalidInput(format!(
            "annual rate must be a non-negative number (found {annual_rate_percent})"
        )));
    }

    let months = f64::from(term_months);
    let monthly_rate = annual_rate_percent / 1200.0;
    if monthly_rate == 0.0 {
        return Ok(principal / months);
    }

    // Discount form: tends to principal * rate as the term grows.
    let discount = (1.0 + monthly_rate).powf(-months);
    let payment = principal * monthly_rate / (1.0 - discount);
    if !payment.is_finite() {
        return Err(LoanError::InvalidInput(format!(
            "monthly payment is not representable for principal {principal} over {term_months} months"
        )));
    }
    Ok(payment)
}

pub fn total_interest(principal: f64, annual_rate_percent: f64, term_months: u32) -> Result<f64> {
    let payment = monthly_payment(principal, annual_rate_percent, term_months)?;
    Ok(payment * f64::from(term_months) - principal)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AffordabilityBand {
    Excellent,
    Good,
    Moderate,
    High,
}

impl AffordabilityBand {
    pub fn describe(self) -> &'static str {
        match self {
            AffordabilityBand::Excellent => "Excellent affordability",
            AffordabilityBand::Good => "Good affordability",
            AffordabilityBand::Moderate => "Moderate risk - consider reducing loan amount",
            AffordabilityBand::High => "High risk - loan amount too high for income",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Affordability {
    pub ratio_percent: u32,
    pub affordable: bool,
    pub band: AffordabilityBand,
}

pub fn affordability(monthly_income: f64, payment: f64) -> Result<Affordability> {
    if !monthly_income.is_finite() || monthly_income <= 0.0 {
        return Err(LoanError::InvalidInput(format!(
            "monthly income must be greater than 0 (found {monthly_income})"
        )));
    }
    if !payment.is_finite() || payment < 0.0 {
        return Err(LoanError::InvalidInput(format!(
            "payment must be a non-negative number (found {payment})"
        )));
    }

    let ratio = payment / monthly_income * 100.0;
    let band = if ratio <= 30.0 {
        AffordabilityBand::Excellent
    } else if ratio <= 40.0 {
        AffordabilityBand::Good
    } else if ratio <= 50.0 {
        AffordabilityBand::Moderate
    } else {
        AffordabilityBand::High
    };

    Ok(Affordability {
        ratio_percent: ratio.round().min(f64::from(u32::MAX)) as u32,
        affordable: ratio <= f64::from(AFFORDABLE_RATIO_PERCENT),
        band,
    })
}
