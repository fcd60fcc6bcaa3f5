//! Mortgage inputs and the fixed-rate amortization formula

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, CalcError, Result};

pub const MONTHS_PER_YEAR: u32 = 12;

/// Decimal places used when printing mortgage results
pub const MORTGAGE_DECIMALS: usize = 2;

/// Level payment that fully amortizes `principal` over `num_payments` periods.
///
/// Standard annuity formula `P * i(1+i)^n / ((1+i)^n - 1)`, evaluated as
/// `P * i / (1 - (1+i)^-n)` through `ln_1p`/`exp_m1` so that neither a
/// vanishing rate nor an overflowing `(1+i)^n` loses the result. A zero
/// periodic rate has no interest to spread: the payment is `principal / n`.
pub fn monthly_payment(principal: f64, monthly_rate: f64, num_payments: u32) -> Result<f64> {
    if num_payments == 0 {
        return Err(CalcError::InvalidInput {
            field: "number of payments",
            value: 0.0,
            reason: "must be at least one",
        });
    }

    let n = num_payments as f64;
    if monthly_rate == 0.0 {
        return Ok(principal / n);
    }

    // 1 - (1+i)^-n, without cancellation for tiny i
    let discounted_share = -(-n * monthly_rate.ln_1p()).exp_m1();
    ensure_finite("monthly payment", principal * monthly_rate / discounted_share)
}

/// Inputs for a fixed-rate, fully amortizing loan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MortgageRecord {
    /// Amount borrowed
    pub principal: f64,

    /// Annual rate in percent (6.5 = 6.5%)
    pub annual_rate_percent: f64,

    /// Loan term in whole years
    pub term_years: u32,
}

impl MortgageRecord {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Annual percentage rate converted to a decimal monthly rate
    pub fn monthly_rate(&self) -> f64 {
        (self.annual_rate_percent / 100.0) / MONTHS_PER_YEAR as f64
    }

    pub fn num_payments(&self) -> u32 {
        self.term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("principal", self.principal)?;
        ensure_non_negative("interest rate", self.annual_rate_percent)?;
        if self.term_years == 0 {
            return Err(CalcError::InvalidInput {
                field: "loan length",
                value: 0.0,
                reason: "must be at least one year",
            });
        }
        Ok(())
    }

    /// Validated monthly payment for this record.
    ///
    /// Fails when the payment, or the total paid over the term, overflows.
    pub(crate) fn payment(&self) -> Result<f64> {
        self.validate()?;
        let rate = self.monthly_rate();
        let n = self.num_payments();
        let payment = monthly_payment(self.principal, rate, n)?;
        ensure_finite("total paid", payment * n as f64)?;
        debug!(
            "Mortgage: principal={} monthly_rate={} payments={} -> payment={}",
            self.principal, rate, n, payment
        );
        Ok(payment)
    }

    /// Total interest paid over the life of the loan at `payment` per month.
    ///
    /// An amortizing payment never totals less than the principal, so the
    /// rounding noise left when the rate is too small to register is clamped.
    pub(crate) fn interest_for_payment(&self, payment: f64) -> f64 {
        (payment * self.num_payments() as f64 - self.principal).max(0.0)
    }

    pub(crate) fn result_for_payment(&self, payment: f64) -> MortgageResult {
        let num_payments = self.num_payments();
        MortgageResult {
            monthly_payment: payment,
            total_interest: self.interest_for_payment(payment),
            total_paid: payment * num_payments as f64,
            num_payments,
        }
    }

    /// Compute payment and interest in one step
    pub fn calculate(&self) -> Result<MortgageResult> {
        let payment = self.payment()?;
        Ok(self.result_for_payment(payment))
    }
}

impl fmt::Display for MortgageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MortgageRecord{{principal={}, interestRate={}, yearsOfLoan={}}}",
            self.principal, self.annual_rate_percent, self.term_years
        )
    }
}

/// Outcome of a mortgage calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub num_payments: u32,
}

impl fmt::Display for MortgageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly payment: {:.*}", MORTGAGE_DECIMALS, self.monthly_payment)?;
        write!(f, "Total interest paid: {:.*}", MORTGAGE_DECIMALS, self.total_interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_thirty_year_reference_payment() {
        let result = MortgageRecord::new(200_000.0, 6.0, 30).calculate().unwrap();

        assert_eq!(result.num_payments, 360);
        assert_abs_diff_eq!(result.monthly_payment, 1199.10, epsilon = 0.005);
        assert_abs_diff_eq!(result.total_interest, 231_676.38, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_paid, 431_676.38, epsilon = 0.01);
    }

    #[test]
    fn test_fifteen_year_payment() {
        let result = MortgageRecord::new(250_000.0, 6.5, 15).calculate().unwrap();
        assert!((result.monthly_payment - 2177.77).abs() < 0.005);
        assert!((result.total_interest - 141_998.31).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_division() {
        let result = MortgageRecord::new(120_000.0, 0.0, 10).calculate().unwrap();

        assert_eq!(result.monthly_payment, 1000.0);
        assert_eq!(result.total_interest, 0.0);
        assert!(result.monthly_payment.is_finite());
    }

    #[test]
    fn test_positive_rate_accrues_interest() {
        for &rate in &[1e-12, 1e-6, 0.01, 0.5, 3.25, 6.0, 18.0, 250.0] {
            for &years in &[1, 5, 15, 30, 40] {
                let result = MortgageRecord::new(50_000.0, rate, years).calculate().unwrap();
                assert!(result.monthly_payment.is_finite());
                assert!(
                    result.total_interest > 0.0,
                    "rate={} years={} gave {}",
                    rate, years, result.total_interest
                );
            }
        }
    }

    #[test]
    fn test_vanishing_rate_stays_finite() {
        let result = MortgageRecord::new(120_000.0, 1e-20, 10).calculate().unwrap();

        assert!(result.monthly_payment.is_finite());
        assert!(result.total_interest.is_finite());
        assert!(result.total_interest >= 0.0);
        assert_abs_diff_eq!(result.monthly_payment, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_huge_rate_stays_finite() {
        // (1 + i)^n overflows here; the payment tends to P * i
        let result = MortgageRecord::new(120_000.0, 1e6, 30).calculate().unwrap();

        let monthly_rate = 1e6 / 100.0 / 12.0;
        assert!(result.monthly_payment.is_finite());
        assert!(result.total_interest.is_finite());
        assert_relative_eq!(result.monthly_payment, 120_000.0 * monthly_rate, epsilon = 1e-12);
    }

    #[test]
    fn test_overflowing_payment_rejected() {
        let result = MortgageRecord::new(1e300, 1e12, 30).calculate();
        assert!(matches!(result, Err(CalcError::NonFiniteResult { .. })));
    }

    #[test]
    fn test_payment_formula_directly() {
        let payment = monthly_payment(200_000.0, 0.005, 360).unwrap();
        assert_abs_diff_eq!(payment, 1199.101050, epsilon = 1e-6);
        assert_eq!(monthly_payment(1200.0, 0.0, 12).unwrap(), 100.0);
    }

    #[test]
    fn test_payment_formula_needs_a_payment() {
        assert!(matches!(
            monthly_payment(1000.0, 0.0, 0),
            Err(CalcError::InvalidInput { field: "number of payments", .. })
        ));
        assert!(monthly_payment(1000.0, 0.01, 0).is_err());
    }

    #[test]
    fn test_invalid_records_rejected() {
        let zero_term = MortgageRecord::new(100_000.0, 5.0, 0).calculate();
        assert!(matches!(zero_term, Err(CalcError::InvalidInput { field: "loan length", .. })));

        let zero_principal = MortgageRecord::new(0.0, 5.0, 30).calculate();
        assert!(matches!(zero_principal, Err(CalcError::InvalidInput { field: "principal", .. })));

        let negative_rate = MortgageRecord::new(100_000.0, -2.0, 30).calculate();
        assert!(matches!(
            negative_rate,
            Err(CalcError::InvalidInput { field: "interest rate", .. })
        ));
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        let result = MortgageRecord::new(200_000.0, 6.0, 30).calculate().unwrap();
        assert_eq!(
            result.to_string(),
            "Monthly payment: 1199.10\nTotal interest paid: 231676.38"
        );
    }
}
