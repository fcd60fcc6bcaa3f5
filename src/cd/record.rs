//! CD inputs, the compound interest formula, and its result

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, CalcError, Result};

/// Compounding periods per year for daily compounding
pub const DAILY_COMPOUNDING: u32 = 365;

/// Decimal places used when printing CD results
pub const CD_DECIMALS: usize = 4;

/// Final balance of `deposit` compounded `periods_per_year` times a year.
///
/// `annual_rate` is a decimal (0.05 for 5%). Implements `P(1 + r/n)^(n*t)`,
/// taken as `P * exp(n*t * ln_1p(r/n))` so tiny rates keep their precision.
pub fn compound_balance(deposit: f64, annual_rate: f64, years: f64, periods_per_year: u32) -> f64 {
    deposit * growth_exponent(annual_rate, years, periods_per_year).exp()
}

/// `ln` of the growth factor `(1 + r/n)^(n*t)`
fn growth_exponent(annual_rate: f64, years: f64, periods_per_year: u32) -> f64 {
    let n = periods_per_year as f64;
    n * years * (annual_rate / n).ln_1p()
}

/// Inputs for a certificate of deposit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdRecord {
    /// Principal deposited at the start of the term
    pub deposit: f64,

    /// Nominal annual rate in percent (5.0 = 5%)
    pub nominal_annual_rate_percent: f64,

    /// Term length in years, fractional terms allowed
    pub years: f64,

    /// Number of times interest is applied per year
    pub compounding_frequency_per_year: u32,
}

impl CdRecord {
    /// Store the inputs as given. Nothing is validated until `calculate`.
    pub fn new(
        deposit: f64,
        nominal_annual_rate_percent: f64,
        years: f64,
        compounding_frequency_per_year: u32,
    ) -> Self {
        Self {
            deposit,
            nominal_annual_rate_percent,
            years,
            compounding_frequency_per_year,
        }
    }

    /// Nominal rate as a decimal
    pub fn decimal_rate(&self) -> f64 {
        self.nominal_annual_rate_percent / 100.0
    }

    /// Check the record against the formula's domain
    pub fn validate(&self) -> Result<()> {
        ensure_positive("deposit", self.deposit)?;
        ensure_non_negative("interest rate", self.nominal_annual_rate_percent)?;
        ensure_positive("years", self.years)?;
        if self.compounding_frequency_per_year == 0 {
            return Err(CalcError::InvalidInput {
                field: "compounding frequency",
                value: 0.0,
                reason: "must be at least once per year",
            });
        }
        Ok(())
    }

    /// Compute the final balance and interest earned.
    ///
    /// The record is only borrowed, so repeated calls return the same result.
    pub fn calculate(&self) -> Result<CdResult> {
        self.validate()?;

        let rate = self.decimal_rate();
        let n = self.compounding_frequency_per_year;
        let final_balance =
            ensure_finite("final balance", compound_balance(self.deposit, rate, self.years, n))?;
        let annual_percentage_yield =
            ensure_finite("annual percentage yield", growth_exponent(rate, 1.0, n).exp_m1())?;

        debug!(
            "CD: deposit={} rate={} years={} n={} -> balance={}",
            self.deposit, rate, self.years, n, final_balance
        );

        Ok(CdResult {
            final_balance,
            interest_earned: final_balance - self.deposit,
            annual_percentage_yield,
        })
    }
}

impl fmt::Display for CdRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CdRecord{{deposit={}, interestRate={}, years={}, compoundedTime={}}}",
            self.deposit,
            self.nominal_annual_rate_percent,
            self.years,
            self.compounding_frequency_per_year
        )
    }
}

/// Outcome of a CD calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdResult {
    pub final_balance: f64,
    pub interest_earned: f64,

    /// Effective annual rate after compounding, as a decimal
    pub annual_percentage_yield: f64,
}

impl CdResult {
    pub fn annual_percentage_yield(&self) -> f64 {
        self.annual_percentage_yield
    }
}

impl fmt::Display for CdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Balance: {:.*}", CD_DECIMALS, self.final_balance)?;
        write!(f, "Interest: {:.*}", CD_DECIMALS, self.interest_earned)
    }
}
