//! Stateful mortgage calculator populated through setters

use super::record::{MortgageRecord, MortgageResult};
use crate::error::{CalcError, Result};

/// Holds a mortgage record and the last payment calculated for it.
///
/// Changing any input through a setter discards the stored payment, so
/// `total_of_interest` can only ever see a payment that matches the inputs.
#[derive(Debug, Clone, Default)]
pub struct MortgageCalculator {
    record: MortgageRecord,
    monthly_payment: Option<f64>,
}

impl MortgageCalculator {
    pub fn new(record: MortgageRecord) -> Self {
        Self {
            record,
            monthly_payment: None,
        }
    }

    pub fn record(&self) -> &MortgageRecord {
        &self.record
    }

    pub fn principal(&self) -> f64 {
        self.record.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.record.annual_rate_percent
    }

    pub fn term_years(&self) -> u32 {
        self.record.term_years
    }

    pub fn set_principal(&mut self, principal: f64) {
        self.record.principal = principal;
        self.monthly_payment = None;
    }

    pub fn set_annual_rate_percent(&mut self, annual_rate_percent: f64) {
        self.record.annual_rate_percent = annual_rate_percent;
        self.monthly_payment = None;
    }

    pub fn set_term_years(&mut self, term_years: u32) {
        self.record.term_years = term_years;
        self.monthly_payment = None;
    }

    /// Calculate and store the level monthly payment
    pub fn calculate_monthly_payment(&mut self) -> Result<f64> {
        let payment = self.record.payment()?;
        self.monthly_payment = Some(payment);
        Ok(payment)
    }

    /// Stored monthly payment, if one has been calculated for the current inputs
    pub fn monthly_payment(&self) -> Option<f64> {
        self.monthly_payment
    }

    /// Total interest over the loan: payments made minus principal
    pub fn total_of_interest(&self) -> Result<f64> {
        let payment = self
            .monthly_payment
            .ok_or(CalcError::UninitializedState("monthly payment"))?;
        Ok(self.record.interest_for_payment(payment))
    }

    /// Snapshot of the stored payment and the values derived from it
    pub fn result(&self) -> Result<MortgageResult> {
        let payment = self
            .monthly_payment
            .ok_or(CalcError::UninitializedState("monthly payment"))?;
        Ok(self.record.result_for_payment(payment))
    }
}
