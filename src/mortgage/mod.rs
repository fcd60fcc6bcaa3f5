//! Fixed-rate mortgage calculator: level monthly payment and total interest

mod calculator;
mod record;

pub use calculator::MortgageCalculator;
pub use record::{
    monthly_payment, MortgageRecord, MortgageResult, MONTHS_PER_YEAR, MORTGAGE_DECIMALS,
};
