//! Financial Calculators - certificate of deposit and fixed-rate mortgage math
//!
//! This library provides:
//! - Compound interest on a fixed-term deposit with a configurable compounding frequency
//! - Level monthly payment and total interest for a fully amortizing mortgage
//! - A scoped console reader and one-shot drivers for interactive use

pub mod error;
pub mod cd;
pub mod mortgage;
pub mod console;
pub mod report;
pub mod driver;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use cd::{CdRecord, CdResult};
pub use mortgage::{MortgageCalculator, MortgageRecord, MortgageResult};
pub use console::ConsoleInput;
pub use report::OutputFormat;
