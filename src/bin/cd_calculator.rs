//! Interactive certificate of deposit calculator
//!
//! Prompts for principal, rate, term and compounding frequency, then prints
//! the final balance and the interest earned.

use financial_calculators::{driver::run_cd, ConsoleInput, OutputFormat};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut console = ConsoleInput::stdio();
    run_cd(&mut console, None, OutputFormat::Text)
}
