//! Interactive mortgage calculator
//!
//! Prompts for principal, rate and term in years, then prints the monthly
//! payment and the total interest paid.

use financial_calculators::{driver::run_mortgage, ConsoleInput, OutputFormat};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut console = ConsoleInput::stdio();
    run_mortgage(&mut console, None, OutputFormat::Text)
}
