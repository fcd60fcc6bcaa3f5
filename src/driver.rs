//! One-shot console runs shared by the `fincalc` CLI and the standalone binaries

use std::io::{BufRead, Write};

use anyhow::Context;
use log::info;

use crate::cd::CdRecord;
use crate::console::{read_cd_record, read_mortgage_record, ConsoleInput};
use crate::mortgage::{MortgageCalculator, MortgageRecord};
use crate::report::{write_report, OutputFormat};

/// Calculate a CD, prompting for the record when none is supplied
pub fn run_cd<R: BufRead, W: Write>(
    console: &mut ConsoleInput<R, W>,
    record: Option<CdRecord>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let record = match record {
        Some(record) => record,
        None => read_cd_record(console).context("failed to read CD inputs")?,
    };
    info!("Calculating {}", record);

    let result = record.calculate()?;
    write_report(console.writer(), format, &record, &result)
}

/// Calculate a mortgage, prompting for the record when none is supplied
pub fn run_mortgage<R: BufRead, W: Write>(
    console: &mut ConsoleInput<R, W>,
    record: Option<MortgageRecord>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let record = match record {
        Some(record) => record,
        None => read_mortgage_record(console).context("failed to read mortgage inputs")?,
    };
    info!("Calculating {}", record);

    let mut calculator = MortgageCalculator::new(record);
    calculator.calculate_monthly_payment()?;
    let result = calculator.result()?;

    write_report(console.writer(), format, calculator.record(), &result)
}
