//! Financial Calculators CLI
//!
//! ```bash
//! # Prompt for every value
//! fincalc cd
//! fincalc mortgage
//!
//! # Non-interactive
//! fincalc cd --principal 1000 --rate 5 --years 1 --compounding 365
//! fincalc --format json mortgage --principal 200000 --rate 6 --years 30
//! ```

use clap::{Args, Parser, Subcommand};
use log::warn;

use financial_calculators::driver::{run_cd, run_mortgage};
use financial_calculators::{CdRecord, ConsoleInput, MortgageRecord, OutputFormat};

/// Certificate of deposit and mortgage calculators
#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Balance and interest earned on a certificate of deposit
    Cd(CdArgs),

    /// Monthly payment and total interest on a fixed-rate mortgage
    Mortgage(MortgageArgs),
}

#[derive(Args, Debug)]
struct CdArgs {
    /// Amount deposited
    #[arg(long)]
    principal: Option<f64>,

    /// Nominal annual rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Term in years, fractions allowed
    #[arg(long)]
    years: Option<f64>,

    /// Compounding periods per year
    #[arg(long)]
    compounding: Option<u32>,
}

impl CdArgs {
    fn into_record(self) -> Option<CdRecord> {
        match (self.principal, self.rate, self.years, self.compounding) {
            (Some(p), Some(r), Some(y), Some(n)) => Some(CdRecord::new(p, r, y, n)),
            (None, None, None, None) => None,
            _ => {
                warn!("Incomplete CD flags, prompting for all values");
                None
            }
        }
    }
}

#[derive(Args, Debug)]
struct MortgageArgs {
    /// Amount borrowed
    #[arg(long)]
    principal: Option<f64>,

    /// Annual rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Loan term in whole years
    #[arg(long)]
    years: Option<u32>,
}

impl MortgageArgs {
    fn into_record(self) -> Option<MortgageRecord> {
        match (self.principal, self.rate, self.years) {
            (Some(p), Some(r), Some(y)) => Some(MortgageRecord::new(p, r, y)),
            (None, None, None) => None,
            _ => {
                warn!("Incomplete mortgage flags, prompting for all values");
                None
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut console = ConsoleInput::stdio();

    match cli.command {
        Commands::Cd(args) => run_cd(&mut console, args.into_record(), cli.format),
        Commands::Mortgage(args) => {
            run_mortgage(&mut console, args.into_record(), cli.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_flags() {
        let cli = Cli::try_parse_from([
            "fincalc",
            "cd",
            "--principal",
            "1000",
            "--rate",
            "5",
            "--years",
            "1.5",
            "--compounding",
            "12",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Text);
        match cli.command {
            Commands::Cd(args) => {
                assert_eq!(args.into_record(), Some(CdRecord::new(1000.0, 5.0, 1.5, 12)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_mortgage_flags_with_json() {
        let cli = Cli::try_parse_from([
            "fincalc",
            "mortgage",
            "--principal",
            "200000",
            "--rate",
            "6",
            "--years",
            "30",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Mortgage(args) => {
                assert_eq!(args.into_record(), Some(MortgageRecord::new(200_000.0, 6.0, 30)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_partial_flags_fall_back_to_prompts() {
        let cli = Cli::try_parse_from(["fincalc", "mortgage", "--principal", "200000"]).unwrap();
        match cli.command {
            Commands::Mortgage(args) => assert_eq!(args.into_record(), None),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_flag_rejected() {
        assert!(Cli::try_parse_from(["fincalc", "cd", "--rate", "five"]).is_err());
        assert!(Cli::try_parse_from(["fincalc", "mortgage", "--years", "12.5"]).is_err());
    }
}
