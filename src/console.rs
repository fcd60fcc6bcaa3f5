//! Line-oriented console input for the calculator drivers
//!
//! `ConsoleInput` owns both the input and output handles for one read
//! sequence. Drivers create it, lend it to the prompt functions, and let it
//! drop at the end of scope, which releases the stdin lock on every path.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use log::debug;

use crate::cd::{CdRecord, DAILY_COMPOUNDING};
use crate::error::{CalcError, Result};
use crate::mortgage::MortgageRecord;

/// Prompts on `W` and reads whitespace-separated tokens from `R`
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    /// Tokens left over from the last line read, in reverse order
    pending: Vec<String>,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: Vec::new(),
        }
    }

    /// Output handle, for printing results after the read sequence
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Release the underlying handles
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Next token, reading further lines as needed. `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is a malformed answer to `field`.
    fn next_token(&mut self, field: &'static str) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            let read = match self.reader.read_line(&mut line) {
                Ok(read) => read,
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    return Err(CalcError::InputFormat {
                        field,
                        input: "<invalid UTF-8>".to_string(),
                    });
                }
                Err(err) => return Err(err.into()),
            };
            if read == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
    }

    /// Print `prompt` on its own line and parse the next token as `T`
    pub fn prompt<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> Result<T> {
        writeln!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let token = self.next_token(field)?.ok_or_else(|| CalcError::InputFormat {
            field,
            input: String::new(),
        })?;
        debug!("read {} = {:?}", field, token);

        match token.parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(CalcError::InputFormat { field, input: token }),
        }
    }
}

/// Run the CD prompt sequence and build a record from the answers.
///
/// A compounded time of 0 selects daily compounding.
pub fn read_cd_record<R: BufRead, W: Write>(
    console: &mut ConsoleInput<R, W>,
) -> Result<CdRecord> {
    let deposit: f64 = console.prompt("Enter the Principal: ", "principal")?;
    let rate: f64 = console.prompt("Enter the interest rate: ", "interest rate")?;
    let years: f64 = console.prompt("Enter the loan Length: ", "loan length")?;
    let compounding: u32 = console.prompt("Enter the compounded time: ", "compounded time")?;

    let compounding = if compounding == 0 { DAILY_COMPOUNDING } else { compounding };
    Ok(CdRecord::new(deposit, rate, years, compounding))
}

/// Run the mortgage prompt sequence and build a record from the answers
pub fn read_mortgage_record<R: BufRead, W: Write>(
    console: &mut ConsoleInput<R, W>,
) -> Result<MortgageRecord> {
    let principal: f64 = console.prompt("Enter the Principal: ", "principal")?;
    let rate: f64 = console.prompt("Enter the interest rate: ", "interest rate")?;
    let years: u32 = console.prompt("Enter the loan Length (in years): ", "loan length")?;

    Ok(MortgageRecord::new(principal, rate, years))
}
