//! Certificate of deposit calculator: compound growth of a fixed-term deposit

mod record;

pub use record::{compound_balance, CdRecord, CdResult, CD_DECIMALS, DAILY_COMPOUNDING};
