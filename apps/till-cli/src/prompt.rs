//! Console prompting for monetary amounts.
//!
//! Input is parsed straight into `Decimal`, so a typed `4.35` is exactly
//! 4.35 euros and never passes through a float.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::CliError;

pub const PRICE_PROMPT: &str = "Enter the product price (€): ";
pub const PAID_PROMPT: &str = "Enter the amount paid (€): ";

/// Writes `prompt`, reads one line and parses it as a euro amount.
///
/// Surrounding whitespace and a leading or trailing `€` are ignored.
pub fn read_amount<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &str,
) -> Result<Decimal, CliError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::MissingInput(field.to_string()));
    }

    parse_amount(field, &line)
}

/// Parses a typed euro amount.
pub fn parse_amount(field: &str, text: &str) -> Result<Decimal, CliError> {
    let trimmed = text.trim();
    let cleaned = trimmed
        .strip_prefix('€')
        .or_else(|| trimmed.strip_suffix('€'))
        .unwrap_or(trimmed)
        .trim();

    if cleaned.is_empty() {
        return Err(CliError::MissingInput(field.to_string()));
    }

    Decimal::from_str(cleaned).map_err(|_| CliError::InvalidNumber {
        field: field.to_string(),
        input: trimmed.to_string(),
    })
}
