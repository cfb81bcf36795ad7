//! # Till Console Application
//!
//! Thin orchestration layer over `till-core`.
//!
//! ## Startup Sequence
//! 1. Load configuration (`TILL_*` environment variables)
//! 2. Initialize tracing (logging to stderr)
//! 3. Load the opening register stock
//! 4. Prompt for price and amount paid
//! 5. Compute change, print the receipt
//!
//! The actual work is in [`process`] so it can be driven by tests with
//! in-memory input and output.

pub mod config;
pub mod display;
pub mod error;
pub mod prompt;

use std::fs;
use std::io::{self, BufRead, Write};

use till_core::{allocate, CashRegister, ChangeResult, DenominationTable, Inventory, Payment};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, TillConfig};
use crate::display::Receipt;
use crate::error::CliError;
use crate::prompt::{read_amount, PAID_PROMPT, PRICE_PROMPT};

/// Runs one transaction against stdin/stdout.
pub fn run() -> Result<(), CliError> {
    let config = TillConfig::load()?;
    init_tracing(&config.log_filter);
    debug!(?config, "Configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    process(&config, &mut stdin.lock(), &mut stdout.lock())
}

/// Prompts for one sale on `input` and writes the receipt to `output`.
pub fn process<R, W>(config: &TillConfig, input: &mut R, output: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let price = read_amount(input, output, PRICE_PROMPT, "price")?;
    let paid = read_amount(input, output, PAID_PROMPT, "paid")?;

    if config.unlimited_stock {
        let payment = Payment::from_major(price, paid)?;
        let result = allocate(&DenominationTable::EURO, payment.change(), None)?;
        log_outcome(&result);

        let receipt = Receipt {
            price: payment.price,
            paid: payment.paid,
            result: &result,
            transaction_id: None,
            register: None,
        };
        return emit(config.output, &receipt, output);
    }

    let mut register = CashRegister::new(DenominationTable::EURO, load_inventory(config)?)?;
    let tx = register.make_change(price, paid)?.clone();
    info!(id = %tx.id, "Transaction recorded");
    log_outcome(&tx.result);

    let receipt = Receipt {
        price: tx.price,
        paid: tx.paid,
        result: &tx.result,
        transaction_id: Some(tx.id),
        register: Some(&register),
    };
    emit(config.output, &receipt, output)
}

/// Reads the opening stock from the configured file, or uses the standard float.
pub fn load_inventory(config: &TillConfig) -> Result<Inventory, CliError> {
    let Some(path) = &config.stock_file else {
        debug!("No stock file configured, using the standard opening float");
        return Ok(Inventory::euro_starting_float());
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::StockFile {
        path: path.clone(),
        source,
    })?;
    let inventory = serde_json::from_str(&text).map_err(|source| CliError::StockFormat {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Loaded register stock");
    Ok(inventory)
}

fn log_outcome(result: &ChangeResult) {
    info!(
        change = %result.change,
        pieces = result.breakdown.pieces(),
        "Change computed"
    );
    if !result.is_fully_paid() {
        warn!(unpaid = %result.unpaid, "Register could not cover the full change");
    }
}

fn emit<W: Write>(format: OutputFormat, receipt: &Receipt<'_>, output: &mut W) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write!(output, "{receipt}")?,
        OutputFormat::Json => writeln!(output, "{}", receipt.to_json()?)?,
    }
    output.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (takes precedence)
/// - `TILL_LOG=till_cli=trace` - Fallback filter from configuration
/// - Default: INFO level
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
