//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per customer, in service order:
//!
//! ```csv
//! name,entered_time,number_of_tickets
//! Alice,2024-01-01 10:00:00,2
//! Bob,2024-01-01 10:00:40,1
//! ```
//!
//! `entered_time` uses `YYYY-MM-DD HH:MM:SS` (parsed by
//! [`SimTime::parse`]).  A zero ticket quota or an empty name is rejected —
//! such a row would either be a no-op forever or produce unattributable
//! report lines.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tbc_core::SimTime;

use crate::customer::Customer;
use crate::RosterError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    name:              String,
    entered_time:      String,
    number_of_tickets: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a customer roster from a CSV file, preserving row order.
pub fn load_roster_csv(path: &Path) -> Result<Vec<Customer>, RosterError> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or inline fixtures.
pub fn load_roster_reader<R: Read>(reader: R) -> Result<Vec<Customer>, RosterError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut roster = Vec::new();

    for (i, result) in csv_reader.deserialize::<RosterRecord>().enumerate() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        roster.push(customer_from_record(row, i)?);
    }

    Ok(roster)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn customer_from_record(row: RosterRecord, index: usize) -> Result<Customer, RosterError> {
    if row.name.trim().is_empty() {
        return Err(RosterError::Parse(format!("row {index}: empty customer name")));
    }
    if row.number_of_tickets == 0 {
        return Err(RosterError::Parse(format!(
            "row {index} ({}): number_of_tickets must be at least 1",
            row.name
        )));
    }
    let entered_time = SimTime::parse(&row.entered_time)?;
    Ok(Customer::new(row.name, entered_time, row.number_of_tickets))
}
