//! `tbc-roster` — customer roster entities and CSV loading.
//!
//! A roster is an ordered `Vec<Customer>`; the order is significant because
//! the orchestration loop serves customers in roster position and its drain
//! rule compares against the *previous* roster position.
//!
//! # CSV format
//!
//! One row per customer:
//!
//! ```csv
//! name,entered_time,number_of_tickets
//! Alice,2024-01-01 10:00:00,2
//! Bob,2024-01-01 10:00:40,1
//! ```

pub mod customer;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use customer::{Customer, Ticket};
pub use error::{RosterError, RosterResult};
pub use loader::{load_roster_csv, load_roster_reader};
