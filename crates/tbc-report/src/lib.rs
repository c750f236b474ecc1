//! `tbc-report` — structured output for finished simulation runs.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                          |
//! |----------|---------|----------------------------------------|
//! | *(none)* | CSV     | `tickets.csv`, `customer_summaries.csv`|
//! | `sqlite` | SQLite  | `report.db`                            |
//!
//! Both backends implement [`ReportWriter`] and are fed rows built from a
//! finished roster by [`ticket_rows`] / [`summary_rows`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use tbc_report::{write_report, CsvReportWriter};
//!
//! let roster = center.orchestrate(roster, &mut NoopObserver)?;
//! let mut writer = CsvReportWriter::new(Path::new("./output"))?;
//! write_report(&roster, &mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use report::{summary_rows, ticket_rows, write_report};
pub use row::{CustomerSummaryRow, TicketRow};
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReportWriter;
