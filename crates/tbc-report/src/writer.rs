//! The `ReportWriter` trait implemented by all backend writers.

use crate::{CustomerSummaryRow, ReportResult, TicketRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait ReportWriter {
    /// Write a batch of ticket rows.
    fn write_tickets(&mut self, rows: &[TicketRow]) -> ReportResult<()>;

    /// Write a batch of per-customer summary rows.
    fn write_summaries(&mut self, rows: &[CustomerSummaryRow]) -> ReportResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
