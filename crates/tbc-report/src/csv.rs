//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `tickets.csv`
//! - `customer_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{CustomerSummaryRow, ReportResult, TicketRow};

/// Writes run reports to two CSV files.
pub struct CsvReportWriter {
    tickets:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut tickets = Writer::from_path(dir.join("tickets.csv"))?;
        tickets.write_record(["customer", "ticket_id", "counter", "issue_unix_secs"])?;

        let mut summaries = Writer::from_path(dir.join("customer_summaries.csv"))?;
        summaries.write_record([
            "customer",
            "entered_unix_secs",
            "tickets_issued",
            "total_wait_secs",
        ])?;

        Ok(Self {
            tickets,
            summaries,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_tickets(&mut self, rows: &[TicketRow]) -> ReportResult<()> {
        for row in rows {
            self.tickets.write_record(&[
                row.customer.clone(),
                row.ticket_id.to_string(),
                row.counter.clone(),
                row.issue_unix_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[CustomerSummaryRow]) -> ReportResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.customer.clone(),
                row.entered_unix_secs.to_string(),
                row.tickets_issued.to_string(),
                row.total_wait_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.tickets.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
