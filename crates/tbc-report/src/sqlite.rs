//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the configured output directory with
//! two tables: `tickets` and `customer_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{CustomerSummaryRow, ReportResult, TicketRow};

/// Writes run reports to an SQLite database.
pub struct SqliteReportWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReportWriter {
    /// Open (or create) `report.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tickets (
                 customer        TEXT    NOT NULL,
                 ticket_id       INTEGER PRIMARY KEY,
                 counter         TEXT    NOT NULL,
                 issue_unix_secs INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS customer_summaries (
                 customer          TEXT    NOT NULL,
                 entered_unix_secs INTEGER NOT NULL,
                 tickets_issued    INTEGER NOT NULL,
                 total_wait_secs   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReportWriter {
    fn write_tickets(&mut self, rows: &[TicketRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO tickets (customer, ticket_id, counter, issue_unix_secs) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.customer,
                    row.ticket_id,
                    row.counter,
                    row.issue_unix_secs,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[CustomerSummaryRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO customer_summaries \
                 (customer, entered_unix_secs, tickets_issued, total_wait_secs) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.customer,
                    row.entered_unix_secs,
                    row.tickets_issued,
                    row.total_wait_secs,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
