//! Row builders: finished roster → flat report rows.

use tbc_roster::Customer;

use crate::writer::ReportWriter;
use crate::{CustomerSummaryRow, ReportResult, TicketRow};

/// Flatten every issued ticket in roster order.
pub fn ticket_rows(roster: &[Customer]) -> Vec<TicketRow> {
    roster
        .iter()
        .flat_map(|c| {
            c.tickets.iter().map(|t| TicketRow {
                customer:        c.name.clone(),
                ticket_id:       t.ticket_id.0,
                counter:         t.issued_at_counter.clone(),
                issue_unix_secs: t.issue_time.unix_secs(),
            })
        })
        .collect()
}

/// One summary row per customer.
///
/// A customer with no tickets (possible only if the run was aborted) gets a
/// zero wait rather than being dropped, so row counts always match the
/// roster.
pub fn summary_rows(roster: &[Customer]) -> Vec<CustomerSummaryRow> {
    roster
        .iter()
        .map(|c| CustomerSummaryRow {
            customer:          c.name.clone(),
            entered_unix_secs: c.entered_time.unix_secs(),
            tickets_issued:    c.tickets.len() as u32,
            total_wait_secs:   c.total_wait_secs().unwrap_or(0),
        })
        .collect()
}

/// Build both row sets from `roster` and drive `writer` to completion.
pub fn write_report<W: ReportWriter>(roster: &[Customer], writer: &mut W) -> ReportResult<()> {
    writer.write_tickets(&ticket_rows(roster))?;
    writer.write_summaries(&summary_rows(roster))?;
    writer.finish()
}
