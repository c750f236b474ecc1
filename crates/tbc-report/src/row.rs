//! Plain data row types written by report backends.

/// One issued ticket, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    pub customer:  String,
    pub ticket_id: u64,
    pub counter:   String,
    /// Issue timestamp as Unix seconds.
    pub issue_unix_secs: i64,
}

/// Per-customer totals for one run, equivalent to the demo's console
/// summary line ("total time consumed by …").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummaryRow {
    pub customer: String,
    /// Entry timestamp as Unix seconds.
    pub entered_unix_secs: i64,
    pub tickets_issued: u32,
    /// Last issue time minus entry time.
    pub total_wait_secs: i64,
}
