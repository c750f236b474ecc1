//! Run observer trait for progress reporting and event collection.
//!
//! The observer replaces process-wide logging: anything the center would
//! log is delivered through these hooks instead, so callers choose whether
//! events go to stdout, a report writer, or nowhere.

use tbc_roster::Ticket;

/// Callbacks invoked by [`BookingCenter::orchestrate`][crate::BookingCenter::orchestrate]
/// at key points in the pass loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — issuance printer
///
/// ```rust,ignore
/// struct IssuancePrinter;
///
/// impl CenterObserver for IssuancePrinter {
///     fn on_ticket_issued(&mut self, customer: &str, ticket: &Ticket) {
///         println!("{} issued {} for {customer}", ticket.issued_at_counter, ticket.ticket_id);
///     }
/// }
/// ```
pub trait CenterObserver {
    /// Called at the start of each pass over the roster (1-based).
    fn on_pass_start(&mut self, _pass: u64) {}

    /// Called for every issued ticket, before it is appended to the
    /// customer's history.
    fn on_ticket_issued(&mut self, _customer: &str, _ticket: &Ticket) {}

    /// Called when the drain rule frees an admission slot.
    /// `occupancy` is the counter's occupancy after the release.
    fn on_slot_freed(&mut self, _counter: &str, _occupancy: u32) {}

    /// Called once when the terminal condition is reached.
    fn on_run_end(&mut self, _passes: u64, _tickets_issued: u64) {}
}

/// A [`CenterObserver`] that does nothing.  Use when you need to call
/// `orchestrate` but don't want progress callbacks.
pub struct NoopObserver;

impl CenterObserver for NoopObserver {}
