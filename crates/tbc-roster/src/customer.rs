//! `Customer` and `Ticket` — the records the simulation reads and produces.

use tbc_core::{SimTime, TicketId};

// ── Ticket ────────────────────────────────────────────────────────────────────

/// One issued ticket.  Immutable once created; counters stamp the label and
/// issue time at issuance and the record is never revised.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    /// Run-unique identifier, allocated monotonically by the booking center.
    pub ticket_id: TicketId,
    /// Label of the issuing counter ("C1", "C2", …).
    pub issued_at_counter: String,
    /// Logical time at which the ticket was handed over.
    pub issue_time: SimTime,
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// A customer waiting for tickets.
///
/// Constructed once before the run; the orchestration loop only ever appends
/// to `tickets`, so `tickets.len() <= number_of_tickets` holds throughout and
/// the customer is *satisfied* once equality is reached.  Satisfied customers
/// stay in the roster until the run ends.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub name: String,
    /// Logical time the customer entered the booking center.
    pub entered_time: SimTime,
    /// Ticket quota; must be at least 1.
    pub number_of_tickets: u32,
    /// Issued tickets in issuance order.  Grows monotonically, never shrinks.
    pub tickets: Vec<Ticket>,
}

impl Customer {
    /// Create a customer with a fresh, empty ticket list.
    pub fn new(name: impl Into<String>, entered_time: SimTime, number_of_tickets: u32) -> Self {
        Self {
            name: name.into(),
            entered_time,
            number_of_tickets,
            tickets: Vec::with_capacity(number_of_tickets as usize),
        }
    }

    /// Does this customer hold their full quota?
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.tickets.len() as u32 == self.number_of_tickets
    }

    /// Tickets still owed to this customer.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.number_of_tickets - self.tickets.len() as u32
    }

    /// Total seconds spent in the center: last issue time minus entry time.
    ///
    /// `None` until at least one ticket has been issued.
    pub fn total_wait_secs(&self) -> Option<i64> {
        self.tickets.last().map(|t| t.issue_time - self.entered_time)
    }
}
