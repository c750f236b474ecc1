//! The `Counter` — one service point's processing timeline and admission
//! control.
//!
//! A counter owns two pieces of mutable state: the occupancy of its bounded
//! admission queue and a "previously issued time" cursor (the logical time
//! at which it next becomes free).  Queue-full handling is the
//! orchestrator's job; [`Counter::issue_ticket`] only verifies the
//! precondition defensively.

use tbc_core::{CounterId, SimTime, TicketId};
use tbc_roster::{Customer, Ticket};

use crate::{SimError, SimResult};

/// A ticket-issuing service point with a bounded admission queue.
#[derive(Clone, Debug)]
pub struct Counter {
    pub id: CounterId,
    /// Human-facing label stamped onto every issued ticket ("C1", "C2", …).
    pub label: String,
    capacity: u32,
    process_secs: u64,
    occupancy: u32,
    /// Cursor: issue time of the most recent ticket, `None` before the
    /// first issuance.  Non-decreasing across the counter's lifetime.
    last_issued: Option<SimTime>,
}

impl Counter {
    pub fn new(id: CounterId, label: impl Into<String>, capacity: u32, process_secs: u64) -> Self {
        Self {
            id,
            label: label.into(),
            capacity,
            process_secs,
            occupancy: 0,
            last_issued: None,
        }
    }

    /// Is the admission queue at capacity?  A full counter is ineligible
    /// for new assignments until a slot drains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupancy == self.capacity
    }

    /// Current admission-queue occupancy.
    #[inline]
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// The counter's cursor — when it next becomes free.
    #[inline]
    pub fn last_issued(&self) -> Option<SimTime> {
        self.last_issued
    }

    /// Issue one ticket to `customer`, admitting them into the queue.
    ///
    /// First-ever issuance amortizes the wait of everyone already queued:
    /// `arrival + occupancy × process_secs` (occupancy counted *after*
    /// admission).  Every later issuance starts no earlier than both the
    /// previous issue time and the customer's arrival:
    /// `max(cursor, arrival) + process_secs`.
    ///
    /// Errors with [`SimError::CapacityViolation`] if the queue is full;
    /// callers must check [`is_full`][Self::is_full] first.
    pub fn issue_ticket(&mut self, customer: &Customer, ticket_id: TicketId) -> SimResult<Ticket> {
        if self.is_full() {
            return Err(SimError::CapacityViolation {
                customer: customer.name.clone(),
                counter:  self.label.clone(),
            });
        }
        self.occupancy += 1;

        let issue_time = match self.last_issued {
            None => customer.entered_time + u64::from(self.occupancy) * self.process_secs,
            Some(cursor) => cursor.max(customer.entered_time) + self.process_secs,
        };
        self.last_issued = Some(issue_time);

        Ok(Ticket {
            ticket_id,
            issued_at_counter: self.label.clone(),
            issue_time,
        })
    }

    /// Free one admission slot (drain rule).  Saturating: a no-op on an
    /// empty queue.
    pub fn release_slot(&mut self) {
        self.occupancy = self.occupancy.saturating_sub(1);
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Counter {}", self.label)
    }
}
