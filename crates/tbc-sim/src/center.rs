//! The `BookingCenter` and its pass loop.

use tbc_core::TicketId;
use tbc_roster::Customer;

use crate::counter::Counter;
use crate::observer::CenterObserver;
use crate::{CenterConfig, SimError, SimResult};

/// The orchestration engine: a pool of counters driven over a customer
/// roster until every customer holds their full ticket quota.
///
/// `BookingCenter` owns the counters for the whole run; the roster is moved
/// into [`orchestrate`][Self::orchestrate] and handed back once the terminal
/// condition is reached.  Create via [`CenterBuilder`][crate::CenterBuilder].
#[derive(Debug)]
pub struct BookingCenter {
    pub(crate) config: CenterConfig,
    pub(crate) counters: Vec<Counter>,
    /// Next ticket ID to allocate.  Monotonic across the whole run, so IDs
    /// are unique regardless of which counter issues them.
    pub(crate) next_ticket_id: u64,
}

impl BookingCenter {
    /// Read-only view of the counter pool (fixed selection order).
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn config(&self) -> &CenterConfig {
        &self.config
    }

    /// Drive the simulation to completion.
    ///
    /// Repeats passes over the roster until every customer is satisfied,
    /// then returns the roster with each customer's ticket history filled
    /// in.  Per pass, each unsatisfied customer receives at most one ticket
    /// from the first counter whose queue has room.
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] — empty roster or a zero ticket quota,
    ///   rejected before the first pass.
    /// - [`SimError::Stalled`] — a full pass issued nothing while tickets
    ///   were still owed (every queue full and the drain rule never firing),
    ///   or `config.max_passes` was exceeded.  Issuance is the only state
    ///   change, so a zero-progress pass proves the run can never converge.
    /// - [`SimError::CapacityViolation`] — internal invariant breach;
    ///   aborts the run.
    pub fn orchestrate<O: CenterObserver>(
        &mut self,
        mut roster: Vec<Customer>,
        observer: &mut O,
    ) -> SimResult<Vec<Customer>> {
        if roster.is_empty() {
            return Err(SimError::Config("customer roster is empty".into()));
        }
        if let Some(c) = roster.iter().find(|c| c.number_of_tickets == 0) {
            return Err(SimError::Config(format!(
                "customer {} has a zero ticket quota",
                c.name
            )));
        }

        let max_passes = self.config.max_passes;
        let mut pass: u64 = 0;
        let mut tickets_issued: u64 = 0;

        loop {
            // Terminal condition, checked before each full pass.
            if roster.iter().all(Customer::is_satisfied) {
                observer.on_run_end(pass, tickets_issued);
                return Ok(roster);
            }

            if let Some(cap) = max_passes {
                if pass >= cap {
                    return Err(self.stalled(pass, &roster));
                }
            }

            pass += 1;
            observer.on_pass_start(pass);

            let issued_before = tickets_issued;
            self.run_pass(&mut roster, &mut tickets_issued, observer)?;

            // With a well-formed configuration every pass issues at least
            // one ticket, bounding the loop by the summed quotas.  A pass
            // with no issuance leaves all state untouched — stalled.
            if tickets_issued == issued_before {
                return Err(self.stalled(pass, &roster));
            }
        }
    }

    /// One pass: serve each unsatisfied customer from the first eligible
    /// counter, then apply the drain rule.
    fn run_pass<O: CenterObserver>(
        &mut self,
        roster: &mut [Customer],
        tickets_issued: &mut u64,
        observer: &mut O,
    ) -> SimResult<()> {
        // Field borrows kept disjoint so the counter scan can allocate IDs.
        let counters = &mut self.counters;
        let next_ticket_id = &mut self.next_ticket_id;

        for idx in 0..roster.len() {
            if roster[idx].is_satisfied() {
                continue;
            }

            // Drain-rule reference point: the previous customer by roster
            // position; the first customer wraps around to the last.
            let prev_idx = if idx == 0 { roster.len() - 1 } else { idx - 1 };
            let prev_arrival = roster[prev_idx].entered_time;

            for counter in counters.iter_mut() {
                if counter.is_full() {
                    continue;
                }

                let ticket_id = TicketId(*next_ticket_id);
                let ticket = counter.issue_ticket(&roster[idx], ticket_id)?;
                *next_ticket_id += 1;
                *tickets_issued += 1;

                observer.on_ticket_issued(&roster[idx].name, &ticket);
                roster[idx].tickets.push(ticket);

                // Drain rule: the cursor overtaking an earlier arrival is
                // taken as evidence that someone queued ahead has been
                // served, freeing one admission slot.
                if counter.last_issued().is_some_and(|cursor| cursor < prev_arrival) {
                    counter.release_slot();
                    observer.on_slot_freed(&counter.label, counter.occupancy());
                }

                break;
            }
        }
        Ok(())
    }

    fn stalled(&self, pass: u64, roster: &[Customer]) -> SimError {
        let pending = roster.iter().filter(|c| !c.is_satisfied()).count();
        SimError::Stalled { pass, pending }
    }
}
