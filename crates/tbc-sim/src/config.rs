//! Booking-center configuration.

use crate::{SimError, SimResult};

/// Top-level configuration for a [`BookingCenter`][crate::BookingCenter].
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to [`CenterBuilder`][crate::CenterBuilder].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterConfig {
    /// Number of counters in the pool.  Must be at least 1.
    pub counters: u32,

    /// Admission-queue capacity per counter.  Must be at least 1.
    pub queue_capacity: u32,

    /// Seconds a counter spends processing one ticket.  Zero is allowed
    /// (instantaneous counters are a valid degenerate model).
    pub ticket_process_secs: u64,

    /// Hard cap on roster passes.  `None` relies on zero-progress stall
    /// detection alone; set this as an extra deadline when driving the
    /// simulator from untrusted configuration.
    pub max_passes: Option<u64>,
}

impl CenterConfig {
    /// Check the fail-fast constraints from the error taxonomy: zero
    /// counters or zero capacity can never serve anyone.
    pub fn validate(&self) -> SimResult<()> {
        if self.counters == 0 {
            return Err(SimError::Config("at least one counter is required".into()));
        }
        if self.queue_capacity == 0 {
            return Err(SimError::Config(
                "queue capacity must be at least 1".into(),
            ));
        }
        if self.max_passes == Some(0) {
            return Err(SimError::Config("max_passes must be at least 1".into()));
        }
        Ok(())
    }
}
