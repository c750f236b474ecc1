use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("center configuration error: {0}")]
    Config(String),

    /// Defensive invariant breach: a ticket was requested from a counter
    /// whose queue is already at capacity.  The orchestrator checks
    /// eligibility before issuing, so this indicates a logic bug, not a
    /// recoverable condition.
    #[error("capacity violation: counter {counter} is full but was asked to serve {customer}")]
    CapacityViolation { customer: String, counter: String },

    /// A full pass over the roster issued no ticket while customers were
    /// still owed tickets.  Counter state only changes on issuance, so the
    /// configuration can never converge.
    #[error("simulation stalled at pass {pass}: {pending} customer(s) still owed tickets")]
    Stalled { pass: u64, pending: usize },
}

pub type SimResult<T> = Result<T, SimError>;
