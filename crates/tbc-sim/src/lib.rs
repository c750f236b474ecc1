//! `tbc-sim` — orchestration engine for the tbc booking-center simulator.
//!
//! # Pass loop
//!
//! ```text
//! until every customer is satisfied:
//!   ① Scan    — customers in roster order; skip the satisfied.
//!   ② Select  — counters in pool order; skip full queues.
//!   ③ Issue   — first eligible counter stamps a ticket
//!               (first issuance: arrival + occupancy × process time;
//!                later: max(cursor, arrival) + process time).
//!   ④ Drain   — if the counter's cursor now precedes the previous
//!               customer's arrival, one queue slot is freed.
//! ```
//!
//! A pass that issues no ticket while customers are still owed tickets can
//! never make progress later (the loop is the only thing that mutates
//! counter state), so it aborts the run with [`SimError::Stalled`] instead
//! of spinning forever.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tbc_sim::{CenterBuilder, CenterConfig, NoopObserver};
//!
//! let mut center = CenterBuilder::new(CenterConfig {
//!     counters:            2,
//!     queue_capacity:      4,
//!     ticket_process_secs: 30,
//!     max_passes:          None,
//! })
//! .build()?;
//! let roster = center.orchestrate(roster, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod center;
pub mod config;
pub mod counter;
pub mod error;
pub mod observer;


pub use builder::CenterBuilder;
pub use center::BookingCenter;
pub use config::CenterConfig;
pub use counter::Counter;
pub use error::{SimError, SimResult};
pub use observer::{CenterObserver, NoopObserver};
