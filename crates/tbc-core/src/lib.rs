//! `tbc-core` — foundational types for the `tbc` booking-center simulator.
//!
//! This crate is a dependency of every other `tbc-*` crate.  It intentionally
//! has no `tbc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`ids`]     | `CounterId`, `TicketId`                    |
//! | [`time`]    | `SimTime` — logical Unix-second timestamps |
//! | [`error`]   | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{CounterId, TicketId};
pub use time::SimTime;
