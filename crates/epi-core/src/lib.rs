//! `epi-core` — foundational types for the `rust_epi` outbreak simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2` — positions and velocities in the arena        |
//! | [`time`]        | `SimTime`, `SimClock`, `FRAME_MILLIS`                 |
//! | [`rng`]         | `SimRng` — the single uniform source of a run         |
//! | [`status`]      | `HealthStatus`, `AgeGroup`                            |
//! | [`config`]      | `EpidemicConfig`, `Arena`, `Extensions`               |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Arena, EpidemicConfig, Extensions};
pub use error::{EpiError, EpiResult};
pub use geo::Vec2;
pub use ids::AgentId;
pub use rng::SimRng;
pub use status::{AgeGroup, HealthStatus};
pub use time::{FRAME_MILLIS, SimClock, SimTime};
