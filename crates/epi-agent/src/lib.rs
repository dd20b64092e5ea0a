//! `epi-agent` — agent records and population storage for `rust_epi`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`agent`]   | `Agent` — one individual's epidemiological + kinematic state |
//! | [`store`]   | `AgentStore` — the id-indexed population                   |
//! | [`builder`] | `PopulationBuilder` — draws a fresh population             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Agent`.          |

pub mod agent;
pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::{INCUBATION_RANGE, INFECTION_RADIUS_RANGE, PopulationBuilder, RECOVERY_MULTIPLIER_RANGE};
pub use store::AgentStore;
