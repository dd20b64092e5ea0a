//! `epi-stats` — per-tick aggregates over the population.
//!
//! # Crate layout
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`counts`]       | `StatusCounts` — agents per `HealthStatus`             |
//! | [`reproduction`] | R₀ / Rₜ estimators                                     |
//!
//! Everything here is recomputed from scratch each tick from the agent
//! slice; nothing is cached between ticks.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `StatusCounts::tally` folds over the slice with Rayon.    |

pub mod counts;
pub mod reproduction;

#[cfg(test)]
mod tests;

pub use counts::StatusCounts;
pub use reproduction::{TickStats, r0, rt};
