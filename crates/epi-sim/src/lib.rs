//! `epi-sim` — tick orchestrator for the rust_epi outbreak simulator.
//!
//! # Tick pass
//!
//! ```text
//! advance(dt):
//!   ① Clock        — now += dt (the updated clock is used by every stage).
//!   ② Motion       — jitter, cap, step and reflect every mobile agent.
//!   ③ Progression  — at most one state-machine transition per agent.
//!   ④ Contacts     — all-pairs scan (i < j) with de-overlap pushes.
//!   ⑤ Transmission — for each contact in scan order: i → j, then j → i.
//!   ⑥ Statistics   — status counts, R₀, Rₜ recomputed from scratch.
//! ```
//!
//! Every stage draws from the simulation's single [`SimRng`][epi_core::SimRng]
//! in this fixed order, so a seed plus a sequence of `advance` calls fully
//! determines the run.
//!
//! # Cargo features
//!
//! | Feature         | Effect                                                   |
//! |-----------------|----------------------------------------------------------|
//! | `parallel`      | Status tallies on Rayon's thread pool.                   |
//! | `spatial-index` | Enables `RTreeScanner` for `SimBuilder::scanner`.         |
//! | `serde`         | Serde derives on config, agents and events.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::EpidemicConfig;
//! use epi_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(EpidemicConfig::default()).seed(42).build();
//! for _ in 0..600 {
//!     sim.advance_frames(1.0);
//! }
//! println!("{}", sim.snapshot().counts);
//! ```

pub mod builder;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use epi_disease::{Transition, TransmissionEvent};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{ConfigUpdate, Sim};
pub use snapshot::Snapshot;
