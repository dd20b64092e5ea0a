//! `epi-disease` — the epidemiological rules applied to agents each tick.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                    |
//! |------------------|-------------------------------------------------------------|
//! | [`context`]      | `DiseaseContext<'a>` — read-only per-tick inputs            |
//! | [`progression`]  | State machine, recovery-duration rescaling, `Transition`    |
//! | [`transmission`] | Transmission sampler, `TransmissionEvent`                   |
//! | [`outcome`]      | Outcome sampler (recovery vs. death), mortality tables      |
//!
//! # Design notes
//!
//! Every rule is a plain function over `&mut Agent` plus the run's single
//! [`SimRng`][epi_core::SimRng].  Age-dependent branches are `match`es on
//! [`AgeGroup`][epi_core::AgeGroup].  The caller (epi-sim) decides the order
//! agents are visited in, which keeps each rule independently testable.

pub mod context;
pub mod outcome;
pub mod progression;
pub mod transmission;


pub use context::DiseaseContext;
pub use outcome::{Outcome, OVER_CAPACITY_MULTIPLIER, base_mortality, mortality, resolve_outcome};
pub use progression::{
    ASSUMED_BASE_RECOVERY_DURATION, ASYMPTOMATIC_SHARE, Transition, progress, rescale_recovery_duration,
};
pub use transmission::{
    ASYMPTOMATIC_FACTOR, MASK_FACTOR, TransmissionEvent, attempt_transmission, transmission_probability,
    transmit_pair,
};
