//! `epi-motion` — agent movement, boundary reflection, and contact detection.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`engine`]  | `MotionEngine<C>` — per-tick movement + contact pass            |
//! | [`contact`] | `ContactScanner` trait, `AllPairsScanner`, de-overlap step      |
//! | [`rtree`]   | `RTreeScanner` (feature = `"spatial-index"` only)               |
//!
//! # Movement model
//!
//! Each mobile agent takes one step per tick:
//!
//! 1. With probability `m` (the mobility factor) its velocity is jittered by
//!    up to `m · JITTER` per axis.
//! 2. Speed is capped at `0.2 + 1.8·m`.
//! 3. Position moves by `velocity · m` and bounces off the arena margins.
//!
//! Quarantined and dead agents are pinned: zero velocity, fixed position,
//! and no part in contact detection.
//!
//! # Contact model
//!
//! Pairs of mobile agents closer than [`CONTACT_DISTANCE`] are pushed apart
//! to at least that distance, inside the margins, and reported in scan order
//! (`i < j`, ascending).
//! Because every push moves agents, later pairs see the updated positions;
//! every [`ContactScanner`] must reproduce the all-pairs sequence exactly.

pub mod contact;
pub mod engine;

#[cfg(feature = "spatial-index")]
pub mod rtree;


pub use contact::{AllPairsScanner, CONTACT_DISTANCE, Contact, ContactScanner, separate};
pub use engine::{JITTER, MotionEngine, max_speed};

#[cfg(feature = "spatial-index")]
pub use rtree::RTreeScanner;
