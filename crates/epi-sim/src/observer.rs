//! Simulation observer trait for progress reporting and data collection.

use epi_disease::{Transition, TransmissionEvent};

use crate::Snapshot;

/// Callbacks invoked by the `*_observed` methods on [`Sim`][crate::Sim].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Per-agent hooks fire after the tick's
/// phases have all run, in the order the events happened.
///
/// # Example — death counter
///
/// ```rust,ignore
/// struct Deaths(usize);
///
/// impl SimObserver for Deaths {
///     fn on_transition(&mut self, t: &Transition) {
///         if t.to == HealthStatus::Dead {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once a fresh population is in place (clock 0).
    fn on_initialized(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called for every state-machine transition applied this tick.
    fn on_transition(&mut self, _transition: &Transition) {}

    /// Called for every successful transmission this tick.
    fn on_transmission(&mut self, _event: &TransmissionEvent) {}

    /// Called at the end of each tick with the recomputed statistics.
    fn on_tick_end(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
