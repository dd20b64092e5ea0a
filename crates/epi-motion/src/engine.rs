//! High-level motion engine: moves agents and collects contacts.

use epi_agent::Agent;
use epi_core::{Arena, SimRng, Vec2};

use crate::{AllPairsScanner, Contact, ContactScanner};

/// Per-axis velocity jitter, before scaling by the mobility factor.
pub const JITTER: f64 = 0.5;

/// Speed cap for mobility factor `m`.
#[inline]
pub fn max_speed(mobility_factor: f64) -> f64 {
    0.2 + 1.8 * mobility_factor
}

/// Wraps a [`ContactScanner`] and the per-tick contact buffer.
///
/// # Type parameter
///
/// `C` selects the contact algorithm at compile time.  The default is the
/// reference all-pairs scan; with the `spatial-index` feature
/// [`RTreeScanner`][crate::RTreeScanner] is a drop-in replacement.
pub struct MotionEngine<C: ContactScanner = AllPairsScanner> {
    /// The contact-detection algorithm.
    pub scanner: C,

    /// Contacts found by the last [`detect_contacts`](Self::detect_contacts)
    /// call, in scan order.  Reused between ticks.
    contacts: Vec<Contact>,
}

impl Default for MotionEngine<AllPairsScanner> {
    fn default() -> Self {
        Self::new(AllPairsScanner)
    }
}

impl<C: ContactScanner> MotionEngine<C> {
    pub fn new(scanner: C) -> Self {
        Self { scanner, contacts: Vec::new() }
    }

    /// Move every mobile agent one step, in id order.
    pub fn move_agents(&mut self, agents: &mut [Agent], arena: &Arena, mobility_factor: f64, rng: &mut SimRng) {
        for agent in agents.iter_mut() {
            step(agent, arena, mobility_factor, rng);
        }
    }

    /// Run the contact pass and return the contacts found, in scan order.
    ///
    /// The slice stays valid until the next call.
    pub fn detect_contacts(&mut self, agents: &mut [Agent], arena: &Arena, rng: &mut SimRng) -> &[Contact] {
        self.contacts.clear();
        self.scanner.scan(agents, arena, rng, &mut self.contacts);
        &self.contacts
    }

    /// Contacts from the most recent pass.
    pub fn last_contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

/// Advance one agent by one tick.  Pinned agents only get their velocity
/// re-zeroed.
pub fn step(agent: &mut Agent, arena: &Arena, mobility_factor: f64, rng: &mut SimRng) {
    if agent.status.is_immobile() {
        agent.immobilize();
        return;
    }

    let m = mobility_factor;
    if rng.chance(m) {
        let jitter = Vec2::new(rng.uniform() * 2.0 - 1.0, rng.uniform() * 2.0 - 1.0);
        agent.velocity += jitter * (m * JITTER);
    }
    agent.velocity = agent.velocity.clamp_length(max_speed(m));
    agent.position += agent.velocity * m;

    reflect(agent, arena);
}

/// Bounce off the arena margins: clamp inside and point the offending
/// velocity component back into the arena.
pub fn reflect(agent: &mut Agent, arena: &Arena) {
    let (pos, vel) = (&mut agent.position, &mut agent.velocity);

    if pos.x < arena.min_x() {
        pos.x = arena.min_x();
        vel.x = vel.x.abs();
    } else if pos.x > arena.max_x() {
        pos.x = arena.max_x();
        vel.x = -vel.x.abs();
    }

    if pos.y < arena.min_y() {
        pos.y = arena.min_y();
        vel.y = vel.y.abs();
    } else if pos.y > arena.max_y() {
        pos.y = arena.max_y();
        vel.y = -vel.y.abs();
    }
}
