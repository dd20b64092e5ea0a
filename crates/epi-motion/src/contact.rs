//! Contact detection and the de-overlap step.

use epi_agent::Agent;
use epi_core::{AgentId, Arena, SimRng, Vec2};

/// Two agents closer than this are in contact.
pub const CONTACT_DISTANCE: f64 = 10.0;

/// An unordered contact, stored in scan order (`first < second`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub first:  AgentId,
    pub second: AgentId,
}

/// Pluggable contact-detection algorithm.
///
/// Implementations walk the population, apply [`separate`] to every pair in
/// contact, and append those pairs to `out`.  The contract is strict: the
/// result (positions after the pass, the contact list, and the RNG draws
/// consumed) must equal what [`AllPairsScanner`] produces for the same
/// input.  Only the cost may differ.
pub trait ContactScanner {
    fn scan(&mut self, agents: &mut [Agent], arena: &Arena, rng: &mut SimRng, out: &mut Vec<Contact>);
}

/// The reference O(n²) scan: `for i { for j > i { … } }`.
#[derive(Copy, Clone, Debug, Default)]
pub struct AllPairsScanner;

impl ContactScanner for AllPairsScanner {
    fn scan(&mut self, agents: &mut [Agent], arena: &Arena, rng: &mut SimRng, out: &mut Vec<Contact>) {
        let n = agents.len();
        for i in 0..n {
            if agents[i].status.is_immobile() {
                continue;
            }
            for j in (i + 1)..n {
                if agents[j].status.is_immobile() {
                    continue;
                }
                let (left, right) = agents.split_at_mut(j);
                let (a, b) = (&mut left[i], &mut right[0]);
                if a.position.distance(b.position) < CONTACT_DISTANCE {
                    separate(a, b, arena, rng);
                    out.push(Contact { first: a.id, second: b.id });
                }
            }
        }
    }
}

/// Extra gap added on top of [`CONTACT_DISTANCE`] when separating, well
/// above the rounding error of arena-sized coordinates.
const SEPARATION_SLACK: f64 = 1e-9;

/// Place `a` and `b` on the line joining them, at least [`CONTACT_DISTANCE`]
/// apart, inside the arena margins.
///
/// The pair keeps its midpoint unless that would put one agent past a
/// margin; then the whole pair slides inward along that axis, so a wall or
/// corner never eats into the gap.
///
/// Coincident agents have no joining line; a random direction is drawn for
/// them (the only case in which this consumes randomness).
pub fn separate(a: &mut Agent, b: &mut Agent, arena: &Arena, rng: &mut SimRng) {
    let dir = match (b.position - a.position).normalized() {
        Some(d) => d,
        None => rng.unit_vector(),
    };
    let mid = (a.position + b.position) * 0.5;

    let mut gap = CONTACT_DISTANCE + SEPARATION_SLACK;
    for _ in 0..8 {
        let half = dir * (gap * 0.5);
        let centre = Vec2::new(
            fit_axis(mid.x, half.x.abs(), arena.min_x(), arena.max_x()),
            fit_axis(mid.y, half.y.abs(), arena.min_y(), arena.max_y()),
        );
        a.position = centre - half;
        b.position = centre + half;
        clamp_into(arena, a);
        clamp_into(arena, b);
        if a.position.distance(b.position) >= CONTACT_DISTANCE {
            return;
        }
        gap *= 2.0;
    }
}

/// Clamp a pair centre so `centre ± half` stays within `[lo, hi]`.  An axis
/// narrower than the pair centres it.
#[inline]
fn fit_axis(centre: f64, half: f64, lo: f64, hi: f64) -> f64 {
    let (min, max) = (lo + half, hi - half);
    if min > max { (lo + hi) * 0.5 } else { centre.clamp(min, max) }
}

#[inline]
fn clamp_into(arena: &Arena, agent: &mut Agent) {
    agent.position.x = agent.position.x.max(arena.min_x()).min(arena.max_x());
    agent.position.y = agent.position.y.max(arena.min_y()).min(arena.max_y());
}
