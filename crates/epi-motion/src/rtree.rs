//! R-tree backed contact scan.
//!
//! # Equivalence with the all-pairs scan
//!
//! In the all-pairs scan only pairs in contact have any effect; all other
//! pairs are skipped silently.  So for agent `i` the next pair that matters
//! is always "the smallest `j` above the last one handled whose *current*
//! distance to `i` is below [`CONTACT_DISTANCE`]".  This scanner asks the
//! tree exactly that question after every push, keeping the tree in sync
//! with each position change, and therefore visits the same pairs in the same
//! order with the same positions.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use epi_agent::Agent;
use epi_core::{AgentId, Arena, SimRng};

use crate::{CONTACT_DISTANCE, Contact, ContactScanner, separate};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: an agent's `[x, y]` position and index.
#[derive(Clone, Debug, PartialEq)]
struct AgentEntry {
    point: [f64; 2],
    index: usize,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RTreeScanner ──────────────────────────────────────────────────────────────

/// Sub-quadratic [`ContactScanner`] for large, sparse populations.
#[derive(Default)]
pub struct RTreeScanner {
    tree: RTree<AgentEntry>,
    /// Point each agent is currently filed under; `None` for pinned agents.
    filed: Vec<Option<[f64; 2]>>,
}

impl RTreeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    fn rebuild(&mut self, agents: &[Agent]) {
        self.filed.clear();
        let mut entries = Vec::with_capacity(agents.len());
        for (index, agent) in agents.iter().enumerate() {
            if agent.status.is_immobile() {
                self.filed.push(None);
            } else {
                let point = [agent.position.x, agent.position.y];
                self.filed.push(Some(point));
                entries.push(AgentEntry { point, index });
            }
        }
        self.tree = RTree::bulk_load(entries);
    }

    /// Re-file `index` under its current position.
    fn refile(&mut self, index: usize, agent: &Agent) {
        if let Some(old) = self.filed[index] {
            self.tree.remove(&AgentEntry { point: old, index });
        }
        let point = [agent.position.x, agent.position.y];
        self.filed[index] = Some(point);
        self.tree.insert(AgentEntry { point, index });
    }

    /// Smallest mobile index above `after` currently in contact with `i`.
    fn next_partner(&self, agents: &[Agent], i: usize, after: usize) -> Option<usize> {
        let origin = agents[i].position;
        let query = [origin.x, origin.y];
        self.tree
            .locate_within_distance(query, CONTACT_DISTANCE * CONTACT_DISTANCE)
            .filter(|e| e.index > after)
            .filter(|e| origin.distance(agents[e.index].position) < CONTACT_DISTANCE)
            .map(|e| e.index)
            .min()
    }
}

impl ContactScanner for RTreeScanner {
    fn scan(&mut self, agents: &mut [Agent], arena: &Arena, rng: &mut SimRng, out: &mut Vec<Contact>) {
        self.rebuild(agents);

        for i in 0..agents.len() {
            if self.filed[i].is_none() {
                continue;
            }
            let mut cursor = i;
            while let Some(j) = self.next_partner(agents, i, cursor) {
                let (left, right) = agents.split_at_mut(j);
                let (a, b) = (&mut left[i], &mut right[0]);
                separate(a, b, arena, rng);
                out.push(Contact { first: AgentId(i as u32), second: AgentId(j as u32) });

                self.refile(i, &agents[i]);
                self.refile(j, &agents[j]);
                cursor = j;
            }
        }
    }
}
