//! Population storage: `AgentStore`.

use epi_core::{AgentId, HealthStatus};

use crate::Agent;

/// All agents of one simulation, indexed by `AgentId`.
///
/// `agents[i].id == AgentId(i)` always holds; the population size never
/// changes after construction.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    pub agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new(agents: Vec<Agent>) -> Self {
        debug_assert!(agents.iter().enumerate().all(|(i, a)| a.id.index() == i));
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Disjoint mutable references to two distinct agents, in argument order.
    ///
    /// Returns `None` if `a == b` or either id is out of range.
    pub fn pair_mut(&mut self, a: AgentId, b: AgentId) -> Option<(&mut Agent, &mut Agent)> {
        let (i, j) = (a.index(), b.index());
        if i == j || i >= self.agents.len() || j >= self.agents.len() {
            return None;
        }
        if i < j {
            let (left, right) = self.agents.split_at_mut(j);
            Some((&mut left[i], &mut right[0]))
        } else {
            let (left, right) = self.agents.split_at_mut(i);
            Some((&mut right[0], &mut left[j]))
        }
    }

    /// Number of agents currently in `status`.
    pub fn count_status(&self, status: HealthStatus) -> usize {
        self.agents.iter().filter(|a| a.status == status).count()
    }
}
