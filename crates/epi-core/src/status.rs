//! Epidemiological status and demographic enums shared by every crate.

use std::fmt;

/// Where an agent currently sits in the disease progression.
///
/// Transitions only run forward along
/// `Healthy → Exposed → Infectious* → (Quarantined) → Recovered | Dead`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthStatus {
    #[default]
    Healthy,
    Exposed,
    InfectiousSymptomatic,
    InfectiousAsymptomatic,
    Quarantined,
    Recovered,
    Dead,
}

impl HealthStatus {
    /// Every status, in progression order.  Index with [`HealthStatus::ordinal`].
    pub const ALL: [HealthStatus; 7] = [
        HealthStatus::Healthy,
        HealthStatus::Exposed,
        HealthStatus::InfectiousSymptomatic,
        HealthStatus::InfectiousAsymptomatic,
        HealthStatus::Quarantined,
        HealthStatus::Recovered,
        HealthStatus::Dead,
    ];

    /// Position of this status in [`HealthStatus::ALL`].
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Able to transmit (quarantined agents are infected but isolated).
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(self, HealthStatus::InfectiousSymptomatic | HealthStatus::InfectiousAsymptomatic)
    }

    /// Somewhere in the infectious chain and still waiting for an outcome.
    #[inline]
    pub fn awaits_outcome(self) -> bool {
        self.is_infectious() || self == HealthStatus::Quarantined
    }

    /// Pinned in place: never moves and never takes part in contacts.
    #[inline]
    pub fn is_immobile(self) -> bool {
        matches!(self, HealthStatus::Quarantined | HealthStatus::Dead)
    }

    /// The infectious episode has ended, one way or the other.
    #[inline]
    pub fn has_concluded(self) -> bool {
        matches!(self, HealthStatus::Recovered | HealthStatus::Dead)
    }

    /// Label used in logs and series column headers.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy                => "healthy",
            HealthStatus::Exposed                => "exposed",
            HealthStatus::InfectiousSymptomatic  => "infectious_symptomatic",
            HealthStatus::InfectiousAsymptomatic => "infectious_asymptomatic",
            HealthStatus::Quarantined            => "quarantined",
            HealthStatus::Recovered              => "recovered",
            HealthStatus::Dead                   => "dead",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Demographic bracket, fixed at creation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgeGroup {
    Child,
    #[default]
    Adult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Child, AgeGroup::Adult, AgeGroup::Senior];

    /// Population share of each group, aligned with [`AgeGroup::ALL`].
    pub const SHARES: [f64; 3] = [0.25, 0.55, 0.20];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child  => "child",
            AgeGroup::Adult  => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
