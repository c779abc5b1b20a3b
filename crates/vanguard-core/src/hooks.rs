//! Collaborator contracts the engine consumes.
//!
//! The relationship model, legal system, intelligence database, and
//! equipment system are owned elsewhere; the engine only sees these traits
//! and data records. Simple in-memory implementations are provided for
//! tests and headless playtest loops.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, EmotionalImpact};
use crate::enums::{CrimeCategory, IntelEventKind, RelationshipEvent, Skill};
use crate::error::HookError;
use crate::types::{AgentId, FactionId, Location, Mission};

/// Directional relationship metrics from one agent toward another.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Relationship {
    /// Overall bond, -1..1.
    pub strength: f64,
    /// Willingness to rely on the other, -1..1. Directional.
    pub trust: f64,
    /// Resistance to abandoning the other, 0..1.
    pub loyalty: f64,
}

/// Read/broadcast access to the relationship model.
pub trait RelationshipSource {
    /// The directional relationship `from` holds toward `toward`, if any
    /// has formed.
    fn relationship(
        &self,
        from: AgentId,
        toward: AgentId,
    ) -> Result<Option<Relationship>, HookError>;

    /// Broadcast an event to every ordered pairing within `agents`.
    fn apply_group_event(
        &mut self,
        agents: &[AgentId],
        event: RelationshipEvent,
        intensity: f64,
        details: &str,
    ) -> Result<(), HookError>;
}

/// Crime recording during extraction capture handling.
pub trait CrimeLedger {
    /// Record a capture and return the charges filed.
    fn record_capture(
        &mut self,
        agent: &Agent,
        mission: &Mission,
        location: &Location,
    ) -> Result<Vec<CrimeCategory>, HookError>;
}

/// A typed event for the intelligence database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelEvent {
    pub faction: FactionId,
    pub kind: IntelEventKind,
    /// 0..1, how hard the government response lands.
    pub severity: f64,
    pub note: String,
}

/// Append-only intelligence event log.
pub trait IntelSink {
    fn record(&mut self, event: IntelEvent) -> Result<(), HookError>;
}

/// What the equipment system supplies for one mission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loadout {
    /// Flat success modifier folded into every skill check.
    pub mission_modifier: f64,
    /// Additional modifier when the check uses the keyed skill.
    pub skill_bonuses: BTreeMap<Skill, f64>,
    /// Applied to every agent at mission start (confidence from good gear,
    /// dread from bad).
    pub emotional_effects: EmotionalImpact,
    /// Post-mission degradation records, narrative flavor only.
    pub wear_notes: Vec<String>,
}

impl Loadout {
    /// Combined equipment modifier for a check using `skill`.
    pub fn check_bonus(&self, skill: Skill) -> f64 {
        self.mission_modifier + self.skill_bonuses.get(&skill).copied().unwrap_or(0.0)
    }
}

// --- In-memory implementations ---

/// Relationship table backed by a map of ordered pairs. Group events are
/// kept as a log; the full relationship model applies its own update
/// formulas outside this workspace.
#[derive(Debug, Clone, Default)]
pub struct RelationshipTable {
    pairs: BTreeMap<(AgentId, AgentId), Relationship>,
    pub events: Vec<(Vec<AgentId>, RelationshipEvent, f64, String)>,
}

impl RelationshipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directional relationship `from` → `toward`.
    pub fn set(&mut self, from: AgentId, toward: AgentId, rel: Relationship) {
        self.pairs.insert((from, toward), rel);
    }

    /// Set both directions to the same metrics.
    pub fn set_mutual(&mut self, a: AgentId, b: AgentId, rel: Relationship) {
        self.pairs.insert((a, b), rel);
        self.pairs.insert((b, a), rel);
    }
}

impl RelationshipSource for RelationshipTable {
    fn relationship(
        &self,
        from: AgentId,
        toward: AgentId,
    ) -> Result<Option<Relationship>, HookError> {
        Ok(self.pairs.get(&(from, toward)).copied())
    }

    fn apply_group_event(
        &mut self,
        agents: &[AgentId],
        event: RelationshipEvent,
        intensity: f64,
        details: &str,
    ) -> Result<(), HookError> {
        self.events
            .push((agents.to_vec(), event, intensity, details.to_string()));
        Ok(())
    }
}

/// Charge set keyed on site security. A capture at a hardened site draws
/// heavier charges.
#[derive(Debug, Clone, Default)]
pub struct StandardCharges {
    pub captures: Vec<(AgentId, Vec<CrimeCategory>)>,
}

impl CrimeLedger for StandardCharges {
    fn record_capture(
        &mut self,
        agent: &Agent,
        _mission: &Mission,
        location: &Location,
    ) -> Result<Vec<CrimeCategory>, HookError> {
        let mut charges = vec![CrimeCategory::Trespassing, CrimeCategory::Sedition];
        if location.security_level >= 5 {
            charges.push(CrimeCategory::Sabotage);
        }
        if location.security_level >= 8 {
            charges.push(CrimeCategory::Terrorism);
        }
        self.captures.push((agent.id, charges.clone()));
        Ok(charges)
    }
}

/// Vec-backed intelligence log.
#[derive(Debug, Clone, Default)]
pub struct IntelLog {
    pub events: Vec<IntelEvent>,
}

impl IntelSink for IntelLog {
    fn record(&mut self, event: IntelEvent) -> Result<(), HookError> {
        self.events.push(event);
        Ok(())
    }
}
