//! Id newtypes and the mission/location input records.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enums::{SituationalTrigger, Skill};

/// Identifier for one agent. Assigned by the caller, stable for the
/// agent's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AgentId(pub u32);

/// Identifier for one mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub u32);

/// Identifier for the faction running the mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionId(pub u32);

/// A mission definition as handed to the executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub codename: String,
    pub faction: FactionId,
    /// The objective the execution phase resolves.
    pub primary_objective: String,
    /// Completed in order by surplus execution successes.
    pub secondary_objectives: Vec<String>,
    /// Skills the execution-phase check draws from.
    pub required_skills: BTreeSet<Skill>,
    /// Heat already on the cell before the mission starts.
    pub exposure: u32,
    /// Recent faction win/loss streak, -1.0 (losing) to 1.0 (winning).
    pub momentum: f64,
    /// Quality of pre-mission intelligence, 0.0 to 1.0.
    pub intel_quality: f64,
    /// Resources granted when the primary objective completes.
    pub resource_yield: BTreeMap<String, i64>,
}

/// A mission site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    /// 0 (unguarded) to 10 (fortress).
    pub security_level: u8,
    /// Conditions at the site that can trip traumatic memories.
    pub environment: Vec<SituationalTrigger>,
}
