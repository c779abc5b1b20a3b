//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The five mission phases, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MissionPhase {
    Planning,
    Infiltration,
    Execution,
    Extraction,
    Aftermath,
}

impl MissionPhase {
    /// Canonical phase ordering. Linear, no cycles, no skips.
    pub const SEQUENCE: [MissionPhase; 5] = [
        MissionPhase::Planning,
        MissionPhase::Infiltration,
        MissionPhase::Execution,
        MissionPhase::Extraction,
        MissionPhase::Aftermath,
    ];
}

/// What kind of act a single mission action was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Stealth,
    Combat,
    Hacking,
    Social,
    Sabotage,
    Reconnaissance,
    Escape,
    Support,
    Leadership,
}

/// A trainable operative skill, 0-10 per agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Combat,
    Stealth,
    Hacking,
    Social,
    Technical,
    Demolitions,
}

impl Skill {
    /// The action type a check against this skill is logged as.
    pub fn action_type(self) -> ActionType {
        match self {
            Skill::Combat => ActionType::Combat,
            Skill::Stealth => ActionType::Stealth,
            Skill::Hacking => ActionType::Hacking,
            Skill::Social => ActionType::Social,
            Skill::Technical => ActionType::Support,
            Skill::Demolitions => ActionType::Sabotage,
        }
    }
}

/// Severity of an unplanned mid-mission event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplicationSeverity {
    Minor,
    Moderate,
    Major,
    Catastrophic,
}

/// Final categorical result of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionOutcome {
    CriticalSuccess,
    Success,
    PartialSuccess,
    Failure,
    Disaster,
    /// Set when a phase handler or the cascade detector signals abort.
    /// Never recomputed by the outcome table.
    Aborted,
}

/// Dramatic character of a finished mission, drives narrative generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionalTone {
    TriumphantVictory,
    HeroicSacrifice,
    PyrrhicVictory,
    BetrayalTragedy,
    FearfulRetreat,
    TragicLoss,
    DefiantStruggle,
    NarrowEscape,
    CrushingDefeat,
    AmbiguousOutcome,
}

/// Fixed personality trait set. Each agent carries a primary and a
/// secondary trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityTrait {
    Leader,
    Methodical,
    Reckless,
    Loyal,
    Opportunistic,
    Cautious,
    Compassionate,
    Stoic,
}

/// Event kinds broadcast through the relationship collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipEvent {
    Betrayal,
    MissionSuccess,
    MissionFailure,
    SharedTrauma,
}

/// Why a betrayer turned. Chosen by fixed priority, recorded structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetrayalReason {
    OverwhelmingFear,
    IdeologicalDifferences,
    PersonalVendetta,
    SelfPreservation,
}

/// Site conditions that can trip an agent's traumatic memories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SituationalTrigger {
    Crowds,
    Darkness,
    Confinement,
    Gunfire,
    Uniforms,
    Sirens,
}

/// What kind of event produced a traumatic memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraumaKind {
    WitnessedDeath,
    Capture,
    Betrayal,
    CombatStress,
    Interrogation,
}

/// Crime categories the legal collaborator can attach to a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CrimeCategory {
    Trespassing,
    Sabotage,
    AssaultOnOfficers,
    Sedition,
    Terrorism,
}

/// Kinds of events appended to the intelligence collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntelEventKind {
    GovernmentCrackdown,
    MediaCoverage,
    InformantChatter,
}
