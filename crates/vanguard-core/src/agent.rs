//! Agent snapshot and emotional-state hooks.
//!
//! The engine reads agents through the accessors here and mutates them only
//! through `apply_impact` and `apply_trauma`. The internal decay/recovery
//! math of the full psychological model lives outside this workspace; the
//! state carried here is the slice the mission engine needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{PersonalityTrait, SituationalTrigger, Skill, TraumaKind};
use crate::types::AgentId;

/// Current emotional state of one agent. All axes are clamped to [0, 1].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionalState {
    pub fear: f64,
    pub anger: f64,
    pub despair: f64,
    pub hope: f64,
    pub stress: f64,
}

/// A delta applied to an `EmotionalState`. Fields default to zero so call
/// sites only name the axes they move.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EmotionalImpact {
    pub fear: f64,
    pub anger: f64,
    pub despair: f64,
    pub hope: f64,
    pub stress: f64,
}

impl EmotionalState {
    /// Derived combat effectiveness, 0..1. Fear and stress degrade it,
    /// hope and a controlled amount of anger sharpen it.
    pub fn combat_effectiveness(&self) -> f64 {
        (0.5 + 0.5 * self.hope + 0.15 * self.anger
            - 0.4 * self.fear
            - 0.3 * self.stress
            - 0.2 * self.despair)
            .clamp(0.0, 1.0)
    }

    /// Derived social effectiveness, 0..1. Anger hurts here where it helps
    /// in a fight.
    pub fn social_effectiveness(&self) -> f64 {
        (0.5 + 0.4 * self.hope - 0.3 * self.stress - 0.25 * self.despair - 0.1 * self.anger)
            .clamp(0.0, 1.0)
    }

    /// Apply a delta, clamping every axis to [0, 1].
    pub fn apply_impact(&mut self, impact: &EmotionalImpact) {
        self.fear = (self.fear + impact.fear).clamp(0.0, 1.0);
        self.anger = (self.anger + impact.anger).clamp(0.0, 1.0);
        self.despair = (self.despair + impact.despair).clamp(0.0, 1.0);
        self.hope = (self.hope + impact.hope).clamp(0.0, 1.0);
        self.stress = (self.stress + impact.stress).clamp(0.0, 1.0);
    }
}

/// A traumatic memory with the situational triggers that reopen it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraumaticMemory {
    pub kind: TraumaKind,
    /// 0..1, how hard the memory hits when tripped.
    pub intensity: f64,
    pub triggers: Vec<SituationalTrigger>,
}

/// One simulated team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub codename: String,
    /// Skill levels 0-10. Missing entries read as 0.
    pub skills: BTreeMap<Skill, u8>,
    pub primary_trait: PersonalityTrait,
    pub secondary_trait: PersonalityTrait,
    /// Ideological commitment, 0..1.
    pub ideology: f64,
    /// Missions already survived, feeds the experience modifier.
    pub missions_served: u32,
    pub emotions: EmotionalState,
    pub memories: Vec<TraumaticMemory>,
}

impl Agent {
    /// Skill level for `skill`, 0 when untrained.
    pub fn skill(&self, skill: Skill) -> u8 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    pub fn stress_level(&self) -> f64 {
        self.emotions.stress
    }

    pub fn ideological_score(&self) -> f64 {
        self.ideology
    }

    /// Whether the agent carries `t` as primary or secondary trait.
    pub fn has_trait(&self, t: PersonalityTrait) -> bool {
        self.primary_trait == t || self.secondary_trait == t
    }

    /// Whether the agent can still function at all in the field.
    pub fn can_operate_effectively(&self) -> bool {
        self.emotions.stress < 0.9 && self.emotions.despair < 0.85
    }

    /// Whether the agent is steady enough for a real skill check.
    pub fn is_psychologically_stable(&self) -> bool {
        self.emotions.stress < 0.75 && self.emotions.fear < 0.8
    }

    /// Memories tripped by the given site conditions, with the intensity
    /// each one fires at.
    pub fn check_trauma_triggers(
        &self,
        situation: &[SituationalTrigger],
    ) -> Vec<(&TraumaticMemory, f64)> {
        self.memories
            .iter()
            .filter(|m| m.triggers.iter().any(|t| situation.contains(t)))
            .map(|m| (m, m.intensity))
            .collect()
    }

    /// Record a new traumatic memory and absorb its immediate emotional
    /// cost.
    pub fn apply_trauma(
        &mut self,
        intensity: f64,
        kind: TraumaKind,
        triggers: Vec<SituationalTrigger>,
    ) {
        let intensity = intensity.clamp(0.0, 1.0);
        self.emotions.apply_impact(&EmotionalImpact {
            stress: 0.3 * intensity,
            fear: 0.25 * intensity,
            despair: 0.15 * intensity,
            ..EmotionalImpact::default()
        });
        self.memories.push(TraumaticMemory {
            kind,
            intensity,
            triggers,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_agent() -> Agent {
        Agent {
            id: AgentId(1),
            codename: "LANTERN".into(),
            skills: BTreeMap::new(),
            primary_trait: PersonalityTrait::Methodical,
            secondary_trait: PersonalityTrait::Loyal,
            ideology: 0.8,
            missions_served: 2,
            emotions: EmotionalState::default(),
            memories: Vec::new(),
        }
    }

    #[test]
    fn effectiveness_stays_in_unit_range() {
        let mut e = EmotionalState::default();
        e.fear = 1.0;
        e.stress = 1.0;
        e.despair = 1.0;
        assert!(e.combat_effectiveness() >= 0.0);
        e = EmotionalState::default();
        e.hope = 1.0;
        e.anger = 1.0;
        assert!(e.combat_effectiveness() <= 1.0);
    }

    #[test]
    fn trauma_raises_stress_and_records_memory() {
        let mut agent = quiet_agent();
        agent.apply_trauma(
            0.8,
            TraumaKind::WitnessedDeath,
            vec![SituationalTrigger::Gunfire],
        );
        assert_eq!(agent.memories.len(), 1);
        assert!(agent.emotions.stress > 0.0);
        let hits = agent.check_trauma_triggers(&[SituationalTrigger::Gunfire]);
        assert_eq!(hits.len(), 1);
        let misses = agent.check_trauma_triggers(&[SituationalTrigger::Crowds]);
        assert!(misses.is_empty());
    }

    #[test]
    fn impact_clamps_at_bounds() {
        let mut agent = quiet_agent();
        agent.emotions.apply_impact(&EmotionalImpact {
            fear: 5.0,
            hope: -5.0,
            ..EmotionalImpact::default()
        });
        assert_eq!(agent.emotions.fear, 1.0);
        assert_eq!(agent.emotions.hope, 0.0);
    }
}
