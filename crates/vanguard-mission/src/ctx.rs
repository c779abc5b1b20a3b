//! The mutable mission context threaded through every phase handler.
//!
//! One `MissionCtx` exists per phase invocation; it reborrows the
//! executor's state, so the report is exclusively owned by the single
//! execution call for its whole lifetime.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;

use vanguard_core::agent::{Agent, EmotionalImpact};
use vanguard_core::enums::{ActionType, ComplicationSeverity, MissionPhase};
use vanguard_core::hooks::{CrimeLedger, IntelSink, Loadout, RelationshipSource};
use vanguard_core::report::{MissionAction, MissionComplication, MissionReport};
use vanguard_core::tuning::Tuning;
use vanguard_core::types::{AgentId, Location, Mission};

/// Everything a phase handler can see and touch.
pub struct MissionCtx<'a> {
    pub mission: &'a Mission,
    pub team: &'a mut [Agent],
    pub location: &'a Location,
    pub loadout: &'a Loadout,
    pub report: &'a mut MissionReport,
    pub rng: &'a mut ChaCha8Rng,
    pub tuning: &'a Tuning,
    pub rels: &'a mut dyn RelationshipSource,
    pub legal: &'a mut dyn CrimeLedger,
    pub intel: &'a mut dyn IntelSink,
}

impl MissionCtx<'_> {
    /// Ids of every team member, in team order.
    pub fn team_ids(&self) -> Vec<AgentId> {
        self.team.iter().map(|a| a.id).collect()
    }

    /// Indices of team members who are neither casualties nor captured,
    /// in team order.
    pub fn active_indices(&self) -> Vec<usize> {
        self.team
            .iter()
            .enumerate()
            .filter(|(_, a)| self.report.is_active(a.id))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Append an action to the log, keeping the performance map in step.
    #[allow(clippy::too_many_arguments)]
    pub fn log_action(
        &mut self,
        phase: MissionPhase,
        agent: AgentId,
        action_type: ActionType,
        success: bool,
        heroic: bool,
        narrative: String,
        details: BTreeMap<String, serde_json::Value>,
    ) {
        let sequence = self.report.next_sequence();
        self.report.push_action(MissionAction {
            phase,
            agent,
            action_type,
            sequence,
            success,
            heroic,
            details,
            narrative,
        });
    }

    pub fn add_complication(
        &mut self,
        phase: MissionPhase,
        severity: ComplicationSeverity,
        description: String,
        affected: Vec<AgentId>,
        resolution_required: bool,
        narrative_hook: String,
    ) {
        self.report.add_complication(MissionComplication {
            phase,
            severity,
            description,
            affected,
            resolution_required,
            narrative_hook,
        });
    }

    /// Apply an emotional delta to one agent, tracking gained stress on
    /// their performance record.
    pub fn impact_agent(&mut self, idx: usize, impact: &EmotionalImpact) {
        let agent = &mut self.team[idx];
        agent.emotions.apply_impact(impact);
        if impact.stress > 0.0 {
            if let Some(perf) = self.report.agent_performance.get_mut(&agent.id) {
                perf.stress_gained += impact.stress;
            }
        }
    }

    /// Record one panic episode for an agent.
    pub fn add_panic(&mut self, id: AgentId) {
        if let Some(perf) = self.report.agent_performance.get_mut(&id) {
            perf.panic_episodes += 1;
        }
    }
}
