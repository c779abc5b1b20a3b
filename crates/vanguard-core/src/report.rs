//! The mission report data model.
//!
//! `MissionReport` is the single mutable accumulator for one execution:
//! built empty by the executor, mutated in place by every phase handler and
//! subsystem, finalized once, then never touched again. Actions and
//! complications are append-only records.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::constants::{
    SCORE_BETRAYAL_PENALTY, SCORE_DISOBEDIENCE_PENALTY, SCORE_HEROISM_BONUS, SCORE_PANIC_PENALTY,
};
use crate::enums::{
    ActionType, BetrayalReason, ComplicationSeverity, CrimeCategory, EmotionalTone, MissionOutcome,
    MissionPhase,
};
use crate::types::{AgentId, MissionId};

/// One atomic act by one agent in one phase. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionAction {
    pub phase: MissionPhase,
    pub agent: AgentId,
    pub action_type: ActionType,
    /// Position in the mission-wide action log, 0-based.
    pub sequence: u32,
    pub success: bool,
    /// Structural flag; narrative and tone logic read this, never the text.
    pub heroic: bool,
    pub details: BTreeMap<String, serde_json::Value>,
    pub narrative: String,
}

/// An unplanned mid-mission event. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionComplication {
    pub phase: MissionPhase,
    pub severity: ComplicationSeverity,
    pub description: String,
    pub affected: Vec<AgentId>,
    pub resolution_required: bool,
    pub narrative_hook: String,
}

/// Per-agent accumulator for the whole mission. Exactly one exists per
/// participating agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub actions: Vec<ActionType>,
    pub successes: u32,
    pub stress_gained: f64,
    pub trauma_triggered: bool,
    pub relationship_deltas: BTreeMap<AgentId, f64>,
    pub betrayal_attempted: bool,
    pub heroic_moment: bool,
    pub panic_episodes: u32,
    pub disobedience: u32,
    pub crimes: Vec<CrimeCategory>,
}

impl AgentPerformance {
    /// Success ratio plus heroism bonus, minus betrayal, panic, and
    /// disobedience penalties. Always in [0, 1].
    pub fn performance_score(&self) -> f64 {
        let ratio = if self.actions.is_empty() {
            0.0
        } else {
            f64::from(self.successes) / self.actions.len() as f64
        };
        let mut score = ratio;
        if self.heroic_moment {
            score += SCORE_HEROISM_BONUS;
        }
        if self.betrayal_attempted {
            score -= SCORE_BETRAYAL_PENALTY;
        }
        score -= SCORE_PANIC_PENALTY * f64::from(self.panic_episodes);
        score -= SCORE_DISOBEDIENCE_PENALTY * f64::from(self.disobedience);
        score.clamp(0.0, 1.0)
    }
}

/// Why a mission stopped before running its full course. Structural — the
/// outcome table is never consulted once this is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbortCause {
    Betrayal {
        agent: AgentId,
        reason: BetrayalReason,
    },
    ExtractionFailed,
    Cascade(CascadeTrigger),
    CollaboratorFailure,
}

/// Which cascade condition fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeTrigger {
    /// No agent remains un-casualtied and uncaptured.
    TeamLost,
    /// Every remaining active agent has panicked at least once.
    TeamPanicked,
    /// Two or more catastrophic complications accumulated.
    CompoundingCatastrophes,
}

/// The full record of one mission execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionReport {
    pub mission_id: MissionId,
    /// Codenames for every participating agent, so narrative generation
    /// reads only the report.
    pub roster: BTreeMap<AgentId, String>,
    /// Unix seconds. Zeroed-out copies compare equal across reruns.
    pub started_at: u64,
    pub ended_at: u64,
    /// Prefix of the canonical phase ordering, ending at the last phase
    /// that began.
    pub phases_completed: Vec<MissionPhase>,
    pub outcome: MissionOutcome,
    pub abort: Option<AbortCause>,
    pub action_log: Vec<MissionAction>,
    pub complications: Vec<MissionComplication>,
    pub agent_performance: BTreeMap<AgentId, AgentPerformance>,
    pub objectives_completed: Vec<String>,
    pub objectives_failed: Vec<String>,
    pub casualties: Vec<AgentId>,
    pub captured: Vec<AgentId>,
    pub heat_generated: u32,
    pub public_opinion_shift: f64,
    pub resources_gained: BTreeMap<String, i64>,
    pub resources_lost: BTreeMap<String, i64>,
    pub narrative_summary: String,
    pub memorable_moments: Vec<String>,
    /// 0..1, recruitment/morale value of the outcome.
    pub propaganda_value: f64,
    pub symbolic_impact: String,
    pub tone: Option<EmotionalTone>,
}

impl MissionReport {
    /// Empty report for a mission starting now, with one performance entry
    /// per team member.
    pub fn open(mission_id: MissionId, roster: &[(AgentId, String)]) -> Self {
        Self {
            mission_id,
            roster: roster.iter().cloned().collect(),
            started_at: unix_now(),
            ended_at: 0,
            phases_completed: Vec::new(),
            outcome: MissionOutcome::Failure,
            abort: None,
            action_log: Vec::new(),
            complications: Vec::new(),
            agent_performance: roster
                .iter()
                .map(|(id, _)| (*id, AgentPerformance::default()))
                .collect(),
            objectives_completed: Vec::new(),
            objectives_failed: Vec::new(),
            casualties: Vec::new(),
            captured: Vec::new(),
            heat_generated: 0,
            public_opinion_shift: 0.0,
            resources_gained: BTreeMap::new(),
            resources_lost: BTreeMap::new(),
            narrative_summary: String::new(),
            memorable_moments: Vec::new(),
            propaganda_value: 0.0,
            symbolic_impact: String::new(),
            tone: None,
        }
    }

    /// Append an action, keeping the per-agent accumulator in step.
    /// Every action's agent must already have a performance entry.
    pub fn push_action(&mut self, action: MissionAction) {
        debug_assert!(
            self.agent_performance.contains_key(&action.agent),
            "action logged for agent without performance entry"
        );
        if let Some(perf) = self.agent_performance.get_mut(&action.agent) {
            perf.actions.push(action.action_type);
            if action.success {
                perf.successes += 1;
            }
            if action.heroic {
                perf.heroic_moment = true;
            }
        }
        self.action_log.push(action);
    }

    /// Codename for `id`, or a placeholder for an unknown agent.
    pub fn codename(&self, id: AgentId) -> &str {
        self.roster.get(&id).map(String::as_str).unwrap_or("an operative")
    }

    /// Sequence number for the next appended action.
    pub fn next_sequence(&self) -> u32 {
        self.action_log.len() as u32
    }

    pub fn add_complication(&mut self, complication: MissionComplication) {
        self.complications.push(complication);
    }

    /// Whether the agent is neither a casualty nor captured.
    pub fn is_active(&self, id: AgentId) -> bool {
        !self.casualties.contains(&id) && !self.captured.contains(&id)
    }

    /// Ids of all agents still in play.
    pub fn active_agents(&self) -> Vec<AgentId> {
        self.agent_performance
            .keys()
            .copied()
            .filter(|&id| self.is_active(id))
            .collect()
    }

    /// Agents flagged as having attempted betrayal.
    pub fn betrayers(&self) -> Vec<AgentId> {
        self.agent_performance
            .iter()
            .filter(|(_, p)| p.betrayal_attempted)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Agents flagged for a heroic moment.
    pub fn heroes(&self) -> Vec<AgentId> {
        self.agent_performance
            .iter()
            .filter(|(_, p)| p.heroic_moment)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Total panic episodes across the team.
    pub fn total_panic_episodes(&self) -> u32 {
        self.agent_performance.values().map(|p| p.panic_episodes).sum()
    }

    /// Count of catastrophic complications across the whole report.
    pub fn catastrophic_count(&self) -> usize {
        self.complications
            .iter()
            .filter(|c| c.severity == ComplicationSeverity::Catastrophic)
            .count()
    }

    /// Worst complication severity recorded, if any.
    pub fn worst_severity(&self) -> Option<ComplicationSeverity> {
        self.complications.iter().map(|c| c.severity).max()
    }

    /// Completed / (completed + failed); 0/0 reads as 0.
    pub fn objective_success_rate(&self) -> f64 {
        let completed = self.objectives_completed.len();
        let total = completed + self.objectives_failed.len();
        if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        }
    }

    /// Casualties plus captures as a fraction of the team.
    pub fn loss_rate(&self) -> f64 {
        let team = self.agent_performance.len();
        if team == 0 {
            0.0
        } else {
            (self.casualties.len() + self.captured.len()) as f64 / team as f64
        }
    }

    /// Stamp the end time. Called once during finalization.
    pub fn close(&mut self) {
        self.ended_at = unix_now();
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
