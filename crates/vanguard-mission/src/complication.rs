//! Complication and betrayal subsystem.
//!
//! Planning-phase relationship conflicts and the execution-phase betrayal
//! check. Betrayal is a first-class state-machine outcome: it is flagged
//! structurally on the performance record and the abort cause, never
//! inferred from text.

use std::collections::BTreeMap;

use rand::Rng;
use serde_json::json;

use vanguard_core::enums::{
    ActionType, BetrayalReason, ComplicationSeverity, MissionPhase, PersonalityTrait,
    RelationshipEvent,
};
use vanguard_core::error::HookError;
use vanguard_core::types::AgentId;

use crate::ctx::MissionCtx;

/// A betrayal that fired during the execution phase.
#[derive(Debug, Clone, Copy)]
pub struct BetrayalEvent {
    pub agent: AgentId,
    pub reason: BetrayalReason,
    /// The chance the roll was made against, kept for the report details.
    pub chance: f64,
}

/// Planning-phase conflict check: every ordered pair of distinct team
/// members, fired independently per direction since trust is directional.
/// Returns whether any conflict fired.
pub fn planning_conflicts(ctx: &mut MissionCtx) -> Result<bool, HookError> {
    let ids = ctx.team_ids();
    let mut any = false;

    for &instigator in &ids {
        for &other in &ids {
            if instigator == other {
                continue;
            }
            let Some(rel) = ctx.rels.relationship(instigator, other)? else {
                continue;
            };
            if rel.trust >= ctx.tuning.conflict_trust_threshold {
                continue;
            }
            any = true;

            let (inst_name, other_name) = (
                ctx.report.codename(instigator).to_string(),
                ctx.report.codename(other).to_string(),
            );
            ctx.add_complication(
                MissionPhase::Planning,
                ComplicationSeverity::Moderate,
                format!("{inst_name} refuses to work with {other_name}"),
                vec![instigator, other],
                true,
                format!("old grievances between {inst_name} and {other_name} surfaced at the planning table"),
            );

            let mut details = BTreeMap::new();
            details.insert("conflict_with".to_string(), json!(other.0));
            details.insert("trust".to_string(), json!(rel.trust));
            ctx.log_action(
                MissionPhase::Planning,
                instigator,
                ActionType::Social,
                false,
                false,
                format!("{inst_name} refused outright to coordinate with {other_name}"),
                details,
            );
        }
    }
    Ok(any)
}

/// Execution-phase betrayal check. Agents are checked in team order; the
/// first successful roll wins and remaining agents are not checked this
/// phase — at most one betrayal aborts the phase.
pub fn check_betrayal(ctx: &mut MissionCtx) -> Result<Option<BetrayalEvent>, HookError> {
    for idx in ctx.active_indices() {
        let id = ctx.team[idx].id;
        let avg_rel = average_relationship(ctx, id)?;
        let chance = betrayal_chance(ctx, idx, avg_rel);
        if ctx.rng.gen_bool(chance) {
            let agent = &ctx.team[idx];
            let reason = if agent.emotions.fear > 0.7 {
                BetrayalReason::OverwhelmingFear
            } else if agent.ideological_score() < 0.3 {
                BetrayalReason::IdeologicalDifferences
            } else if avg_rel < -0.3 {
                BetrayalReason::PersonalVendetta
            } else {
                BetrayalReason::SelfPreservation
            };
            return Ok(Some(BetrayalEvent {
                agent: id,
                reason,
                chance,
            }));
        }
    }
    Ok(None)
}

/// Mean relationship strength the agent holds toward teammates. Unformed
/// relationships read as neutral.
fn average_relationship(ctx: &MissionCtx, agent: AgentId) -> Result<f64, HookError> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for other in ctx.team.iter().map(|a| a.id) {
        if other == agent {
            continue;
        }
        let strength = ctx
            .rels
            .relationship(agent, other)?
            .map_or(0.0, |r| r.strength);
        sum += strength;
        count += 1;
    }
    Ok(if count == 0 { 0.0 } else { sum / f64::from(count) })
}

/// Weighted betrayal probability for one agent: baseline plus emotional,
/// relational, and situational pressure, scaled by personality.
fn betrayal_chance(ctx: &MissionCtx, idx: usize, avg_rel: f64) -> f64 {
    let t = ctx.tuning;
    let agent = &ctx.team[idx];
    let mut chance = t.betrayal_base_chance;

    if avg_rel < -0.5 {
        chance += t.betrayal_relationship_bonus;
    }
    if agent.ideological_score() < 0.3 {
        chance += t.betrayal_ideology_bonus;
    }
    if agent.emotions.fear > 0.7 {
        chance += t.betrayal_fear_bonus;
    }
    if agent.stress_level() > 0.7 {
        chance += t.betrayal_stress_bonus;
    }

    // Mission context: losses, failing objectives, accumulated heat.
    chance += (0.05 * ctx.report.casualties.len() as f64).min(0.15);
    let failed = ctx.report.objectives_failed.len();
    if failed > 0 && failed >= ctx.report.objectives_completed.len() {
        chance += 0.05;
    }
    chance += (f64::from(ctx.report.heat_generated) / 100.0).min(0.1);

    // The agent's own bad night so far.
    if let Some(perf) = ctx.report.agent_performance.get(&agent.id) {
        let failures = perf.actions.len() as f64 - f64::from(perf.successes);
        chance += (0.02 * failures).min(0.08);
        chance += (0.03 * f64::from(perf.panic_episodes)).min(0.09);
    }

    let factor = |t: PersonalityTrait| -> f64 {
        match t {
            PersonalityTrait::Loyal => 0.3,
            PersonalityTrait::Opportunistic => 1.5,
            PersonalityTrait::Cautious => 1.2,
            PersonalityTrait::Reckless => 0.8,
            _ => 1.0,
        }
    };
    // Primary trait at full weight, secondary at half strength.
    let trait_factor =
        factor(agent.primary_trait) * (1.0 + (factor(agent.secondary_trait) - 1.0) * 0.5);

    (chance * trait_factor).clamp(0.0, t.betrayal_chance_max)
}

/// Apply a betrayal: catastrophic complication, a successful combat action
/// by the betrayer, a team-wide relationship event, and the structural
/// flags the abort path reads.
pub fn execute_betrayal(ctx: &mut MissionCtx, event: &BetrayalEvent) -> Result<(), HookError> {
    let name = ctx.report.codename(event.agent).to_string();
    let hook = vanguard_narrative::phrases::betrayal_hook(&name, event.reason);
    let team_ids = ctx.team_ids();

    if let Some(perf) = ctx.report.agent_performance.get_mut(&event.agent) {
        perf.betrayal_attempted = true;
    }

    ctx.add_complication(
        MissionPhase::Execution,
        ComplicationSeverity::Catastrophic,
        format!("{name} turned on the team mid-operation"),
        team_ids.clone(),
        true,
        hook,
    );

    let mut details = BTreeMap::new();
    details.insert("betrayal".to_string(), json!(true));
    details.insert("reason".to_string(), json!(format!("{:?}", event.reason)));
    details.insert("chance".to_string(), json!(event.chance));
    ctx.log_action(
        MissionPhase::Execution,
        event.agent,
        ActionType::Combat,
        true,
        false,
        format!("{name} turned their weapon on the cell and opened the way for the response teams"),
        details,
    );

    ctx.rels.apply_group_event(
        &team_ids,
        RelationshipEvent::Betrayal,
        0.9,
        &format!("{name} betrayed the team during the operation"),
    )?;

    Ok(())
}
