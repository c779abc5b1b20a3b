//! Planning phase — relationship conflicts, leadership, dissent.

use std::collections::BTreeMap;

use rand::Rng;
use serde_json::json;

use vanguard_core::agent::EmotionalImpact;
use vanguard_core::enums::{ActionType, ComplicationSeverity, MissionPhase, PersonalityTrait};
use vanguard_core::error::HookError;

use crate::ctx::MissionCtx;
use crate::phases::PhaseResult;

pub(super) fn run(ctx: &mut MissionCtx) -> Result<PhaseResult, HookError> {
    let conflicts = crate::complication::planning_conflicts(ctx)?;

    leadership_check(ctx);
    dissent_checks(ctx);

    if conflicts {
        Ok(PhaseResult::failed())
    } else {
        Ok(PhaseResult::ok())
    }
}

/// The Leader-trait agent with the best social effectiveness tries to set
/// the tone for the night. A good briefing lifts the whole team; a bad
/// one costs a little of everyone's nerve. No leader present is fine.
fn leadership_check(ctx: &mut MissionCtx) {
    let leader_idx = ctx
        .active_indices()
        .into_iter()
        .filter(|&idx| ctx.team[idx].has_trait(PersonalityTrait::Leader))
        .max_by(|&a, &b| {
            let ea = ctx.team[a].emotions.social_effectiveness();
            let eb = ctx.team[b].emotions.social_effectiveness();
            ea.total_cmp(&eb)
        });
    let Some(idx) = leader_idx else {
        return;
    };

    let id = ctx.team[idx].id;
    let social = ctx.team[idx].emotions.social_effectiveness();
    let chance = (0.3 + 0.5 * social).clamp(ctx.tuning.chance_min, ctx.tuning.chance_max);
    let success = ctx.rng.gen_bool(chance);

    let narrative = vanguard_narrative::phrases::action_line(
        ctx.rng,
        &ctx.team[idx].codename,
        ActionType::Leadership,
        success,
        false,
    );
    let mut details = BTreeMap::new();
    details.insert("chance".to_string(), json!(chance));
    ctx.log_action(
        MissionPhase::Planning,
        id,
        ActionType::Leadership,
        success,
        false,
        narrative,
        details,
    );

    let impact = if success {
        EmotionalImpact {
            hope: 0.1,
            stress: -0.05,
            ..EmotionalImpact::default()
        }
    } else {
        EmotionalImpact {
            stress: 0.03,
            ..EmotionalImpact::default()
        }
    };
    for idx in ctx.active_indices() {
        ctx.impact_agent(idx, &impact);
    }
}

/// Agents with weak ideological commitment may voice doubts before the
/// team even leaves the safehouse.
fn dissent_checks(ctx: &mut MissionCtx) {
    for idx in ctx.active_indices() {
        let ideology = ctx.team[idx].ideological_score();
        if ideology >= ctx.tuning.dissent_ideology_threshold {
            continue;
        }
        let chance = ((ctx.tuning.dissent_ideology_threshold - ideology)
            * ctx.tuning.dissent_chance_scale)
            .clamp(0.0, 0.25);
        if !ctx.rng.gen_bool(chance) {
            continue;
        }

        let id = ctx.team[idx].id;
        let name = ctx.team[idx].codename.clone();
        if let Some(perf) = ctx.report.agent_performance.get_mut(&id) {
            perf.disobedience += 1;
        }
        ctx.add_complication(
            MissionPhase::Planning,
            ComplicationSeverity::Minor,
            format!("{name} questioned whether the mission serves the cause"),
            vec![id],
            false,
            format!("{name}'s doubts hung over the briefing"),
        );
        let mut details = BTreeMap::new();
        details.insert("ideology".to_string(), json!(ideology));
        ctx.log_action(
            MissionPhase::Planning,
            id,
            ActionType::Social,
            false,
            false,
            format!("{name} argued against the operation until the room went quiet"),
            details,
        );
    }
}
