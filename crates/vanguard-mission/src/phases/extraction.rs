//! Extraction phase — escape rolls, captures, deaths, and the occasional
//! loyal fool turning back into the cordon.

use std::collections::BTreeMap;

use rand::Rng;
use serde_json::json;

use vanguard_core::enums::{
    ActionType, ComplicationSeverity, MissionPhase, PersonalityTrait, Skill,
};
use vanguard_core::error::HookError;
use vanguard_core::report::AbortCause;
use vanguard_core::types::AgentId;

use crate::ctx::MissionCtx;
use crate::phases::PhaseResult;

pub(super) fn run(ctx: &mut MissionCtx) -> Result<PhaseResult, HookError> {
    let active = ctx.active_indices();
    let mut escaped: Vec<usize> = Vec::new();
    let mut captured_now: Vec<AgentId> = Vec::new();

    for idx in active.iter().copied() {
        let id = ctx.team[idx].id;
        let name = ctx.team[idx].codename.clone();
        let chance = escape_chance(ctx, idx);
        let success = ctx.rng.gen_bool(chance);

        let mut details = BTreeMap::new();
        details.insert("chance".to_string(), json!(chance));

        if success {
            let narrative = vanguard_narrative::phrases::action_line(
                ctx.rng,
                &name,
                ActionType::Escape,
                true,
                false,
            );
            ctx.log_action(
                MissionPhase::Extraction,
                id,
                ActionType::Escape,
                true,
                false,
                narrative,
                details,
            );
            escaped.push(idx);
            continue;
        }

        let narrative = vanguard_narrative::phrases::action_line(
            ctx.rng,
            &name,
            ActionType::Escape,
            false,
            false,
        );
        ctx.log_action(
            MissionPhase::Extraction,
            id,
            ActionType::Escape,
            false,
            false,
            narrative,
            details,
        );

        if ctx.rng.gen_bool(ctx.tuning.capture_chance) {
            let charges = ctx.legal.record_capture(&ctx.team[idx], ctx.mission, ctx.location)?;
            if let Some(perf) = ctx.report.agent_performance.get_mut(&id) {
                perf.crimes.extend(charges.iter().copied());
            }
            ctx.report.captured.push(id);
            ctx.report.heat_generated += ctx.tuning.heat_per_capture;
            captured_now.push(id);
            ctx.add_complication(
                MissionPhase::Extraction,
                ComplicationSeverity::Major,
                format!("{name} was taken alive at the perimeter"),
                vec![id],
                true,
                format!("{name} disappeared into a government transport before anyone could react"),
            );
        } else {
            ctx.report.casualties.push(id);
            ctx.add_complication(
                MissionPhase::Extraction,
                ComplicationSeverity::Major,
                format!("{name} was killed covering the withdrawal"),
                vec![id],
                false,
                format!("{name} went down within sight of the rally point"),
            );
        }
    }

    // Loyal escapees may turn back for captured teammates. The attempt is
    // recorded as narrative only; its outcome belongs to a later session.
    if !captured_now.is_empty() {
        let captured_names = captured_now
            .iter()
            .map(|&id| ctx.report.codename(id).to_string())
            .collect::<Vec<_>>()
            .join(" and ");
        for idx in escaped.iter().copied() {
            if !ctx.team[idx].has_trait(PersonalityTrait::Loyal) {
                continue;
            }
            if ctx.rng.gen_bool(ctx.tuning.rescue_attempt_chance) {
                let line = vanguard_narrative::phrases::rescue_line(
                    &ctx.team[idx].codename,
                    &captured_names,
                );
                ctx.report.memorable_moments.push(line);
            }
        }
    }

    if escaped.is_empty() && !active.is_empty() {
        return Ok(PhaseResult::aborted(AbortCause::ExtractionFailed));
    }
    if escaped.len() == active.len() {
        Ok(PhaseResult::ok())
    } else {
        Ok(PhaseResult::failed())
    }
}

/// Escape chance: stealth and combat skill, current combat effectiveness,
/// against a baseline made worse by failed objectives and heat.
fn escape_chance(ctx: &MissionCtx, idx: usize) -> f64 {
    let agent = &ctx.team[idx];
    let t = ctx.tuning;
    let chance = t.escape_base_chance
        + 0.3 * (f64::from(agent.skill(Skill::Stealth)) / 10.0)
        + 0.2 * (f64::from(agent.skill(Skill::Combat)) / 10.0)
        + 0.3 * agent.emotions.combat_effectiveness()
        + ctx.loadout.check_bonus(Skill::Stealth)
        - t.escape_failed_objective_penalty * ctx.report.objectives_failed.len() as f64
        - t.escape_heat_penalty * f64::from(ctx.report.heat_generated);
    chance.clamp(0.1, 0.95)
}
