//! Execution phase — betrayal check, the core objective attempt, and the
//! occasional piece of unplanned theater.

use std::collections::BTreeMap;

use rand::Rng;
use serde_json::json;

use vanguard_core::enums::{ActionType, MissionPhase};
use vanguard_core::error::HookError;
use vanguard_core::report::AbortCause;

use crate::complication;
use crate::ctx::MissionCtx;
use crate::phases::PhaseResult;
use crate::resolver::{self, SituationalModifiers};

pub(super) fn run(ctx: &mut MissionCtx) -> Result<PhaseResult, HookError> {
    // Betrayal first; a turned agent ends the operation on the spot.
    if let Some(event) = complication::check_betrayal(ctx)? {
        complication::execute_betrayal(ctx, &event)?;
        ctx.report
            .objectives_failed
            .push(ctx.mission.primary_objective.clone());
        for objective in &ctx.mission.secondary_objectives {
            ctx.report.objectives_failed.push(objective.clone());
        }
        return Ok(PhaseResult::aborted(AbortCause::Betrayal {
            agent: event.agent,
            reason: event.reason,
        }));
    }

    let team_size = ctx.team.len();
    let difficulty = f64::from(ctx.location.security_level) / 20.0;
    let mut successes = 0usize;

    for idx in ctx.active_indices() {
        let id = ctx.team[idx].id;

        if !ctx.team[idx].is_psychologically_stable() || !ctx.team[idx].can_operate_effectively() {
            let name = ctx.team[idx].codename.clone();
            ctx.add_panic(id);
            let mut details = BTreeMap::new();
            details.insert("panic".to_string(), json!(true));
            ctx.log_action(
                MissionPhase::Execution,
                id,
                ActionType::Support,
                false,
                false,
                format!("{name} came apart under the pressure and had to be pulled back"),
                details,
            );
            continue;
        }

        let best_skill = ctx
            .mission
            .required_skills
            .iter()
            .copied()
            .max_by_key(|&s| ctx.team[idx].skill(s));
        let equipment_bonus = best_skill.map_or(0.0, |s| ctx.loadout.check_bonus(s));
        let mods = SituationalModifiers {
            difficulty,
            equipment_bonus,
            momentum: ctx.mission.momentum,
            intel_quality: ctx.mission.intel_quality,
        };
        let check = resolver::resolve_skill_check(
            &ctx.team[idx],
            &ctx.mission.required_skills,
            &mods,
            ctx.tuning,
            ctx.rng,
        );
        if check.success {
            successes += 1;
        } else {
            ctx.report.heat_generated += ctx.tuning.heat_per_execution_failure;
        }
        if check.heroic {
            ctx.report.memorable_moments.push(check.narrative.clone());
        }
        ctx.log_action(
            MissionPhase::Execution,
            id,
            check.action_type,
            check.success,
            check.heroic,
            check.narrative,
            check.details,
        );
    }

    let threshold = (team_size / 2).max(1);
    let completed = successes >= threshold;
    if completed {
        ctx.report
            .objectives_completed
            .push(ctx.mission.primary_objective.clone());
        for (resource, amount) in &ctx.mission.resource_yield {
            *ctx.report.resources_gained.entry(resource.clone()).or_insert(0) += amount;
        }
        // Surplus successes carry secondary objectives, in declared order.
        let surplus = successes - threshold;
        for (i, objective) in ctx.mission.secondary_objectives.iter().enumerate() {
            if i < surplus {
                ctx.report.objectives_completed.push(objective.clone());
            } else {
                ctx.report.objectives_failed.push(objective.clone());
            }
        }
    } else {
        ctx.report
            .objectives_failed
            .push(ctx.mission.primary_objective.clone());
        for objective in &ctx.mission.secondary_objectives {
            ctx.report.objectives_failed.push(objective.clone());
        }
    }

    if ctx.rng.gen_bool(ctx.tuning.dramatic_event_chance) {
        let event = vanguard_narrative::phrases::dramatic_event(ctx.rng);
        ctx.report.memorable_moments.push(event);
    }

    if completed {
        Ok(PhaseResult::ok())
    } else {
        Ok(PhaseResult::failed())
    }
}
