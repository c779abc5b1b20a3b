//! Infiltration phase — trauma triggers and stealth checks against site
//! security.

use std::collections::BTreeMap;

use serde_json::json;

use vanguard_core::agent::EmotionalImpact;
use vanguard_core::enums::{ActionType, ComplicationSeverity, MissionPhase, Skill};
use vanguard_core::error::HookError;

use crate::ctx::MissionCtx;
use crate::phases::PhaseResult;
use crate::resolver::{self, SituationalModifiers};

pub(super) fn run(ctx: &mut MissionCtx) -> Result<PhaseResult, HookError> {
    let active = ctx.active_indices();
    let team_size = active.len();
    let difficulty = f64::from(ctx.location.security_level) / 10.0;
    let mut failures = 0usize;

    for idx in active {
        let id = ctx.team[idx].id;

        // A tripped traumatic memory overrides the roll entirely.
        let worst_hit = ctx.team[idx]
            .check_trauma_triggers(&ctx.location.environment)
            .iter()
            .map(|&(_, intensity)| intensity)
            .fold(None::<f64>, |acc, i| Some(acc.map_or(i, |a| a.max(i))));
        if let Some(intensity) = worst_hit {
            let name = ctx.team[idx].codename.clone();
            ctx.add_panic(id);
            if let Some(perf) = ctx.report.agent_performance.get_mut(&id) {
                perf.trauma_triggered = true;
            }
            ctx.impact_agent(
                idx,
                &EmotionalImpact {
                    fear: 0.2 * intensity,
                    stress: 0.15 * intensity,
                    ..EmotionalImpact::default()
                },
            );
            let mut details = BTreeMap::new();
            details.insert("trauma_triggered".to_string(), json!(true));
            details.insert("intensity".to_string(), json!(intensity));
            ctx.log_action(
                MissionPhase::Infiltration,
                id,
                ActionType::Stealth,
                false,
                false,
                format!("{name} froze mid-approach as old memories surged back"),
                details,
            );
            failures += 1;
            ctx.report.heat_generated += ctx.tuning.heat_per_infiltration_failure;
            continue;
        }

        let mods = SituationalModifiers {
            difficulty,
            equipment_bonus: ctx.loadout.check_bonus(Skill::Stealth),
            momentum: ctx.mission.momentum,
            intel_quality: ctx.mission.intel_quality,
        };
        let required = [Skill::Stealth].into_iter().collect();
        let check =
            resolver::resolve_skill_check(&ctx.team[idx], &required, &mods, ctx.tuning, ctx.rng);
        if !check.success {
            failures += 1;
            ctx.report.heat_generated += ctx.tuning.heat_per_infiltration_failure;
        }
        ctx.log_action(
            MissionPhase::Infiltration,
            id,
            check.action_type,
            check.success,
            check.heroic,
            check.narrative,
            check.details,
        );
    }

    // More than half the team spotted: the approach is blown, though the
    // mission itself can still limp forward.
    if failures * 2 > team_size {
        let affected: Vec<_> = ctx.report.active_agents();
        ctx.add_complication(
            MissionPhase::Infiltration,
            ComplicationSeverity::Major,
            "the approach collapsed; security is actively sweeping for the team".to_string(),
            affected,
            true,
            "searchlights and shouted orders turned the quiet approach into a hunt".to_string(),
        );
        return Ok(PhaseResult::failed());
    }

    Ok(PhaseResult::ok())
}
