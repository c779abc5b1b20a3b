//! Aftermath phase — the mission's cost settles onto the survivors, the
//! public, and the government's attention.

use vanguard_core::agent::EmotionalImpact;
use vanguard_core::enums::{IntelEventKind, MissionPhase, RelationshipEvent, SituationalTrigger, TraumaKind};
use vanguard_core::error::HookError;
use vanguard_core::hooks::IntelEvent;

use crate::ctx::MissionCtx;
use crate::phases::PhaseResult;

pub(super) fn run(ctx: &mut MissionCtx) -> Result<PhaseResult, HookError> {
    let losses = ctx.report.casualties.len() + ctx.report.captured.len();
    let survivors = ctx.active_indices();

    // Post-mission stress, heavier when the team lost people.
    let stress = if losses > 0 { 0.25 } else { 0.1 };
    for idx in survivors.iter().copied() {
        ctx.impact_agent(
            idx,
            &EmotionalImpact {
                stress,
                ..EmotionalImpact::default()
            },
        );
        if !ctx.report.casualties.is_empty() {
            let intensity = (0.4 + 0.1 * ctx.report.casualties.len() as f64).min(0.8);
            ctx.team[idx].apply_trauma(
                intensity,
                TraumaKind::WitnessedDeath,
                vec![SituationalTrigger::Gunfire, SituationalTrigger::Sirens],
            );
        }
    }

    media_reaction(ctx);

    // Government response escalation goes to the intelligence picture.
    if ctx.report.heat_generated > 0 || losses > 0 {
        let severity = (f64::from(ctx.report.heat_generated) / 50.0).clamp(0.0, 1.0);
        let kind = if ctx.report.heat_generated >= ctx.tuning.heat_media_threshold {
            IntelEventKind::GovernmentCrackdown
        } else {
            IntelEventKind::InformantChatter
        };
        ctx.intel.record(IntelEvent {
            faction: ctx.mission.faction,
            kind,
            severity,
            note: format!(
                "response to operation {}: heat {}, {} lost",
                ctx.mission.codename, ctx.report.heat_generated, losses
            ),
        })?;
    }

    relationship_fallout(ctx, losses)?;

    // Gear degradation is flavor only at this layer.
    if !ctx.loadout.wear_notes.is_empty() {
        ctx.report
            .resources_lost
            .insert("gear_wear".to_string(), ctx.loadout.wear_notes.len() as i64);
        for note in &ctx.loadout.wear_notes {
            ctx.report.memorable_moments.push(note.clone());
        }
    }

    Ok(PhaseResult::ok())
}

/// Heavy heat or bloodshed makes the papers; the framing depends on how
/// the night went.
fn media_reaction(ctx: &mut MissionCtx) {
    let casualties = ctx.report.casualties.len();
    let heat = ctx.report.heat_generated;

    let shift = 0.02 * ctx.report.objectives_completed.len() as f64
        - 0.03 * casualties as f64
        - 0.015 * ctx.report.captured.len() as f64
        - 0.001 * f64::from(heat);
    ctx.report.public_opinion_shift += shift;

    if heat >= ctx.tuning.heat_media_threshold || casualties > 0 {
        ctx.report.memorable_moments.push(if shift >= 0.0 {
            "State media buried the story; the neighborhood talked anyway.".to_string()
        } else {
            "The morning broadcasts led with the operation, framed as terrorism.".to_string()
        });
    }
}

/// Surviving pairs carry the night forward together, for better or worse.
fn relationship_fallout(ctx: &mut MissionCtx, losses: usize) -> Result<(), HookError> {
    let survivors: Vec<_> = ctx
        .active_indices()
        .into_iter()
        .map(|idx| ctx.team[idx].id)
        .collect();
    if survivors.len() < 2 {
        return Ok(());
    }

    let (event, intensity, delta) = if losses > 0 {
        (RelationshipEvent::SharedTrauma, 0.7, 0.05)
    } else if !ctx.report.objectives_completed.is_empty() {
        (RelationshipEvent::MissionSuccess, 0.5, 0.1)
    } else {
        (RelationshipEvent::MissionFailure, 0.4, -0.05)
    };

    ctx.rels.apply_group_event(
        &survivors,
        event,
        intensity,
        &format!("aftermath of operation {}", ctx.mission.codename),
    )?;

    // The engine's view of the expected drift; the relationship model owns
    // the real update.
    for &id in &survivors {
        if let Some(perf) = ctx.report.agent_performance.get_mut(&id) {
            for &other in &survivors {
                if other != id {
                    *perf.relationship_deltas.entry(other).or_insert(0.0) += delta;
                }
            }
        }
    }
    Ok(())
}
