//! Mission executor — the public entry point.
//!
//! Validates inputs, drives the phase state machine, applies cross-phase
//! emotional fallout, runs cascade detection, and finalizes the report
//! (outcome, tone, propaganda, narrative). Collaborator failures are
//! converted to a best-effort report here and nowhere else.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::agent::{Agent, EmotionalImpact};
use vanguard_core::enums::{ComplicationSeverity, MissionOutcome};
use vanguard_core::error::{HookError, MissionError};
use vanguard_core::hooks::{CrimeLedger, IntelSink, Loadout, RelationshipSource};
use vanguard_core::report::{AbortCause, MissionReport};
use vanguard_core::tuning::Tuning;
use vanguard_core::types::{Location, Mission};

use crate::cascade;
use crate::ctx::MissionCtx;
use crate::outcome;
use crate::phases;

/// Configuration for a mission executor.
pub struct ExecutorConfig {
    /// RNG seed. Same seed + same inputs = same report.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// Runs missions. Owns the RNG so tests can inject a seed instead of
/// monkeypatching a global generator.
pub struct MissionExecutor {
    rng: ChaCha8Rng,
    tuning: Tuning,
}

impl MissionExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tuning: config.tuning,
        }
    }

    /// Execute one mission start to finish on the calling thread.
    ///
    /// Returns `Err` only for input-shape problems, detected before any
    /// phase runs. A collaborator failure mid-mission still yields
    /// `Ok(report)`, with the outcome forced to DISASTER and the narrative
    /// explaining the technical failure.
    #[allow(clippy::too_many_arguments)]
    pub fn execute(
        &mut self,
        mission: &Mission,
        team: &mut [Agent],
        location: &Location,
        loadout: &Loadout,
        rels: &mut dyn RelationshipSource,
        legal: &mut dyn CrimeLedger,
        intel: &mut dyn IntelSink,
    ) -> Result<MissionReport, MissionError> {
        validate(mission, team, location)?;

        let roster: Vec<_> = team.iter().map(|a| (a.id, a.codename.clone())).collect();
        let mut report = MissionReport::open(mission.id, &roster);
        report.heat_generated = mission.exposure;

        // Equipment sets the mood before the first briefing word.
        for agent in team.iter_mut() {
            agent.emotions.apply_impact(&loadout.emotional_effects);
        }

        for phase in vanguard_core::enums::MissionPhase::SEQUENCE {
            // Recorded at phase start: an abort mid-phase still counts the
            // phase as begun.
            report.phases_completed.push(phase);
            let complication_mark = report.complications.len();
            tracing::debug!(?phase, mission = %mission.codename, "phase begins");

            let result = {
                let mut ctx = MissionCtx {
                    mission,
                    team: &mut *team,
                    location,
                    loadout,
                    report: &mut report,
                    rng: &mut self.rng,
                    tuning: &self.tuning,
                    rels: &mut *rels,
                    legal: &mut *legal,
                    intel: &mut *intel,
                };
                phases::run(phase, &mut ctx)
            };

            let result = match result {
                Ok(result) => result,
                Err(err) => {
                    tracing::warn!(error = %err, ?phase, "collaborator failed; salvaging report");
                    self.salvage(&mut report, &err);
                    return Ok(report);
                }
            };

            apply_phase_fallout(team, &mut report, complication_mark, result.success);

            if let Some(cause) = result.abort {
                tracing::info!(?phase, ?cause, "mission aborted");
                report.abort = Some(cause);
                report.outcome = MissionOutcome::Aborted;
                break;
            }

            // Strictly after phase-level abort handling.
            if let Some(trigger) = cascade::check(&report, &self.tuning) {
                tracing::info!(?phase, ?trigger, "cascade failure detected");
                report.abort = Some(AbortCause::Cascade(trigger));
                report.outcome = MissionOutcome::Aborted;
                break;
            }
        }

        self.finalize(&mut report);
        Ok(report)
    }

    /// Compute everything derived, once, after the last phase.
    fn finalize(&mut self, report: &mut MissionReport) {
        if report.abort.is_none() {
            report.outcome = outcome::calculate_outcome(report, &self.tuning);
        }
        report.tone = Some(vanguard_narrative::determine_emotional_tone(report));
        report.propaganda_value = outcome::propaganda_value(report);
        report.symbolic_impact = outcome::symbolic_impact(report.propaganda_value);
        report.narrative_summary =
            vanguard_narrative::generate_mission_summary(report, &mut self.rng);
        report.close();

        debug_assert!(
            report.casualties.iter().all(|id| !report.captured.contains(id)),
            "an agent cannot be both a casualty and captured"
        );
    }

    /// Best-effort report after a collaborator failure. The batch playtest
    /// loop upstream depends on always receiving a report.
    fn salvage(&mut self, report: &mut MissionReport, err: &HookError) {
        report.outcome = MissionOutcome::Disaster;
        report.abort = Some(AbortCause::CollaboratorFailure);
        report.tone = Some(vanguard_narrative::determine_emotional_tone(report));
        report.propaganda_value = outcome::propaganda_value(report);
        report.symbolic_impact = outcome::symbolic_impact(report.propaganda_value);
        report.narrative_summary = format!(
            "Mission records are incomplete: a support system failed mid-operation ({err}). \
             The accounts that survive describe a disaster."
        );
        report.close();
    }
}

/// Uniform emotional penalty after a failed phase, plus a larger one for
/// agents named in that phase's catastrophic complications.
fn apply_phase_fallout(
    team: &mut [Agent],
    report: &mut MissionReport,
    complication_mark: usize,
    phase_success: bool,
) {
    let phase_penalty = EmotionalImpact {
        stress: 0.08,
        fear: 0.05,
        ..EmotionalImpact::default()
    };
    let catastrophe_penalty = EmotionalImpact {
        stress: 0.15,
        fear: 0.1,
        hope: -0.1,
        ..EmotionalImpact::default()
    };

    let catastrophic_agents: Vec<_> = report.complications[complication_mark..]
        .iter()
        .filter(|c| c.severity == ComplicationSeverity::Catastrophic)
        .flat_map(|c| c.affected.iter().copied())
        .collect();

    for agent in team.iter_mut() {
        if !report.is_active(agent.id) {
            continue;
        }
        let mut gained = 0.0;
        if !phase_success {
            agent.emotions.apply_impact(&phase_penalty);
            gained += phase_penalty.stress;
        }
        if catastrophic_agents.contains(&agent.id) {
            agent.emotions.apply_impact(&catastrophe_penalty);
            gained += catastrophe_penalty.stress;
        }
        if gained > 0.0 {
            if let Some(perf) = report.agent_performance.get_mut(&agent.id) {
                perf.stress_gained += gained;
            }
        }
    }
}

/// Reject malformed inputs before any phase runs; partial execution with
/// bad inputs corrupts the report.
fn validate(mission: &Mission, team: &[Agent], location: &Location) -> Result<(), MissionError> {
    if team.is_empty() {
        return Err(MissionError::EmptyTeam);
    }
    if mission.primary_objective.trim().is_empty() {
        return Err(MissionError::BlankObjective(mission.codename.clone()));
    }
    if mission.required_skills.is_empty() {
        return Err(MissionError::NoRequiredSkills(mission.codename.clone()));
    }
    if location.security_level > 10 {
        return Err(MissionError::SecurityOutOfRange(location.security_level));
    }
    if !(-1.0..=1.0).contains(&mission.momentum) {
        return Err(MissionError::MomentumOutOfRange(mission.momentum));
    }
    if !(0.0..=1.0).contains(&mission.intel_quality) {
        return Err(MissionError::IntelQualityOutOfRange(mission.intel_quality));
    }
    Ok(())
}
