//! Outcome and propaganda calculators.
//!
//! Aggregate functions over the finished report. The outcome table is
//! never consulted for a mission that aborted; the executor checks the
//! abort cause first.

use vanguard_core::enums::MissionOutcome;
use vanguard_core::report::MissionReport;
use vanguard_core::tuning::Tuning;

/// Categorical outcome from objective and loss rates. First match wins.
pub fn calculate_outcome(report: &MissionReport, tuning: &Tuning) -> MissionOutcome {
    let rate = report.objective_success_rate();
    let loss = report.loss_rate();

    if rate >= tuning.outcome_critical_rate && loss == 0.0 {
        MissionOutcome::CriticalSuccess
    } else if rate >= tuning.outcome_success_rate && loss < tuning.outcome_success_loss {
        MissionOutcome::Success
    } else if rate >= tuning.outcome_partial_rate
        || (rate > 0.0 && loss < tuning.outcome_partial_loss)
    {
        MissionOutcome::PartialSuccess
    } else if loss >= tuning.outcome_disaster_loss {
        MissionOutcome::Disaster
    } else {
        MissionOutcome::Failure
    }
}

/// Recruitment/morale value of the finished mission, 0..1.
pub fn propaganda_value(report: &MissionReport) -> f64 {
    let base = match report.outcome {
        MissionOutcome::CriticalSuccess => 0.9,
        MissionOutcome::Success => 0.7,
        MissionOutcome::PartialSuccess => 0.5,
        MissionOutcome::Failure => 0.25,
        MissionOutcome::Aborted => 0.15,
        MissionOutcome::Disaster => 0.1,
    };

    let mut value = base;
    value += (0.05 * report.heroes().len() as f64).min(0.15);
    value += (0.02 * report.memorable_moments.len() as f64).min(0.06);
    value -= 0.05 * report.casualties.len() as f64;
    if !report.betrayers().is_empty() {
        value -= 0.1;
    }
    if report.public_opinion_shift > 0.0 {
        value += 0.05;
    }
    value.clamp(0.0, 1.0)
}

/// Banded one-line reading of what the mission means to the movement.
pub fn symbolic_impact(propaganda_value: f64) -> String {
    let line = if propaganda_value >= 0.8 {
        "A rallying cry: proof the regime can be beaten."
    } else if propaganda_value >= 0.6 {
        "A solid blow the movement can build on."
    } else if propaganda_value >= 0.4 {
        "A mixed night, useful mainly as a lesson."
    } else if propaganda_value >= 0.2 {
        "A setback the movement will work to forget."
    } else {
        "A cautionary tale whispered between cells."
    };
    line.to_string()
}
