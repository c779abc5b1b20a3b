//! Emotional tone classification.
//!
//! Priority-ordered decision tree over the report's structured flags.
//! Betrayal always wins; below that the branch is outcome category
//! combined with casualty count, heroism count, and panic count.
//! Never inspects narrative text.

use vanguard_core::enums::{EmotionalTone, MissionOutcome};
use vanguard_core::report::MissionReport;

/// Classify the dramatic character of a mission. Pure: two calls on an
/// unmodified report return the same tone.
pub fn determine_emotional_tone(report: &MissionReport) -> EmotionalTone {
    if !report.betrayers().is_empty() {
        return EmotionalTone::BetrayalTragedy;
    }

    let casualties = report.casualties.len();
    let heroes = report.heroes().len();
    let panics = report.total_panic_episodes();

    match report.outcome {
        MissionOutcome::CriticalSuccess => {
            if casualties == 0 {
                EmotionalTone::TriumphantVictory
            } else {
                EmotionalTone::PyrrhicVictory
            }
        }
        MissionOutcome::Success => {
            if casualties > 0 && heroes > 0 {
                EmotionalTone::HeroicSacrifice
            } else if casualties > 0 {
                EmotionalTone::PyrrhicVictory
            } else if panics > 0 {
                EmotionalTone::NarrowEscape
            } else {
                EmotionalTone::TriumphantVictory
            }
        }
        MissionOutcome::PartialSuccess => {
            if casualties == 0 && panics == 0 {
                EmotionalTone::NarrowEscape
            } else {
                EmotionalTone::AmbiguousOutcome
            }
        }
        MissionOutcome::Failure => {
            if casualties > 0 {
                EmotionalTone::TragicLoss
            } else if panics > 0 {
                EmotionalTone::FearfulRetreat
            } else {
                EmotionalTone::AmbiguousOutcome
            }
        }
        MissionOutcome::Disaster => {
            if heroes > 0 {
                EmotionalTone::DefiantStruggle
            } else {
                EmotionalTone::CrushingDefeat
            }
        }
        MissionOutcome::Aborted => {
            if panics > 0 {
                EmotionalTone::FearfulRetreat
            } else {
                EmotionalTone::AmbiguousOutcome
            }
        }
    }
}
