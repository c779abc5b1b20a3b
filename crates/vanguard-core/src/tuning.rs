//! Runtime-overridable tuning parameters.
//!
//! The probability constants in `constants` are design levers, not part of
//! the functional contract. `Tuning` carries them as data so a caller (or a
//! balancing harness) can override any subset without recompiling.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// All tunable probabilities and thresholds the engine consults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // Skill checks
    pub skill_weight: f64,
    pub effectiveness_weight: f64,
    pub base_floor: f64,
    pub history_cap: f64,
    pub trait_shift: f64,
    pub chance_min: f64,
    pub chance_max: f64,

    // Heroics
    pub heroic_base_chance: f64,
    pub heroic_pressure_bonus: f64,

    // Planning
    pub conflict_trust_threshold: f64,
    pub dissent_ideology_threshold: f64,
    pub dissent_chance_scale: f64,

    // Betrayal
    pub betrayal_base_chance: f64,
    pub betrayal_relationship_bonus: f64,
    pub betrayal_ideology_bonus: f64,
    pub betrayal_fear_bonus: f64,
    pub betrayal_stress_bonus: f64,
    pub betrayal_chance_max: f64,

    // Cascade
    pub cascade_catastrophe_limit: usize,

    // Execution
    pub dramatic_event_chance: f64,

    // Extraction
    pub capture_chance: f64,
    pub rescue_attempt_chance: f64,
    pub escape_base_chance: f64,
    pub escape_failed_objective_penalty: f64,
    pub escape_heat_penalty: f64,

    // Outcome table
    pub outcome_critical_rate: f64,
    pub outcome_success_rate: f64,
    pub outcome_success_loss: f64,
    pub outcome_partial_rate: f64,
    pub outcome_partial_loss: f64,
    pub outcome_disaster_loss: f64,

    // Heat
    pub heat_per_infiltration_failure: u32,
    pub heat_per_execution_failure: u32,
    pub heat_per_capture: u32,
    pub heat_media_threshold: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            skill_weight: CHECK_SKILL_WEIGHT,
            effectiveness_weight: CHECK_EFFECTIVENESS_WEIGHT,
            base_floor: CHECK_BASE_FLOOR,
            history_cap: CHECK_HISTORY_CAP,
            trait_shift: CHECK_TRAIT_SHIFT,
            chance_min: CHECK_CHANCE_MIN,
            chance_max: CHECK_CHANCE_MAX,
            heroic_base_chance: HEROIC_BASE_CHANCE,
            heroic_pressure_bonus: HEROIC_PRESSURE_BONUS,
            conflict_trust_threshold: CONFLICT_TRUST_THRESHOLD,
            dissent_ideology_threshold: DISSENT_IDEOLOGY_THRESHOLD,
            dissent_chance_scale: DISSENT_CHANCE_SCALE,
            betrayal_base_chance: BETRAYAL_BASE_CHANCE,
            betrayal_relationship_bonus: BETRAYAL_RELATIONSHIP_BONUS,
            betrayal_ideology_bonus: BETRAYAL_IDEOLOGY_BONUS,
            betrayal_fear_bonus: BETRAYAL_FEAR_BONUS,
            betrayal_stress_bonus: BETRAYAL_STRESS_BONUS,
            betrayal_chance_max: BETRAYAL_CHANCE_MAX,
            cascade_catastrophe_limit: CASCADE_CATASTROPHE_LIMIT,
            dramatic_event_chance: DRAMATIC_EVENT_CHANCE,
            capture_chance: CAPTURE_CHANCE,
            rescue_attempt_chance: RESCUE_ATTEMPT_CHANCE,
            escape_base_chance: ESCAPE_BASE_CHANCE,
            escape_failed_objective_penalty: ESCAPE_FAILED_OBJECTIVE_PENALTY,
            escape_heat_penalty: ESCAPE_HEAT_PENALTY,
            outcome_critical_rate: OUTCOME_CRITICAL_RATE,
            outcome_success_rate: OUTCOME_SUCCESS_RATE,
            outcome_success_loss: OUTCOME_SUCCESS_LOSS,
            outcome_partial_rate: OUTCOME_PARTIAL_RATE,
            outcome_partial_loss: OUTCOME_PARTIAL_LOSS,
            outcome_disaster_loss: OUTCOME_DISASTER_LOSS,
            heat_per_infiltration_failure: HEAT_PER_INFILTRATION_FAILURE,
            heat_per_execution_failure: HEAT_PER_EXECUTION_FAILURE,
            heat_per_capture: HEAT_PER_CAPTURE,
            heat_media_threshold: HEAT_MEDIA_THRESHOLD,
        }
    }
}
