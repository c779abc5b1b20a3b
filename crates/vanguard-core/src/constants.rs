//! Default tuning values. These are design levers, not contracts; the
//! engine reads them through `Tuning` so callers can override any of them.

// --- Skill check blend ---

/// Weight of the raw skill level in the success-chance blend.
pub const CHECK_SKILL_WEIGHT: f64 = 0.6;

/// Weight of derived combat effectiveness in the blend.
pub const CHECK_EFFECTIVENESS_WEIGHT: f64 = 0.3;

/// Flat floor added to every check before modifiers.
pub const CHECK_BASE_FLOOR: f64 = 0.1;

/// Cap on the combined performance-history modifier (applied as ±).
pub const CHECK_HISTORY_CAP: f64 = 0.2;

/// Shift applied for a favorable or unfavorable primary trait.
pub const CHECK_TRAIT_SHIFT: f64 = 0.1;

/// Lower clamp on any success chance.
pub const CHECK_CHANCE_MIN: f64 = 0.05;

/// Upper clamp on any success chance.
pub const CHECK_CHANCE_MAX: f64 = 0.95;

// --- Heroic moments ---

/// Baseline heroic-moment chance on a successful check.
pub const HEROIC_BASE_CHANCE: f64 = 0.10;

/// Extra heroic chance scaled by how close the check was to failing.
pub const HEROIC_PRESSURE_BONUS: f64 = 0.15;

// --- Planning ---

/// Directional trust below this emits a refuses-to-work-with conflict.
pub const CONFLICT_TRUST_THRESHOLD: f64 = -0.5;

/// Ideology below this makes an agent eligible for a dissent roll.
pub const DISSENT_IDEOLOGY_THRESHOLD: f64 = 0.4;

/// Dissent chance per point of ideology shortfall.
pub const DISSENT_CHANCE_SCALE: f64 = 0.5;

// --- Betrayal ---

/// Baseline betrayal chance per agent per execution phase.
pub const BETRAYAL_BASE_CHANCE: f64 = 0.05;

/// Added when the agent's average relationship strength is very negative.
pub const BETRAYAL_RELATIONSHIP_BONUS: f64 = 0.2;

/// Added when ideological commitment is low.
pub const BETRAYAL_IDEOLOGY_BONUS: f64 = 0.15;

/// Added for high fear.
pub const BETRAYAL_FEAR_BONUS: f64 = 0.1;

/// Added for high personal stress.
pub const BETRAYAL_STRESS_BONUS: f64 = 0.1;

/// Upper clamp on the final betrayal chance.
pub const BETRAYAL_CHANCE_MAX: f64 = 0.9;

// --- Cascade failure ---

/// Catastrophic complications at or above this count abort the mission.
pub const CASCADE_CATASTROPHE_LIMIT: usize = 2;

// --- Execution ---

/// Chance of an unrelated dramatic flavor event per execution phase.
pub const DRAMATIC_EVENT_CHANCE: f64 = 0.3;

// --- Extraction ---

/// Chance a failed escape ends in capture rather than death.
pub const CAPTURE_CHANCE: f64 = 0.8;

/// Chance a loyal escapee turns back for captured teammates.
pub const RESCUE_ATTEMPT_CHANCE: f64 = 0.25;

/// Escape-chance baseline before skill and difficulty terms.
pub const ESCAPE_BASE_CHANCE: f64 = 0.2;

/// Escape-chance penalty per failed objective.
pub const ESCAPE_FAILED_OBJECTIVE_PENALTY: f64 = 0.05;

/// Escape-chance penalty per point of accumulated heat.
pub const ESCAPE_HEAT_PENALTY: f64 = 0.005;

// --- Outcome thresholds ---

/// Objective success rate required for CRITICAL_SUCCESS (with zero losses).
pub const OUTCOME_CRITICAL_RATE: f64 = 1.0;

/// Objective success rate required for SUCCESS.
pub const OUTCOME_SUCCESS_RATE: f64 = 0.7;

/// Loss rate ceiling for SUCCESS.
pub const OUTCOME_SUCCESS_LOSS: f64 = 0.3;

/// Objective success rate floor for PARTIAL_SUCCESS.
pub const OUTCOME_PARTIAL_RATE: f64 = 0.5;

/// Loss rate ceiling for the partial-success fallback branch.
pub const OUTCOME_PARTIAL_LOSS: f64 = 0.5;

/// Loss rate at or above which the outcome is DISASTER.
pub const OUTCOME_DISASTER_LOSS: f64 = 0.7;

// --- Performance score ---

/// Score bonus for a heroic moment.
pub const SCORE_HEROISM_BONUS: f64 = 0.2;

/// Score penalty for an attempted betrayal.
pub const SCORE_BETRAYAL_PENALTY: f64 = 0.4;

/// Score penalty per panic episode.
pub const SCORE_PANIC_PENALTY: f64 = 0.05;

/// Score penalty per act of disobedience.
pub const SCORE_DISOBEDIENCE_PENALTY: f64 = 0.05;

// --- Heat ---

/// Heat generated per failed infiltration attempt.
pub const HEAT_PER_INFILTRATION_FAILURE: u32 = 2;

/// Heat generated per failed execution action.
pub const HEAT_PER_EXECUTION_FAILURE: u32 = 1;

/// Heat generated per captured agent.
pub const HEAT_PER_CAPTURE: u32 = 5;

/// Heat at or above which aftermath triggers a media reaction.
pub const HEAT_MEDIA_THRESHOLD: u32 = 20;
