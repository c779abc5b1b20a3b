//! Action resolver — per-agent skill check resolution.
//!
//! Pure function of agent snapshot, required skills, situational modifiers,
//! tuning, and RNG. Callers append the result to the report; no side
//! effects here.

use std::collections::BTreeMap;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use vanguard_core::agent::Agent;
use vanguard_core::enums::{ActionType, PersonalityTrait, Skill};
use vanguard_core::tuning::Tuning;

/// Situation-specific inputs folded into the success chance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SituationalModifiers {
    /// Subtracted from the chance (0.0 easy .. 1.0 near-impossible).
    pub difficulty: f64,
    /// Equipment modifier for the skill being checked.
    pub equipment_bonus: f64,
    /// Faction win/loss streak, -1..1.
    pub momentum: f64,
    /// Pre-mission intelligence quality, 0..1.
    pub intel_quality: f64,
}

/// Outcome of one resolved check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub action_type: ActionType,
    pub success: bool,
    pub heroic: bool,
    /// Final clamped success chance the roll was made against.
    pub chance: f64,
    pub narrative: String,
    pub details: BTreeMap<String, serde_json::Value>,
}

/// Resolve one skill check for one agent.
///
/// Picks the agent's best skill among `required` (combat fallback), blends
/// skill level with derived combat effectiveness, folds in a bounded
/// performance-history modifier and a trait shift, clamps, and rolls.
/// A success additionally rolls for a heroic moment.
pub fn resolve_skill_check(
    agent: &Agent,
    required: &std::collections::BTreeSet<Skill>,
    mods: &SituationalModifiers,
    tuning: &Tuning,
    rng: &mut ChaCha8Rng,
) -> CheckResult {
    let skill = required
        .iter()
        .copied()
        .max_by_key(|&s| agent.skill(s))
        .unwrap_or(Skill::Combat);
    let level = agent.skill(skill);
    let effectiveness = agent.emotions.combat_effectiveness();

    let base = f64::from(level) / 10.0;
    let blended = tuning.skill_weight * base
        + tuning.effectiveness_weight * effectiveness
        + tuning.base_floor;

    let history = history_modifier(agent, mods, tuning);
    let trait_shift = trait_modifier(agent, tuning);

    let chance = (blended + history + trait_shift - mods.difficulty)
        .clamp(tuning.chance_min, tuning.chance_max);

    let success = rng.gen_bool(chance);
    let heroic = success && rng.gen_bool(heroic_chance(agent, chance, tuning));

    let action_type = skill.action_type();
    let narrative =
        vanguard_narrative::phrases::action_line(rng, &agent.codename, action_type, success, heroic);

    let mut details = BTreeMap::new();
    details.insert("skill".to_string(), json!(format!("{skill:?}")));
    details.insert("chance".to_string(), json!(chance));
    details.insert("effectiveness".to_string(), json!(effectiveness));

    CheckResult {
        action_type,
        success,
        heroic,
        chance,
        narrative,
        details,
    }
}

/// Momentum, experience, equipment, and intel quality, capped to
/// ±`history_cap` in total.
fn history_modifier(agent: &Agent, mods: &SituationalModifiers, tuning: &Tuning) -> f64 {
    let experience = (f64::from(agent.missions_served) * 0.01).min(0.05);
    let raw =
        mods.momentum * 0.1 + experience + mods.equipment_bonus + mods.intel_quality * 0.05;
    raw.clamp(-tuning.history_cap, tuning.history_cap)
}

/// Primary trait shifts at full weight, secondary at half.
fn trait_modifier(agent: &Agent, tuning: &Tuning) -> f64 {
    let shift = |t: PersonalityTrait| -> f64 {
        match t {
            PersonalityTrait::Methodical => tuning.trait_shift,
            PersonalityTrait::Reckless => -tuning.trait_shift,
            PersonalityTrait::Cautious => tuning.trait_shift * 0.5,
            PersonalityTrait::Opportunistic => -tuning.trait_shift * 0.5,
            _ => 0.0,
        }
    };
    shift(agent.primary_trait) + shift(agent.secondary_trait) * 0.5
}

/// Heroic-moment chance on a success: baseline plus a pressure bonus for
/// checks that nearly failed, scaled by trait and emotional steadiness.
fn heroic_chance(agent: &Agent, chance: f64, tuning: &Tuning) -> f64 {
    let trait_mult = match agent.primary_trait {
        PersonalityTrait::Reckless => 1.5,
        PersonalityTrait::Leader => 1.3,
        PersonalityTrait::Cautious => 0.7,
        _ => 1.0,
    };
    let steadiness = 0.5 + 0.5 * agent.emotions.combat_effectiveness();
    ((tuning.heroic_base_chance + tuning.heroic_pressure_bonus * (1.0 - chance))
        * trait_mult
        * steadiness)
        .clamp(0.0, 0.5)
}
