//! Seeded scenario tests for the full engine.
//!
//! Every test drives `MissionExecutor` end to end with fixed seeds.
//! Statistical assertions use loose bounds over many seeds so they hold
//! for any reasonable tuning, not just today's defaults.

use std::collections::BTreeMap;

use vanguard_core::agent::{Agent, EmotionalState};
use vanguard_core::enums::{
    BetrayalReason, EmotionalTone, MissionOutcome, MissionPhase, PersonalityTrait, Skill,
};
use vanguard_core::error::{HookError, MissionError};
use vanguard_core::hooks::{
    IntelLog, Loadout, Relationship, RelationshipSource, RelationshipTable, StandardCharges,
};
use vanguard_core::report::{AbortCause, MissionReport};
use vanguard_core::tuning::Tuning;
use vanguard_core::types::{AgentId, FactionId, Location, Mission, MissionId};

use crate::{ExecutorConfig, MissionExecutor};

// --- Fixtures ---

fn agent(
    id: u32,
    codename: &str,
    skill_level: u8,
    primary: PersonalityTrait,
    secondary: PersonalityTrait,
    ideology: f64,
) -> Agent {
    let skills = [
        Skill::Combat,
        Skill::Stealth,
        Skill::Hacking,
        Skill::Social,
        Skill::Technical,
        Skill::Demolitions,
    ]
    .into_iter()
    .map(|s| (s, skill_level))
    .collect();
    Agent {
        id: AgentId(id),
        codename: codename.into(),
        skills,
        primary_trait: primary,
        secondary_trait: secondary,
        ideology,
        missions_served: 3,
        emotions: EmotionalState::default(),
        memories: Vec::new(),
    }
}

fn elite_team() -> Vec<Agent> {
    let mut team = vec![
        agent(1, "VIPER", 9, PersonalityTrait::Leader, PersonalityTrait::Loyal, 0.9),
        agent(2, "ANVIL", 9, PersonalityTrait::Methodical, PersonalityTrait::Loyal, 0.9),
        agent(3, "THRUSH", 9, PersonalityTrait::Loyal, PersonalityTrait::Stoic, 0.85),
        agent(4, "CANDLE", 9, PersonalityTrait::Loyal, PersonalityTrait::Cautious, 0.9),
    ];
    for a in &mut team {
        a.emotions.hope = 0.5;
    }
    team
}

fn fragile_team() -> Vec<Agent> {
    let mut team = vec![
        agent(1, "MOTH", 1, PersonalityTrait::Stoic, PersonalityTrait::Compassionate, 0.6),
        agent(2, "CHALK", 1, PersonalityTrait::Methodical, PersonalityTrait::Stoic, 0.6),
        agent(3, "EMBER", 1, PersonalityTrait::Compassionate, PersonalityTrait::Cautious, 0.6),
    ];
    for a in &mut team {
        a.emotions.stress = 0.7;
        a.emotions.fear = 0.6;
    }
    team
}

fn strike_mission() -> Mission {
    Mission {
        id: MissionId(10),
        codename: "NIGHT HARVEST".into(),
        faction: FactionId(1),
        primary_objective: "destroy the transformer yard".into(),
        secondary_objectives: vec!["recover the shift ledger".into()],
        required_skills: [Skill::Demolitions, Skill::Technical].into_iter().collect(),
        exposure: 2,
        momentum: 0.4,
        intel_quality: 0.8,
        resource_yield: [("supplies".to_string(), 25)].into_iter().collect(),
    }
}

fn quiet_depot() -> Location {
    Location {
        id: 1,
        name: "rail depot".into(),
        security_level: 2,
        environment: Vec::new(),
    }
}

fn fortress() -> Location {
    Location {
        id: 2,
        name: "interior ministry annex".into(),
        security_level: 9,
        environment: Vec::new(),
    }
}

fn run_seeded(
    seed: u64,
    mission: &Mission,
    team: &mut [Agent],
    location: &Location,
    rels: &mut RelationshipTable,
) -> (MissionReport, StandardCharges, IntelLog) {
    let mut exec = MissionExecutor::new(ExecutorConfig {
        seed,
        tuning: Tuning::default(),
    });
    let mut legal = StandardCharges::default();
    let mut intel = IntelLog::default();
    let report = exec
        .execute(
            mission,
            team,
            location,
            &Loadout::default(),
            rels,
            &mut legal,
            &mut intel,
        )
        .unwrap();
    (report, legal, intel)
}

/// Serialized report with the wall-clock timestamps zeroed out.
fn stripped(report: &MissionReport) -> String {
    let mut r = report.clone();
    r.started_at = 0;
    r.ended_at = 0;
    serde_json::to_string(&r).unwrap()
}

// --- Determinism ---

#[test]
fn same_seed_same_inputs_same_report() {
    let mission = strike_mission();
    let location = quiet_depot();
    let mut team_a = elite_team();
    let mut team_b = elite_team();
    let (a, _, _) = run_seeded(7, &mission, &mut team_a, &location, &mut RelationshipTable::new());
    let (b, _, _) = run_seeded(7, &mission, &mut team_b, &location, &mut RelationshipTable::new());
    assert_eq!(stripped(&a), stripped(&b));
}

#[test]
fn different_seeds_diverge() {
    let mission = strike_mission();
    let location = quiet_depot();
    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..10 {
        let mut team = elite_team();
        let (report, _, _) =
            run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());
        seen.insert(stripped(&report));
    }
    assert!(seen.len() > 1, "ten seeds produced identical reports");
}

// --- Scenario: strong team, soft target ---

#[test]
fn elite_team_mostly_succeeds() {
    let mission = strike_mission();
    let location = quiet_depot();
    let mut good = 0;
    for seed in 0..30 {
        let mut team = elite_team();
        let (report, _, _) =
            run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());
        if matches!(
            report.outcome,
            MissionOutcome::CriticalSuccess
                | MissionOutcome::Success
                | MissionOutcome::PartialSuccess
        ) {
            good += 1;
        }
    }
    assert!(good >= 20, "only {good}/30 runs landed a success-tier outcome");
}

#[test]
fn completed_primary_grants_resource_yield() {
    let mission = strike_mission();
    let location = quiet_depot();
    for seed in 0..30 {
        let mut team = elite_team();
        let (report, _, _) =
            run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());
        let completed_primary = report
            .objectives_completed
            .contains(&mission.primary_objective);
        assert_eq!(
            completed_primary,
            report.resources_gained.get("supplies") == Some(&25)
        );
    }
}

// --- Scenario: shaky team, hard target ---

#[test]
fn fragile_team_at_fortress_collapses() {
    let mission = strike_mission();
    let location = fortress();
    let mut aborted = 0;
    for seed in 0..20 {
        let mut team = fragile_team();
        let (report, _, _) =
            run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());
        if report.abort.is_some() {
            assert_eq!(report.outcome, MissionOutcome::Aborted);
            aborted += 1;
        }
    }
    assert!(aborted >= 14, "only {aborted}/20 fortress runs collapsed");
}

#[test]
fn solo_agent_at_maximum_security_draws_heat() {
    let mission = strike_mission();
    let location = Location {
        id: 3,
        name: "presidential archive vault".into(),
        security_level: 10,
        environment: Vec::new(),
    };
    let mut any_failed_infiltration = false;
    for seed in 0..40 {
        let mut team = vec![agent(
            1,
            "SABLE",
            3,
            PersonalityTrait::Methodical,
            PersonalityTrait::Stoic,
            0.8,
        )];
        let (report, _, _) =
            run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());
        let failed_infiltration = report
            .action_log
            .iter()
            .any(|a| a.phase == MissionPhase::Infiltration && !a.success);
        if failed_infiltration {
            any_failed_infiltration = true;
            // A single failure already outweighs half a team of one.
            assert!(report.heat_generated > mission.exposure);
            assert!(report.complications.iter().any(|c| {
                c.phase == MissionPhase::Infiltration
                    && c.severity == vanguard_core::enums::ComplicationSeverity::Major
            }));
        }
    }
    assert!(
        any_failed_infiltration,
        "40 seeds against a level-10 site never blew the approach"
    );
}

#[test]
fn captures_draw_charges() {
    let mission = strike_mission();
    let location = fortress();
    let mut any_captured = false;
    for seed in 0..30 {
        let mut team = vec![
            agent(1, "GARNET", 4, PersonalityTrait::Stoic, PersonalityTrait::Methodical, 0.7),
            agent(2, "LATHE", 4, PersonalityTrait::Methodical, PersonalityTrait::Stoic, 0.7),
            agent(3, "WREN", 4, PersonalityTrait::Loyal, PersonalityTrait::Stoic, 0.7),
        ];
        let (report, legal, _) =
            run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());
        for &id in &report.captured {
            any_captured = true;
            let perf = &report.agent_performance[&id];
            assert!(!perf.crimes.is_empty(), "captured agent has no charges");
            assert!(legal.captures.iter().any(|(cid, _)| *cid == id));
        }
    }
    assert!(any_captured, "no capture in 30 fortress runs");
}

// --- Scenario: a traitor in the cell ---

fn team_with_traitor() -> (Vec<Agent>, RelationshipTable) {
    let mut traitor = agent(
        1,
        "JACKAL",
        5,
        PersonalityTrait::Opportunistic,
        PersonalityTrait::Stoic,
        0.1,
    );
    traitor.emotions.fear = 0.8;
    traitor.emotions.stress = 0.72;
    let team = vec![
        traitor,
        agent(2, "ANVIL", 7, PersonalityTrait::Loyal, PersonalityTrait::Methodical, 0.9),
        agent(3, "THRUSH", 7, PersonalityTrait::Loyal, PersonalityTrait::Stoic, 0.9),
    ];
    let mut rels = RelationshipTable::new();
    let sour = Relationship {
        strength: -0.8,
        trust: -0.7,
        loyalty: 0.1,
    };
    rels.set_mutual(AgentId(1), AgentId(2), sour);
    rels.set_mutual(AgentId(1), AgentId(3), sour);
    (team, rels)
}

#[test]
fn terrified_isolated_agent_usually_betrays() {
    let mut mission = strike_mission();
    mission.exposure = 20;
    let location = quiet_depot();
    let mut betrayals = 0;
    for seed in 0..100 {
        let (mut team, mut rels) = team_with_traitor();
        let (report, _, _) = run_seeded(seed, &mission, &mut team, &location, &mut rels);
        if let Some(AbortCause::Betrayal { agent, reason }) = &report.abort {
            betrayals += 1;
            assert_eq!(report.outcome, MissionOutcome::Aborted);
            assert_eq!(report.tone, Some(EmotionalTone::BetrayalTragedy));
            assert!(report.agent_performance[agent].betrayal_attempted);
            if *agent == AgentId(1) {
                assert_eq!(*reason, BetrayalReason::OverwhelmingFear);
            }
            // Betrayal settles every objective as failed.
            assert!(report
                .objectives_failed
                .contains(&mission.primary_objective));
            // The abort ends the mission before anyone rolls to escape.
            assert!(report
                .action_log
                .iter()
                .all(|a| a.phase != MissionPhase::Extraction));
        }
    }
    assert!(betrayals >= 60, "only {betrayals}/100 runs produced a betrayal");
}

#[test]
fn sour_relationships_surface_as_planning_conflicts() {
    let mission = strike_mission();
    let location = quiet_depot();
    let (mut team, mut rels) = team_with_traitor();
    let (report, _, _) = run_seeded(3, &mission, &mut team, &location, &mut rels);
    assert!(report
        .complications
        .iter()
        .any(|c| c.phase == MissionPhase::Planning));
}

// --- Report invariants ---

#[test]
fn report_invariants_hold_across_scenarios() {
    let mission = strike_mission();
    for location in [quiet_depot(), fortress()] {
        for seed in 0..15 {
            let mut team = elite_team();
            let (report, _, _) =
                run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());

            // Phases are a prefix of the canonical ordering.
            assert_eq!(
                report.phases_completed.as_slice(),
                &MissionPhase::SEQUENCE[..report.phases_completed.len()]
            );
            // No agent is both dead and in custody.
            assert!(report.casualties.iter().all(|id| !report.captured.contains(id)));
            // Action log is contiguous and every actor is on the roster.
            for (i, action) in report.action_log.iter().enumerate() {
                assert_eq!(action.sequence as usize, i);
                assert!(report.roster.contains_key(&action.agent));
            }
            // Heat only ever accumulates on top of pre-mission exposure.
            assert!(report.heat_generated >= mission.exposure);
            // Finalization always fills the derived fields.
            assert!(report.tone.is_some());
            assert!((0.0..=1.0).contains(&report.propaganda_value));
            assert!(!report.narrative_summary.is_empty());
            assert!(!report.symbolic_impact.is_empty());
            // Once the execution phase ran, every objective settled exactly
            // once.
            if report.phases_completed.contains(&MissionPhase::Execution) {
                let mut all = vec![mission.primary_objective.clone()];
                all.extend(mission.secondary_objectives.iter().cloned());
                for objective in &all {
                    let n = report
                        .objectives_completed
                        .iter()
                        .chain(&report.objectives_failed)
                        .filter(|o| *o == objective)
                        .count();
                    assert_eq!(n, 1, "objective `{objective}` settled {n} times");
                }
            }
        }
    }
}

#[test]
fn aftermath_reports_to_intelligence() {
    let mut mission = strike_mission();
    mission.exposure = 10;
    let location = quiet_depot();
    let mut reached = 0;
    for seed in 0..30 {
        let mut team = elite_team();
        let (report, _, intel) =
            run_seeded(seed, &mission, &mut team, &location, &mut RelationshipTable::new());
        if report.phases_completed.contains(&MissionPhase::Aftermath) {
            reached += 1;
            assert!(!intel.events.is_empty());
            assert!(intel.events[0].note.contains("NIGHT HARVEST"));
        }
    }
    assert!(reached >= 20, "only {reached}/30 runs reached aftermath");
}

// --- Tuning overrides ---

#[test]
fn zero_capture_chance_means_no_prisoners() {
    let mission = strike_mission();
    let location = fortress();
    let tuning = Tuning {
        capture_chance: 0.0,
        ..Tuning::default()
    };
    for seed in 0..20 {
        let mut exec = MissionExecutor::new(ExecutorConfig {
            seed,
            tuning: tuning.clone(),
        });
        let mut team = fragile_team();
        let report = exec
            .execute(
                &mission,
                &mut team,
                &location,
                &Loadout::default(),
                &mut RelationshipTable::new(),
                &mut StandardCharges::default(),
                &mut IntelLog::default(),
            )
            .unwrap();
        assert!(report.captured.is_empty());
    }
}

// --- Input validation ---

#[test]
fn malformed_inputs_fail_before_any_phase() {
    let mut exec = MissionExecutor::new(ExecutorConfig::default());
    let location = quiet_depot();
    let run = |exec: &mut MissionExecutor, mission: &Mission, team: &mut Vec<Agent>, location: &Location| {
        exec.execute(
            mission,
            team,
            location,
            &Loadout::default(),
            &mut RelationshipTable::new(),
            &mut StandardCharges::default(),
            &mut IntelLog::default(),
        )
    };

    let mut empty: Vec<Agent> = Vec::new();
    assert_eq!(
        run(&mut exec, &strike_mission(), &mut empty, &location).unwrap_err(),
        MissionError::EmptyTeam
    );

    let mut team = elite_team();

    let mut blank = strike_mission();
    blank.primary_objective = "   ".into();
    assert!(matches!(
        run(&mut exec, &blank, &mut team, &location).unwrap_err(),
        MissionError::BlankObjective(_)
    ));

    let mut unskilled = strike_mission();
    unskilled.required_skills.clear();
    assert!(matches!(
        run(&mut exec, &unskilled, &mut team, &location).unwrap_err(),
        MissionError::NoRequiredSkills(_)
    ));

    let mut high = quiet_depot();
    high.security_level = 11;
    assert_eq!(
        run(&mut exec, &strike_mission(), &mut team, &high).unwrap_err(),
        MissionError::SecurityOutOfRange(11)
    );

    let mut runaway = strike_mission();
    runaway.momentum = 1.5;
    assert!(matches!(
        run(&mut exec, &runaway, &mut team, &location).unwrap_err(),
        MissionError::MomentumOutOfRange(_)
    ));

    let mut psychic = strike_mission();
    psychic.intel_quality = 2.0;
    assert!(matches!(
        run(&mut exec, &psychic, &mut team, &location).unwrap_err(),
        MissionError::IntelQualityOutOfRange(_)
    ));
}

// --- Collaborator failure ---

struct BrokenRelationships;

impl RelationshipSource for BrokenRelationships {
    fn relationship(
        &self,
        _from: AgentId,
        _toward: AgentId,
    ) -> Result<Option<Relationship>, HookError> {
        Err(HookError::Relationship("backend offline".into()))
    }

    fn apply_group_event(
        &mut self,
        _agents: &[AgentId],
        _event: vanguard_core::enums::RelationshipEvent,
        _intensity: f64,
        _details: &str,
    ) -> Result<(), HookError> {
        Err(HookError::Relationship("backend offline".into()))
    }
}

#[test]
fn collaborator_failure_yields_salvaged_disaster() {
    let mission = strike_mission();
    let location = quiet_depot();
    let mut team = elite_team();
    let mut exec = MissionExecutor::new(ExecutorConfig::default());
    let report = exec
        .execute(
            &mission,
            &mut team,
            &location,
            &Loadout::default(),
            &mut BrokenRelationships,
            &mut StandardCharges::default(),
            &mut IntelLog::default(),
        )
        .unwrap();
    assert_eq!(report.outcome, MissionOutcome::Disaster);
    assert_eq!(report.abort, Some(AbortCause::CollaboratorFailure));
    assert!(report.narrative_summary.contains("incomplete"));
    assert!(report.tone.is_some());
}

// --- Loadout ---

#[test]
fn loadout_emotional_effects_apply_at_start() {
    let mission = strike_mission();
    let location = quiet_depot();
    let mut team = elite_team();
    let loadout = Loadout {
        emotional_effects: vanguard_core::agent::EmotionalImpact {
            hope: 0.3,
            ..Default::default()
        },
        skill_bonuses: BTreeMap::new(),
        mission_modifier: 0.05,
        wear_notes: vec!["the det cord spools came back soaked".into()],
    };
    let mut exec = MissionExecutor::new(ExecutorConfig { seed: 5, tuning: Tuning::default() });
    let report = exec
        .execute(
            &mission,
            &mut team,
            &location,
            &loadout,
            &mut RelationshipTable::new(),
            &mut StandardCharges::default(),
            &mut IntelLog::default(),
        )
        .unwrap();
    // Gear confidence raises hope above the pre-mission baseline of 0.5
    // for at least one survivor (only catastrophe fallout lowers it).
    assert!(team.iter().any(|a| a.emotions.hope > 0.5) || !report.casualties.is_empty());
    // Wear notes surface in the aftermath ledger once it runs.
    if report.phases_completed.contains(&MissionPhase::Aftermath) {
        assert_eq!(report.resources_lost.get("gear_wear"), Some(&1));
    }
}
