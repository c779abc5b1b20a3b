//! Tests for the report data model and performance scoring.

use std::collections::BTreeMap;

use crate::enums::*;
use crate::report::*;
use crate::types::{AgentId, MissionId};

fn roster(ids: &[u32]) -> Vec<(AgentId, String)> {
    ids.iter()
        .map(|&n| (AgentId(n), format!("AGENT-{n}")))
        .collect()
}

fn sample_performance() -> AgentPerformance {
    AgentPerformance {
        actions: vec![ActionType::Stealth, ActionType::Combat, ActionType::Hacking],
        successes: 2,
        ..AgentPerformance::default()
    }
}

// ---- Performance score ----

#[test]
fn score_is_success_ratio_for_plain_run() {
    let perf = sample_performance();
    let score = perf.performance_score();
    assert!((score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn score_with_no_actions_is_zero() {
    let perf = AgentPerformance::default();
    assert_eq!(perf.performance_score(), 0.0);
}

#[test]
fn score_clamps_to_unit_interval() {
    let mut perf = AgentPerformance {
        actions: vec![ActionType::Combat],
        successes: 1,
        heroic_moment: true,
        ..AgentPerformance::default()
    };
    assert!(perf.performance_score() <= 1.0);

    perf.betrayal_attempted = true;
    perf.panic_episodes = 20;
    perf.disobedience = 20;
    assert!(perf.performance_score() >= 0.0);
}

#[test]
fn betrayal_strictly_lowers_interior_score() {
    let mut perf = sample_performance();
    let before = perf.performance_score();
    perf.betrayal_attempted = true;
    let after = perf.performance_score();
    assert!(after < before, "betrayal must lower the score ({after} vs {before})");
}

// ---- Report accounting ----

#[test]
fn push_action_updates_performance_entry() {
    let mut report = MissionReport::open(MissionId(7), &roster(&[1, 2]));

    report.push_action(MissionAction {
        phase: MissionPhase::Infiltration,
        agent: AgentId(1),
        action_type: ActionType::Stealth,
        sequence: report.next_sequence(),
        success: true,
        heroic: true,
        details: BTreeMap::new(),
        narrative: "slipped through".into(),
    });

    let perf = &report.agent_performance[&AgentId(1)];
    assert_eq!(perf.actions.len(), 1);
    assert_eq!(perf.successes, 1);
    assert!(perf.heroic_moment);
    assert_eq!(report.action_log.len(), 1);
    assert_eq!(report.next_sequence(), 1);
}

#[test]
fn active_agents_excludes_losses() {
    let mut report = MissionReport::open(MissionId(1), &roster(&[1, 2, 3]));
    report.casualties.push(AgentId(1));
    report.captured.push(AgentId(2));

    assert!(!report.is_active(AgentId(1)));
    assert!(!report.is_active(AgentId(2)));
    assert_eq!(report.active_agents(), vec![AgentId(3)]);
    assert!((report.loss_rate() - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn objective_rate_treats_zero_over_zero_as_zero() {
    let report = MissionReport::open(MissionId(1), &roster(&[1]));
    assert_eq!(report.objective_success_rate(), 0.0);
}

#[test]
fn worst_severity_picks_maximum() {
    let mut report = MissionReport::open(MissionId(1), &roster(&[1]));
    assert_eq!(report.worst_severity(), None);
    for severity in [
        ComplicationSeverity::Minor,
        ComplicationSeverity::Catastrophic,
        ComplicationSeverity::Moderate,
    ] {
        report.add_complication(MissionComplication {
            phase: MissionPhase::Execution,
            severity,
            description: String::new(),
            affected: vec![],
            resolution_required: false,
            narrative_hook: String::new(),
        });
    }
    assert_eq!(report.worst_severity(), Some(ComplicationSeverity::Catastrophic));
    assert_eq!(report.catastrophic_count(), 1);
}
