//! Cascade failure detection.
//!
//! Runs after each phase, strictly after phase-level abort handling, and
//! decides whether the mission can meaningfully continue at all.

use vanguard_core::report::{CascadeTrigger, MissionReport};
use vanguard_core::tuning::Tuning;

/// Check the three cascade conditions, in priority order.
pub fn check(report: &MissionReport, tuning: &Tuning) -> Option<CascadeTrigger> {
    let active = report.active_agents();
    if active.is_empty() {
        return Some(CascadeTrigger::TeamLost);
    }

    let all_panicked = active.iter().all(|id| {
        report
            .agent_performance
            .get(id)
            .is_some_and(|p| p.panic_episodes > 0)
    });
    if all_panicked {
        return Some(CascadeTrigger::TeamPanicked);
    }

    if report.catastrophic_count() >= tuning.cascade_catastrophe_limit {
        return Some(CascadeTrigger::CompoundingCatastrophes);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanguard_core::enums::{ComplicationSeverity, MissionPhase};
    use vanguard_core::report::MissionComplication;
    use vanguard_core::types::{AgentId, MissionId};

    fn report_for(ids: &[u32]) -> MissionReport {
        let roster: Vec<_> = ids
            .iter()
            .map(|&n| (AgentId(n), format!("A{n}")))
            .collect();
        MissionReport::open(MissionId(1), &roster)
    }

    #[test]
    fn healthy_team_passes() {
        let report = report_for(&[1, 2]);
        assert_eq!(check(&report, &Tuning::default()), None);
    }

    #[test]
    fn everyone_lost_triggers_team_lost() {
        let mut report = report_for(&[1, 2]);
        report.casualties.push(AgentId(1));
        report.captured.push(AgentId(2));
        assert_eq!(
            check(&report, &Tuning::default()),
            Some(CascadeTrigger::TeamLost)
        );
    }

    #[test]
    fn universal_panic_triggers_cascade() {
        let mut report = report_for(&[1, 2]);
        for id in [AgentId(1), AgentId(2)] {
            report.agent_performance.get_mut(&id).unwrap().panic_episodes = 1;
        }
        assert_eq!(
            check(&report, &Tuning::default()),
            Some(CascadeTrigger::TeamPanicked)
        );
    }

    #[test]
    fn panic_among_casualties_does_not_count() {
        let mut report = report_for(&[1, 2]);
        report.agent_performance.get_mut(&AgentId(1)).unwrap().panic_episodes = 3;
        report.casualties.push(AgentId(1));
        // The remaining active agent is steady.
        assert_eq!(check(&report, &Tuning::default()), None);
    }

    #[test]
    fn two_catastrophes_trigger_cascade() {
        let mut report = report_for(&[1, 2]);
        for _ in 0..2 {
            report.add_complication(MissionComplication {
                phase: MissionPhase::Execution,
                severity: ComplicationSeverity::Catastrophic,
                description: "it got worse".into(),
                affected: vec![AgentId(1)],
                resolution_required: true,
                narrative_hook: String::new(),
            });
        }
        assert_eq!(
            check(&report, &Tuning::default()),
            Some(CascadeTrigger::CompoundingCatastrophes)
        );
    }
}
