//! Mission summary generation.
//!
//! Assembles the finished report into prose: tone opening, character
//! highlights, tactical analysis, emotional consequence, propaganda-banded
//! closing. Reads the report only; wording varies through the RNG, meaning
//! does not.

use rand::seq::SliceRandom;
use rand::Rng;

use vanguard_core::enums::EmotionalTone;
use vanguard_core::report::{AbortCause, MissionReport};

use crate::phrases;

/// Heat bands for the tactical line. Presentation wording only; the
/// engine's own media threshold is a tuning lever and may differ.
const HEAVY_HEAT: u32 = 20;
const NOTICED_HEAT: u32 = 8;

/// Build the multi-sentence narrative summary for a finished report.
/// Guaranteed non-empty; mentions betrayal whenever one is flagged.
pub fn generate_mission_summary<R: Rng>(report: &MissionReport, rng: &mut R) -> String {
    let tone = report
        .tone
        .unwrap_or(EmotionalTone::AmbiguousOutcome);

    let mut parts: Vec<String> = Vec::new();

    if let Some(opening) = opening_line(report, tone, rng) {
        parts.push(opening);
    }
    if let Some(highlight) = character_highlight(report, rng) {
        parts.push(highlight);
    }
    parts.push(tactical_analysis(report));
    if let Some(consequence) = emotional_consequence(report) {
        parts.push(consequence);
    }
    parts.push(closing_line(report, rng));

    let joined = join_with_connectives(parts, rng);
    if joined.trim().is_empty() {
        "The mission passed into the movement's quiet records.".to_string()
    } else {
        joined
    }
}

fn opening_line<R: Rng>(
    report: &MissionReport,
    tone: EmotionalTone,
    rng: &mut R,
) -> Option<String> {
    let pool = phrases::tone_openings(tone);
    if let Some(line) = pool.choose(rng) {
        return Some((*line).to_string());
    }
    // No pool for this tone: fall back to an outcome-keyed opening.
    phrases::outcome_openings(report.outcome)
        .choose(rng)
        .map(|line| (*line).to_string())
}

/// Single hero, multiple heroes, betrayer, or broken agents — mutually
/// exclusive. A betrayal always takes the slot (and suppresses the
/// broken-agents line entirely).
fn character_highlight<R: Rng>(report: &MissionReport, rng: &mut R) -> Option<String> {
    let betrayers = report.betrayers();
    if let Some(&first) = betrayers.first() {
        let reason = match &report.abort {
            Some(AbortCause::Betrayal { agent, reason }) if *agent == first => Some(*reason),
            _ => None,
        };
        let name = report.codename(first);
        return Some(match reason {
            Some(reason) => phrases::betrayal_hook(name, reason),
            None => format!("{name} betrayed the cell, and the wound will outlast the mission"),
        });
    }

    let heroes = report.heroes();
    match heroes.len() {
        0 => {}
        1 => {
            let name = report.codename(heroes[0]);
            return Some(format!(
                "{name}'s moment of courage is the part everyone will remember"
            ));
        }
        _ => {
            let names: Vec<&str> = heroes.iter().map(|&id| report.codename(id)).collect();
            return Some(format!(
                "{} each found something heroic in themselves before the night ended",
                names.join(" and ")
            ));
        }
    }

    let broken: Vec<&str> = report
        .agent_performance
        .iter()
        .filter(|(_, p)| p.panic_episodes > 0)
        .map(|(&id, _)| report.codename(id))
        .collect();
    if broken.is_empty() {
        None
    } else {
        Some(format!(
            "{} came back, but something in them stayed behind",
            broken.join(" and ")
        ))
    }
}

fn tactical_analysis(report: &MissionReport) -> String {
    let completed = report.objectives_completed.len();
    let total = completed + report.objectives_failed.len();

    let objectives = if total == 0 {
        "the cell never reached its objectives".to_string()
    } else if completed == total {
        format!("all {total} objective(s) were achieved")
    } else if completed > 0 {
        format!("{completed} of {total} objectives were achieved")
    } else {
        format!("none of the {total} objective(s) survived contact")
    };

    let severity = match report.worst_severity() {
        Some(vanguard_core::enums::ComplicationSeverity::Catastrophic) => {
            ", through complications that nearly ended the cell"
        }
        Some(vanguard_core::enums::ComplicationSeverity::Major) => {
            ", despite serious complications"
        }
        Some(_) => ", despite minor complications",
        None => ", with the plan holding throughout",
    };

    let heat = if report.heat_generated >= HEAVY_HEAT {
        "; the operation drew heavy government attention"
    } else if report.heat_generated >= NOTICED_HEAT {
        "; the operation did not go unnoticed"
    } else {
        ""
    };

    format!("tactically, {objectives}{severity}{heat}")
}

fn emotional_consequence(report: &MissionReport) -> Option<String> {
    let dead = report.casualties.len();
    let taken = report.captured.len();

    if dead > 0 && taken > 0 {
        Some(format!(
            "the cell buried {dead} of its own and counts {taken} more behind government walls"
        ))
    } else if dead > 0 {
        let names: Vec<&str> = report
            .casualties
            .iter()
            .map(|&id| report.codename(id))
            .collect();
        Some(format!("{} did not come home", names.join(" and ")))
    } else if taken > 0 {
        let names: Vec<&str> = report
            .captured
            .iter()
            .map(|&id| report.codename(id))
            .collect();
        Some(format!(
            "{} sit in a government cell tonight",
            names.join(" and ")
        ))
    } else if !report.complications.is_empty() {
        Some("the team weathered every complication together, and came out tighter for it".into())
    } else {
        None
    }
}

fn closing_line<R: Rng>(report: &MissionReport, rng: &mut R) -> String {
    let pool = phrases::closing_lines(report.propaganda_value);
    phrases::pick(rng, pool, "the ledger simply records that the night happened").to_string()
}

/// Join sentences with varied connectives, never repeating a transition
/// twice in a row where avoidable.
fn join_with_connectives<R: Rng>(parts: Vec<String>, rng: &mut R) -> String {
    let mut out = String::new();
    let mut last: Option<&str> = None;

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            out.push_str(&capitalize(part));
            continue;
        }
        let candidates: Vec<&&str> = phrases::CONNECTIVES
            .iter()
            .filter(|&&c| Some(c) != last)
            .collect();
        let conn: &str = candidates
            .choose(rng)
            .map(|&&c| c)
            .unwrap_or("");
        last = Some(conn);

        out.push(' ');
        if conn.is_empty() {
            out.push_str(&capitalize(part));
        } else {
            out.push_str(conn);
            out.push_str(&lowercase_first(part));
        }
        if !out.ends_with('.') {
            out.push('.');
        }
    }

    // First sentence may be missing its period when parts was length 1.
    if !out.is_empty() && !out.ends_with('.') {
        out.push('.');
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase a leading sentence word, leaving all-caps codenames intact.
fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    if rest.chars().next().is_some_and(|c| c.is_uppercase()) {
        return s.to_string();
    }
    first.to_lowercase().collect::<String>() + rest
}
