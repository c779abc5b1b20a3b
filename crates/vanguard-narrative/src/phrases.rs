//! Phrase pools.
//!
//! Every pool is sampled at random so repeated runs read differently.
//! Pools are keyed by structured values (action type, tone, outcome);
//! nothing here re-derives meaning from text.

use rand::seq::SliceRandom;
use rand::Rng;

use vanguard_core::enums::{ActionType, BetrayalReason, EmotionalTone, MissionOutcome};

/// Pick from a pool, falling back to a fixed line for an empty pool.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str], fallback: &'a str) -> &'a str {
    pool.choose(rng).copied().unwrap_or(fallback)
}

/// Render one agent action as a sentence.
pub fn action_line<R: Rng>(
    rng: &mut R,
    codename: &str,
    action: ActionType,
    success: bool,
    heroic: bool,
) -> String {
    let pool: &[&str] = if heroic {
        HEROIC_LINES
    } else if success {
        success_lines(action)
    } else {
        failure_lines(action)
    };
    format!("{codename} {}.", pick(rng, pool, "carried out the task"))
}

fn success_lines(action: ActionType) -> &'static [&'static str] {
    match action {
        ActionType::Stealth => &[
            "slipped past the patrols without a sound",
            "melted into the shadows between sweeps",
            "threaded the checkpoint as if invisible",
        ],
        ActionType::Combat => &[
            "dropped the sentry before an alarm could sound",
            "held the corridor through the worst of it",
            "broke the guards' line with brutal economy",
        ],
        ActionType::Hacking => &[
            "peeled the security grid open layer by layer",
            "looped the cameras without tripping a single alert",
            "pulled the archive clean off their servers",
        ],
        ActionType::Social => &[
            "talked the duty officer into waving them through",
            "spun a cover story smooth enough to survive questioning",
            "turned a nervous clerk into an unwitting accomplice",
        ],
        ActionType::Sabotage => &[
            "set the charges exactly where the schematics promised",
            "wrecked the relay with nothing but hand tools",
            "left the machinery ruined and the damage invisible",
        ],
        ActionType::Reconnaissance => &[
            "mapped every exit before the others arrived",
            "marked the guard rotations down to the minute",
            "came back with a sketch of the whole compound",
        ],
        ActionType::Escape => &[
            "was gone before the floodlights came on",
            "vanished into the maintenance tunnels",
            "cleared the perimeter two steps ahead of the dogs",
        ],
        ActionType::Support => &[
            "kept the radios alive through the jamming",
            "covered the withdrawal from the overlook",
            "patched up the wounded and kept the line moving",
        ],
        ActionType::Leadership => &[
            "steadied the team with a few quiet words",
            "called the turns before anyone else saw them",
            "held the plan together when it wanted to fray",
        ],
    }
}

fn failure_lines(action: ActionType) -> &'static [&'static str] {
    match action {
        ActionType::Stealth => &[
            "froze in a floodlight and set off the response",
            "kicked loose gravel at exactly the wrong moment",
            "was spotted crossing the inner courtyard",
        ],
        ActionType::Combat => &[
            "was driven back under concentrated fire",
            "swung first and lost the exchange",
            "could not hold the corridor",
        ],
        ActionType::Hacking => &[
            "tripped a silent counter-intrusion alarm",
            "hit encryption nobody had briefed them on",
            "locked the terminal with a mistyped sequence",
        ],
        ActionType::Social => &[
            "stumbled over the cover story under questioning",
            "pushed the bribe too hard and got doors slammed",
            "was recognized by someone from the old neighborhood",
        ],
        ActionType::Sabotage => &[
            "placed the charge against the wrong bulkhead",
            "was forced off the machinery before the job was done",
            "left the relay scorched but functional",
        ],
        ActionType::Reconnaissance => &[
            "missed the second patrol route entirely",
            "brought back a map that was two renovations old",
            "was chased off the overlook before noting the exits",
        ],
        ActionType::Escape => &[
            "found the rendezvous already swarming with police",
            "was cornered at the perimeter fence",
            "ran out of alleys before running out of pursuers",
        ],
        ActionType::Support => &[
            "lost the radio link at the worst moment",
            "froze when the team needed covering fire",
            "could not reach the wounded in time",
        ],
        ActionType::Leadership => &[
            "gave an order nobody could follow",
            "hesitated, and the hesitation spread",
            "lost the room before the briefing ended",
        ],
    }
}

/// Action-agnostic heroic descriptions.
const HEROIC_LINES: &[&str] = &[
    "did the impossible and made it look rehearsed",
    "carried the moment alone when everything hung by a thread",
    "turned a doomed position into the story recruits will hear for years",
    "refused to fail, and somehow the night agreed",
];

/// Flavor events with no mechanical weight.
pub fn dramatic_event<R: Rng>(rng: &mut R) -> String {
    pick(
        rng,
        &[
            "A government convoy rolled past the site, oblivious, headlights sweeping the team's hiding place.",
            "Somewhere above, a loyalist broadcast crackled through a tenement window, naming traitors.",
            "A stray dog adopted the rear guard and refused every attempt at dismissal.",
            "The power grid browned out across the district for a long, breathless minute.",
            "Rain moved in hard enough to drown the sirens.",
        ],
        "The night held its breath.",
    )
    .to_string()
}

/// Line for a loyal agent turning back toward captured teammates.
pub fn rescue_line(rescuer: &str, captured: &str) -> String {
    format!("{rescuer} turned back into the cordon for {captured}, against every order and every odd.")
}

/// Hook line for a betrayal complication.
pub fn betrayal_hook(codename: &str, reason: BetrayalReason) -> String {
    let why = match reason {
        BetrayalReason::OverwhelmingFear => "broken by overwhelming fear",
        BetrayalReason::IdeologicalDifferences => "no longer believing in the cause",
        BetrayalReason::PersonalVendetta => "settling a personal vendetta",
        BetrayalReason::SelfPreservation => "buying their own skin",
    };
    format!("{codename}, {why}, betrayed the cell at the worst possible moment.")
}

/// Opening lines per tone.
pub fn tone_openings(tone: EmotionalTone) -> &'static [&'static str] {
    match tone {
        EmotionalTone::TriumphantVictory => &[
            "The cell struck, and for one night the regime looked mortal.",
            "Everything the planners promised, the operation delivered.",
            "Word of the victory outran the survivors home.",
        ],
        EmotionalTone::HeroicSacrifice => &[
            "The objective was taken, and paid for in the only currency that matters.",
            "They won, and the empty chairs at the safehouse say what it cost.",
        ],
        EmotionalTone::PyrrhicVictory => &[
            "On paper it was a success; nobody at the debrief used that word.",
            "The mission succeeded, the way a fire succeeds in keeping you warm.",
        ],
        EmotionalTone::BetrayalTragedy => &[
            "The operation died from the inside, sold out by one of its own.",
            "No patrol caught them; the betrayal came from within the cell itself.",
        ],
        EmotionalTone::FearfulRetreat => &[
            "The mission ended in flight, nerve giving out before the enemy did.",
            "They came back at a run, and not all of their courage came back with them.",
        ],
        EmotionalTone::TragicLoss => &[
            "The objective slipped away, and the cost stayed.",
            "There is no kind way to write this entry in the cell's ledger.",
        ],
        EmotionalTone::DefiantStruggle => &[
            "It was a disaster, and still they made the regime bleed for it.",
            "Everything went wrong except the courage.",
        ],
        EmotionalTone::NarrowEscape => &[
            "By every rational measure they should not have made it out.",
            "The margin between this report and an obituary was a few seconds wide.",
        ],
        EmotionalTone::CrushingDefeat => &[
            "The operation failed completely, and the regime knows it.",
            "Nothing went to plan, and the plan was all they had.",
        ],
        EmotionalTone::AmbiguousOutcome => &[
            "It is hard to say, even now, whether the night was won or lost.",
            "The mission ended the way so many do: unresolved.",
        ],
    }
}

/// Outcome-keyed fallback openings, used when a tone pool is empty.
pub fn outcome_openings(outcome: MissionOutcome) -> &'static [&'static str] {
    match outcome {
        MissionOutcome::CriticalSuccess => &["The operation succeeded beyond planning."],
        MissionOutcome::Success => &["The operation succeeded."],
        MissionOutcome::PartialSuccess => &["The operation partially succeeded."],
        MissionOutcome::Failure => &["The operation failed."],
        MissionOutcome::Disaster => &["The operation ended in disaster."],
        MissionOutcome::Aborted => &["The operation was aborted mid-course."],
    }
}

/// Closing lines banded on propaganda value.
pub fn closing_lines(propaganda_value: f64) -> &'static [&'static str] {
    if propaganda_value >= 0.75 {
        &[
            "the story is already being retold in every safehouse, growing with each telling",
            "recruiters will live off this night for months",
        ]
    } else if propaganda_value >= 0.5 {
        &[
            "the movement came out of it with something worth printing",
            "carefully told, the night still reads as a victory",
        ]
    } else if propaganda_value >= 0.25 {
        &[
            "the pamphlets will need careful wording",
            "there is little here for the printers, and less for morale",
        ]
    } else {
        &[
            "the regime's newspapers will write this chapter instead",
            "the cell will speak of this night quietly, if at all",
        ]
    }
}

/// Transitions between summary sentences. The empty string means the next
/// sentence stands alone.
pub const CONNECTIVES: &[&str] = &[
    "",
    "Even so, ",
    "In the aftermath, ",
    "When the dust settled, ",
    "Against that, ",
    "By morning, ",
];
