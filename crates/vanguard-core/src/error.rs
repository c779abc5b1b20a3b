//! Error types for mission execution.
//!
//! Input-shape problems fail fast before any phase runs. Collaborator
//! failures (`HookError`) propagate out of phase handlers and are converted
//! to a best-effort report only at the executor boundary. Trauma, betrayal,
//! and cascade failure are state-machine outcomes, never errors.

use thiserror::Error;

/// Rejected before the first phase runs.
#[derive(Debug, Error, PartialEq)]
pub enum MissionError {
    #[error("mission requires at least one agent")]
    EmptyTeam,

    #[error("mission `{0}` declares no required skills")]
    NoRequiredSkills(String),

    #[error("mission `{0}` has a blank primary objective")]
    BlankObjective(String),

    #[error("location security level {0} is outside 0-10")]
    SecurityOutOfRange(u8),

    #[error("faction momentum {0} is outside -1.0..=1.0")]
    MomentumOutOfRange(f64),

    #[error("intel quality {0} is outside 0.0..=1.0")]
    IntelQualityOutOfRange(f64),
}

/// A collaborator (relationship, legal, or intelligence backend) failed.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("relationship backend failure: {0}")]
    Relationship(String),

    #[error("legal backend failure: {0}")]
    Legal(String),

    #[error("intelligence backend failure: {0}")]
    Intel(String),
}
