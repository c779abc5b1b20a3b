//! Phase handlers — one per state of the mission state machine.
//!
//! PLANNING → INFILTRATION → EXECUTION → EXTRACTION → AFTERMATH, linear,
//! no cycles, no skips. Each handler mutates the report through the
//! context and reports success plus an optional abort signal.

mod aftermath;
mod execution;
mod extraction;
mod infiltration;
mod planning;

use vanguard_core::enums::MissionPhase;
use vanguard_core::error::HookError;
use vanguard_core::report::AbortCause;

use crate::ctx::MissionCtx;

/// What one phase handler reports back to the engine.
#[derive(Debug)]
pub struct PhaseResult {
    pub success: bool,
    pub abort: Option<AbortCause>,
}

impl PhaseResult {
    pub(crate) fn ok() -> Self {
        Self {
            success: true,
            abort: None,
        }
    }

    pub(crate) fn failed() -> Self {
        Self {
            success: false,
            abort: None,
        }
    }

    pub(crate) fn aborted(cause: AbortCause) -> Self {
        Self {
            success: false,
            abort: Some(cause),
        }
    }
}

/// Dispatch one phase to its handler.
pub fn run(phase: MissionPhase, ctx: &mut MissionCtx) -> Result<PhaseResult, HookError> {
    match phase {
        MissionPhase::Planning => planning::run(ctx),
        MissionPhase::Infiltration => infiltration::run(ctx),
        MissionPhase::Execution => execution::run(ctx),
        MissionPhase::Extraction => extraction::run(ctx),
        MissionPhase::Aftermath => aftermath::run(ctx),
    }
}
