//! Narrative generation for finished and in-flight missions.
//!
//! Pure functions over report data: a tone classifier driven entirely by
//! structured flags, phrase pools for individual actions, and the
//! multi-paragraph summary generator. Wording varies run to run (phrase
//! pools are sampled through the caller's RNG); meaning never does.

pub mod phrases;
pub mod summary;
pub mod tone;

pub use summary::generate_mission_summary;
pub use tone::determine_emotional_tone;
