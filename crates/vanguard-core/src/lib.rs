//! Core types and definitions for the VANGUARD resistance simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! enums, id types, the agent snapshot, the mission report data model,
//! collaborator traits, tuning parameters, and error types.
//! It has no dependency on the mission engine or any runtime framework.

pub mod agent;
pub mod constants;
pub mod enums;
pub mod error;
pub mod hooks;
pub mod report;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod tests;
