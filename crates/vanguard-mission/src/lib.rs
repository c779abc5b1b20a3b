//! Mission execution engine — the core of the game.
//!
//! `MissionExecutor` owns the RNG and tuning, drives the five-phase state
//! machine over a team of agents, and produces a `MissionReport`.
//! Completely headless (no presentation dependency), enabling seeded
//! deterministic testing.

pub mod cascade;
pub mod complication;
pub mod ctx;
pub mod executor;
pub mod outcome;
pub mod phases;
pub mod resolver;

pub use executor::{ExecutorConfig, MissionExecutor};

#[cfg(test)]
mod tests;
