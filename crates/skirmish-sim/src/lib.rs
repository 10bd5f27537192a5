//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, turns player commands into unit directives
//! through the group dispatcher, the spawner coordinator, and the selection
//! manager, steps every unit once per tick, and produces GameStateSnapshots
//! for the frontend.

pub mod actions;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod player;
pub mod selection;
pub mod session;
pub mod spawner;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::CommandError;
pub use skirmish_core as core;
