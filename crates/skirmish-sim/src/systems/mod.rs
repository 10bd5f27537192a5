//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and in the engine.

pub mod cleanup;
pub mod combat;
pub mod detection;
pub mod orders;
pub mod snapshot;
