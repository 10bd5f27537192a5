//! Unit orders for SKIRMISH.
//!
//! Implements the per-unit command and combat state machine: directives,
//! their step functions, attack pre-emption with a held directive, and the
//! contact list fed by detection volumes. Operates on plain data plus a
//! read-only `Battlefield` view; it never touches the ECS world directly.

pub mod contacts;
pub mod directive;
pub mod orders;

pub use skirmish_core as core;

pub use contacts::Contacts;
pub use directive::{Directive, PatrolLeg, StepOutcome};
pub use orders::{Battlefield, StepContext, UnitOrders};
