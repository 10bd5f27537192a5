//! Errors raised while handling player commands.
//!
//! None of these halt the simulation: queued commands log the error and
//! carry on, direct engine calls hand it back to the caller.

use thiserror::Error;

use skirmish_core::types::{EntityId, Team};

/// A player command that could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),
    #[error("entity {entity} is not owned by team {team:?}")]
    NotOwned { entity: EntityId, team: Team },
    #[error("entity {0} is not a spawner")]
    NotASpawner(EntityId),
    #[error("no unit template `{0}` available")]
    UnknownTemplate(String),
    #[error("no active units selected")]
    EmptySelection,
    #[error("no spawner selected")]
    NoSpawnerSelected,
    #[error("no action bound to `{0}`")]
    UnboundHotkey(char),
    #[error("team {0:?} has no player")]
    UnknownPlayer(Team),
}
