//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Team};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A spawner produced a unit.
    UnitSpawned {
        unit: EntityId,
        spawner: EntityId,
        template: String,
        team: Team,
    },
    /// An attack-moving unit broke off to fight.
    TargetAcquired { unit: EntityId, target: EntityId },
    /// A unit landed a blow.
    Strike {
        attacker: EntityId,
        target: EntityId,
        damage: i32,
    },
    /// A unit's health ran out.
    UnitDestroyed { unit: EntityId, position: Vec3 },
    /// A unit's target died and it picked its attack-move back up.
    AttackResumed { unit: EntityId, destination: Vec3 },
    /// A move or attack-move reached its destination.
    Arrived { unit: EntityId, position: Vec3 },
    /// A move or attack-move ran longer than the configured timeout.
    DirectiveTimedOut { unit: EntityId },
}
