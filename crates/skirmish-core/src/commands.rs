//! Player commands sent from the input surface to the simulation.
//!
//! Commands are queued per team and processed at the next tick boundary.
//! Target points are already resolved to world ground coordinates.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::OrderKind;
use crate::types::EntityId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Selection ---
    /// Select owned units (or, failing that, spawners) strictly inside the
    /// ground rectangle spanned by two corners.
    SelectArea { corner_a: Vec3, corner_b: Vec3 },
    /// Select specific owned units.
    SelectUnits { units: Vec<EntityId> },
    /// Drop the whole selection.
    ClearSelection,

    // --- Pointer ---
    /// Arm an order; the next primary click supplies its target.
    ArmOrder { order: OrderKind },
    /// Primary click on the ground. Executes the armed order, if any.
    PrimaryClick { point: Vec3 },
    /// Secondary click on the ground. Cancels an armed order or moves units.
    SecondaryClick { point: Vec3 },
    /// Hotkey press routed through the action panel.
    ActivateAction { key: char },

    // --- Unit orders ---
    MoveUnits { target: Vec3 },
    PatrolUnits { target: Vec3 },
    AttackUnits { target: Vec3 },
    StopUnits,

    // --- Spawners ---
    SetRallyPoint { point: Vec3 },
    ResetRallyPoint,
    SpawnUnit { spawner: EntityId, template: String },
}
