//! Game state snapshot: the complete visible state handed to the frontend each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{EntityId, SimTime, Team};

/// Complete game state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub units: Vec<UnitView>,
    pub spawners: Vec<SpawnerView>,
    pub players: Vec<PlayerView>,
    pub events: Vec<SimEvent>,
}

/// A unit as the frontend sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: EntityId,
    pub team: Team,
    pub name: String,
    pub position: Vec3,
    pub status: UnitStatus,
    pub health: i32,
    pub max_health: i32,
    /// False once health ran out.
    pub active: bool,
}

/// A spawner and its rally point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnerView {
    pub id: EntityId,
    pub team: Team,
    pub spawn_position: Vec3,
    pub rally_point: Vec3,
    pub templates: Vec<String>,
}

/// Per-player input state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub team: Team,
    pub selected_units: Vec<EntityId>,
    pub selected_spawners: Vec<EntityId>,
    pub mouse_mode: MouseMode,
    pub armed_order: Option<OrderKind>,
    /// Action panel slots for the current selection.
    pub actions: Vec<ActionSlot>,
}

/// One button of the action panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSlot {
    pub label: String,
    pub hotkey: char,
    pub kind: ActionKind,
}
