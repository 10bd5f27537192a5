//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What a unit is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    #[default]
    Idle,
    Moving,
    AttackMoving,
    Attacking,
    Patrolling,
    /// Reserved for queued directives. Never entered by the current rules.
    Holding,
}

/// Whether a primary click selects or executes an armed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseMode {
    #[default]
    Standard,
    /// An order is armed and waits for a target point.
    Command,
}

/// Orders that need a target point before they can be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Move,
    Patrol,
    Attack,
    Rally,
}

/// What activating an action-panel slot does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionKind {
    /// Arm an order; the next primary click supplies its target.
    Arm { order: OrderKind },
    /// Stop all selected units.
    Stop,
    /// Reset the rally point of all selected spawners.
    EndRally,
    /// Spawn a unit from the first selected spawner.
    Spawn { template: String },
}
