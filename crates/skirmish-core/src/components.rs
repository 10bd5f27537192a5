//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in the orders crate and in
//! the simulation systems; the only methods here are the small collaborator
//! contracts (`Health`, `Spawner` rally point) that other crates call into.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Team;

/// Who a unit is and how the player summons it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitIdentity {
    pub team: Team,
    /// Display name, also the template name it was spawned from.
    pub name: String,
    /// Key that spawns this unit from a spawner's action panel.
    pub hotkey: char,
}

/// Combat and motion stats for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitStats {
    pub max_health: i32,
    /// Strike distance. Also the radius of the unit's detection volume.
    pub attack_range: f32,
    pub attack_damage: i32,
    /// Seconds between two strikes.
    pub time_between_attacks: f32,
    /// World units per second.
    pub move_speed: f32,
}

impl Default for UnitStats {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            attack_range: DEFAULT_ATTACK_RANGE,
            attack_damage: DEFAULT_ATTACK_DAMAGE,
            time_between_attacks: DEFAULT_TIME_BETWEEN_ATTACKS,
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }
}

/// Hit points of a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    /// Full health at `max`.
    pub fn initialize(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount`. Returns true when this blow brought health to zero
    /// or below; further damage to a depleted unit returns false.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_depleted() {
            return false;
        }
        self.current -= amount;
        self.is_depleted()
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

/// Marks a unit whose health ran out. The entity stays in the world but is
/// skipped by every system and reported as inactive to the state machine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Inactive;

/// A building that produces units and sends them to a rally point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    pub team: Team,
    /// Template names this spawner may produce, in panel order.
    pub templates: Vec<String>,
    /// Where new units appear. Fixed at construction.
    pub spawn_position: Vec3,
    /// Where new units are sent.
    pub rally_point: Vec3,
}

impl Spawner {
    /// Spawner standing at `position`; units appear `spawn_radius` behind it
    /// along -z and rally there until told otherwise.
    pub fn new(team: Team, position: Vec3, spawn_radius: f32, templates: Vec<String>) -> Self {
        let spawn_position = position - Vec3::new(0.0, 0.0, spawn_radius);
        Self {
            team,
            templates,
            spawn_position,
            rally_point: spawn_position,
        }
    }

    pub fn can_spawn(&self, template: &str) -> bool {
        self.templates.iter().any(|t| t == template)
    }

    pub fn set_rally_point(&mut self, point: Vec3) {
        self.rally_point = point;
    }

    pub fn reset_rally_point(&mut self) {
        self.rally_point = self.spawn_position;
    }
}
