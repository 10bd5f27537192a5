//! Directives: what a unit is pursuing, with the data its step needs.

use glam::Vec3;
use hecs::Entity;

use skirmish_core::enums::UnitStatus;

/// A unit's current command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    /// Walk to `target`, ignoring enemies.
    MoveTo { target: Vec3, elapsed: f32 },
    /// Walk back and forth between two points until told otherwise.
    Patrol {
        origin: Vec3,
        dest: Vec3,
        leg: PatrolLeg,
    },
    /// Walk to `target`, breaking off to fight anything that comes in range.
    AttackMove { target: Vec3, elapsed: f32 },
    /// Fight `enemy` until it dies. `cooldown` counts down to the next strike.
    Attack { enemy: Entity, cooldown: f32 },
}

/// Which end of a patrol the unit is heading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolLeg {
    /// Toward the patrol destination.
    Outbound,
    /// Back toward where the patrol started.
    Return,
}

impl PatrolLeg {
    pub fn flipped(self) -> Self {
        match self {
            PatrolLeg::Outbound => PatrolLeg::Return,
            PatrolLeg::Return => PatrolLeg::Outbound,
        }
    }
}

/// Result of stepping a unit for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A directive is still running.
    Continue,
    /// The unit has nothing left to do.
    Done,
}

impl Directive {
    /// The unit status this directive runs under. A directive stepped while
    /// the unit reports any other status has been superseded.
    pub fn status(&self) -> UnitStatus {
        match self {
            Directive::MoveTo { .. } => UnitStatus::Moving,
            Directive::Patrol { .. } => UnitStatus::Patrolling,
            Directive::AttackMove { .. } => UnitStatus::AttackMoving,
            Directive::Attack { .. } => UnitStatus::Attacking,
        }
    }

    /// Where the directive is ultimately heading, if it has a fixed point.
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            Directive::MoveTo { target, .. } | Directive::AttackMove { target, .. } => {
                Some(*target)
            }
            Directive::Patrol { dest, .. } => Some(*dest),
            Directive::Attack { .. } => None,
        }
    }
}
