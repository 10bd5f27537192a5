//! Selection set manager.
//!
//! A selection holds either units or spawners, never both. Area picks look
//! only at what the player's roster owns; units win over spawners.

use glam::Vec3;
use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::{Inactive, Spawner, UnitIdentity};
use skirmish_core::geometry::GroundBounds;
use skirmish_core::types::Position;

use crate::player::Roster;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    units: Vec<Entity>,
    spawners: Vec<Entity>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[Entity] {
        &self.units
    }

    pub fn spawners(&self) -> &[Entity] {
        &self.spawners
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty() && self.spawners.is_empty()
    }

    pub fn clear(&mut self) {
        self.units.clear();
        self.spawners.clear();
    }

    /// Pick owned units strictly inside the ground rectangle spanned by the
    /// two corners; if there are none, owned spawners instead. When nothing
    /// qualifies the selection is left as it was. Returns whether it changed.
    pub fn select_area(
        &mut self,
        world: &World,
        roster: &Roster,
        corner_a: Vec3,
        corner_b: Vec3,
    ) -> bool {
        let bounds = GroundBounds::from_corners(corner_a, corner_b);

        let units: Vec<Entity> = roster
            .units()
            .iter()
            .copied()
            .filter(|&u| is_selectable_unit(world, roster, u))
            .filter(|&u| position_of(world, u).is_some_and(|p| bounds.contains_strict(p)))
            .collect();
        if !units.is_empty() {
            debug!(team = ?roster.team(), count = units.len(), "units selected");
            self.units = units;
            self.spawners.clear();
            return true;
        }

        let spawners: Vec<Entity> = roster
            .spawners()
            .iter()
            .copied()
            .filter(|&s| {
                world
                    .get::<&Spawner>(s)
                    .is_ok_and(|sp| sp.team == roster.team())
            })
            .filter(|&s| position_of(world, s).is_some_and(|p| bounds.contains_strict(p)))
            .collect();
        if !spawners.is_empty() {
            debug!(team = ?roster.team(), count = spawners.len(), "spawners selected");
            self.spawners = spawners;
            self.units.clear();
            return true;
        }

        false
    }

    /// Replace the selection with the given units, keeping only the active
    /// ones the player owns. Returns how many were kept.
    pub fn select_units(&mut self, world: &World, roster: &Roster, units: &[Entity]) -> usize {
        let mut picked = Vec::with_capacity(units.len());
        for &unit in units {
            if is_selectable_unit(world, roster, unit) && !picked.contains(&unit) {
                picked.push(unit);
            }
        }
        self.units = picked;
        self.spawners.clear();
        self.units.len()
    }

    /// Drop units that died or vanished. Returns how many were dropped.
    pub fn retain_active(&mut self, world: &World) -> usize {
        let before = self.units.len();
        self.units
            .retain(|&u| world.contains(u) && world.get::<&Inactive>(u).is_err());
        before - self.units.len()
    }
}

fn is_selectable_unit(world: &World, roster: &Roster, unit: Entity) -> bool {
    let owned = world
        .get::<&UnitIdentity>(unit)
        .is_ok_and(|id| id.team == roster.team());
    owned && world.get::<&Inactive>(unit).is_err()
}

fn position_of(world: &World, entity: Entity) -> Option<Vec3> {
    world.get::<&Position>(entity).ok().map(|p| p.0)
}
