//! Enemy units inside a unit's detection volume.
//!
//! Filled by enter/exit notifications. Dead units never raise an exit, so
//! readers prune inactive entries before trusting the list.

use hecs::Entity;
use tracing::debug;

use skirmish_core::types::Team;

/// Ordered set of hostile units in range. Insertion order is the
/// target priority: the first contact is attacked first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    units: Vec<Entity>,
}

impl Contacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// A unit entered the volume. Friendly units and units already tracked
    /// are ignored. Returns whether the contact was added.
    pub fn on_enter(&mut self, own_team: Team, other: Entity, other_team: Team) -> bool {
        if other_team == own_team || self.units.contains(&other) {
            return false;
        }
        self.units.push(other);
        debug!(?other, "contact entered");
        true
    }

    /// A unit left the volume. Returns whether it was tracked.
    pub fn on_exit(&mut self, own_team: Team, other: Entity, other_team: Team) -> bool {
        if other_team == own_team {
            return false;
        }
        match self.units.iter().position(|&u| u == other) {
            Some(index) => {
                self.units.remove(index);
                debug!(?other, "contact exited");
                true
            }
            None => false,
        }
    }

    /// Drop every contact `is_active` rejects. Returns how many were dropped.
    pub fn prune(&mut self, mut is_active: impl FnMut(Entity) -> bool) -> usize {
        let before = self.units.len();
        self.units.retain(|&u| is_active(u));
        before - self.units.len()
    }

    /// Highest-priority contact.
    pub fn first(&self) -> Option<Entity> {
        self.units.first().copied()
    }

    pub fn contains(&self, unit: Entity) -> bool {
        self.units.contains(&unit)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.units.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
