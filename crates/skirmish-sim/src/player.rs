//! Players: what each team owns, has selected, and has armed.

use hecs::Entity;

use skirmish_core::types::Team;

use crate::selection::Selection;
use crate::session::InputSession;

/// Append-only list of a team's units and spawners. Dead units stay listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    team: Team,
    units: Vec<Entity>,
    spawners: Vec<Entity>,
}

impl Roster {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            units: Vec::new(),
            spawners: Vec::new(),
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn add_unit(&mut self, unit: Entity) {
        if !self.units.contains(&unit) {
            self.units.push(unit);
        }
    }

    pub fn add_spawner(&mut self, spawner: Entity) {
        if !self.spawners.contains(&spawner) {
            self.spawners.push(spawner);
        }
    }

    /// Units in the order they joined.
    pub fn units(&self) -> &[Entity] {
        &self.units
    }

    pub fn spawners(&self) -> &[Entity] {
        &self.spawners
    }
}

/// Per-team state the engine keeps between ticks.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub roster: Roster,
    pub selection: Selection,
    pub session: InputSession,
}

impl Player {
    pub fn new(team: Team) -> Self {
        Self {
            roster: Roster::new(team),
            selection: Selection::new(),
            session: InputSession::new(),
        }
    }

    pub fn team(&self) -> Team {
        self.roster.team()
    }
}
