//! Orders system: steps every living unit's state machine once.
//!
//! Units read each other through a table captured at the start of the
//! system, so the order in which units step does not change what they see.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_core::components::{Inactive, UnitStats};
use skirmish_core::config::RulesConfig;
use skirmish_core::events::SimEvent;
use skirmish_core::types::Position;
use skirmish_orders::{Battlefield, Contacts, StepContext, UnitOrders};

/// Start-of-tick position and liveness of every unit.
#[derive(Debug, Default)]
pub struct FieldTable {
    units: HashMap<Entity, (Vec3, bool)>,
}

impl FieldTable {
    pub fn capture(world: &World) -> Self {
        let units = world
            .query::<(&Position, &UnitOrders, Option<&Inactive>)>()
            .iter()
            .map(|(entity, (pos, _, inactive))| (entity, (pos.0, inactive.is_none())))
            .collect();
        Self { units }
    }
}

impl Battlefield for FieldTable {
    fn is_active(&self, unit: Entity) -> bool {
        self.units.get(&unit).is_some_and(|&(_, active)| active)
    }

    fn position_of(&self, unit: Entity) -> Option<Vec3> {
        self.units.get(&unit).map(|&(pos, _)| pos)
    }
}

/// Step every living unit. Strikes and lifecycle events go to `events`.
pub fn run(world: &mut World, dt: f32, rules: &RulesConfig, events: &mut Vec<SimEvent>) {
    let table = FieldTable::capture(world);

    for (unit, (pos, stats, orders, contacts, inactive)) in world.query_mut::<(
        &mut Position,
        &UnitStats,
        &mut UnitOrders,
        &mut Contacts,
        Option<&Inactive>,
    )>() {
        if inactive.is_some() {
            continue;
        }
        let ctx = StepContext {
            unit,
            stats: *stats,
            field: &table,
            dt,
            arrival_tolerance: rules.arrival_tolerance,
            directive_timeout_secs: rules.directive_timeout_secs,
        };
        orders.step(&ctx, &mut pos.0, contacts, events);
    }
}
