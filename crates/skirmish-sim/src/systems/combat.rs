//! Combat system: applies the tick's strikes and deactivates the dead.

use hecs::{Entity, World};
use tracing::{info, warn};

use skirmish_core::components::{Health, Inactive};
use skirmish_core::events::SimEvent;
use skirmish_core::types::Position;
use skirmish_orders::UnitOrders;

/// Apply every `Strike` in `events`. Units whose health runs out are marked
/// `Inactive`, stopped, and reported with `UnitDestroyed`. Returns how many
/// died.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>) -> usize {
    let strikes: Vec<(Entity, i32)> = events
        .iter()
        .filter_map(|e| match e {
            SimEvent::Strike { target, damage, .. } => {
                Entity::from_bits(*target).map(|t| (t, *damage))
            }
            _ => None,
        })
        .collect();

    let mut killed: Vec<Entity> = Vec::new();
    for (target, damage) in strikes {
        if let Ok(mut health) = world.get::<&mut Health>(target) {
            if health.take_damage(damage) {
                killed.push(target);
            }
        }
    }

    for &unit in &killed {
        let position = world
            .get::<&Position>(unit)
            .map(|p| p.0)
            .unwrap_or_default();
        if let Ok(mut orders) = world.get::<&mut UnitOrders>(unit) {
            orders.stop();
        }
        if let Err(err) = world.insert_one(unit, Inactive) {
            warn!(?unit, %err, "could not deactivate destroyed unit");
        }
        info!(?unit, ?position, "unit destroyed");
        events.push(SimEvent::UnitDestroyed {
            unit: unit.to_bits().get(),
            position,
        });
    }
    killed.len()
}
