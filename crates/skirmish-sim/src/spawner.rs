//! Spawn and rally coordinator.

use glam::Vec3;
use hecs::{Entity, World};
use tracing::{debug, info};

use skirmish_core::components::Spawner;
use skirmish_core::config::RulesConfig;
use skirmish_core::events::SimEvent;
use skirmish_orders::UnitOrders;

use crate::error::CommandError;
use crate::player::Roster;
use crate::world_setup;

/// Produce a `template` unit at the spawner, send it to the rally point,
/// and add it to the roster. The spawner must belong to the roster's team
/// and list the template; otherwise nothing is created.
pub fn spawn_unit(
    world: &mut World,
    spawner: Entity,
    template: &str,
    rules: &RulesConfig,
    roster: &mut Roster,
    events: &mut Vec<SimEvent>,
) -> Result<Entity, CommandError> {
    let spawner_id = spawner.to_bits().get();
    let (team, spawn_position, rally_point) = {
        let Ok(state) = world.get::<&Spawner>(spawner) else {
            return Err(if world.contains(spawner) {
                CommandError::NotASpawner(spawner_id)
            } else {
                CommandError::UnknownEntity(spawner_id)
            });
        };
        if state.team != roster.team() {
            return Err(CommandError::NotOwned {
                entity: spawner_id,
                team: roster.team(),
            });
        }
        if !state.can_spawn(template) {
            return Err(CommandError::UnknownTemplate(template.to_string()));
        }
        (state.team, state.spawn_position, state.rally_point)
    };
    let Some(blueprint) = rules.template(template) else {
        return Err(CommandError::UnknownTemplate(template.to_string()));
    };

    let unit = world_setup::spawn_unit(world, team, blueprint, spawn_position);
    if let Ok(mut orders) = world.get::<&mut UnitOrders>(unit) {
        orders.set_destination(rally_point, spawn_position.y);
    }
    roster.add_unit(unit);

    info!(?team, template, ?unit, "unit spawned");
    events.push(SimEvent::UnitSpawned {
        unit: unit.to_bits().get(),
        spawner: spawner_id,
        template: template.to_string(),
        team,
    });
    Ok(unit)
}

/// Point every selected spawner's rally at `point`.
pub fn set_rally_point(
    world: &mut World,
    spawners: &[Entity],
    point: Vec3,
) -> Result<usize, CommandError> {
    for_each_spawner(world, spawners, |s| s.set_rally_point(point))
}

/// Send every selected spawner's units back to its own spawn position.
pub fn reset_rally_point(world: &mut World, spawners: &[Entity]) -> Result<usize, CommandError> {
    for_each_spawner(world, spawners, Spawner::reset_rally_point)
}

fn for_each_spawner(
    world: &mut World,
    spawners: &[Entity],
    mut f: impl FnMut(&mut Spawner),
) -> Result<usize, CommandError> {
    let mut count = 0;
    for &entity in spawners {
        if let Ok(mut spawner) = world.get::<&mut Spawner>(entity) {
            f(&mut spawner);
            debug!(spawner = ?entity, rally = ?spawner.rally_point, "rally point updated");
            count += 1;
        }
    }
    if count == 0 {
        return Err(CommandError::NoSpawnerSelected);
    }
    Ok(count)
}
