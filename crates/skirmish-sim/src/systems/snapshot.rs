//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skirmish_core::components::{Health, Inactive, Spawner, UnitIdentity};
use skirmish_core::config::RulesConfig;
use skirmish_core::events::SimEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime};
use skirmish_orders::UnitOrders;

use crate::actions;
use crate::player::Player;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    players: &[Player],
    rules: &RulesConfig,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        units: build_units(world),
        spawners: build_spawners(world),
        players: players
            .iter()
            .map(|p| build_player(world, p, rules))
            .collect(),
        events,
    }
}

/// Every unit, dead ones included, in entity order.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Position, &UnitIdentity, &Health, &UnitOrders, Option<&Inactive>)>()
        .iter()
        .map(|(entity, (pos, identity, health, orders, inactive))| UnitView {
            id: entity.to_bits().get(),
            team: identity.team,
            name: identity.name.clone(),
            position: pos.0,
            status: orders.status(),
            health: health.current,
            max_health: health.max,
            active: inactive.is_none(),
        })
        .collect();

    units.sort_by_key(|u| u.id);
    units
}

fn build_spawners(world: &World) -> Vec<SpawnerView> {
    let mut spawners: Vec<SpawnerView> = world
        .query::<&Spawner>()
        .iter()
        .map(|(entity, spawner)| SpawnerView {
            id: entity.to_bits().get(),
            team: spawner.team,
            spawn_position: spawner.spawn_position,
            rally_point: spawner.rally_point,
            templates: spawner.templates.clone(),
        })
        .collect();

    spawners.sort_by_key(|s| s.id);
    spawners
}

fn build_player(world: &World, player: &Player, rules: &RulesConfig) -> PlayerView {
    PlayerView {
        team: player.team(),
        selected_units: player
            .selection
            .units()
            .iter()
            .map(|e| e.to_bits().get())
            .collect(),
        selected_spawners: player
            .selection
            .spawners()
            .iter()
            .map(|e| e.to_bits().get())
            .collect(),
        mouse_mode: player.session.mouse_mode(),
        armed_order: player.session.armed(),
        actions: actions::panel_for(world, &player.selection, rules),
    }
}
