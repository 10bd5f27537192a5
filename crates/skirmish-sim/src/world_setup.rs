//! Entity spawn factories for setting up the simulation world.
//!
//! A unit is bound to its health, contact list, and orders here, once, at
//! spawn time. Nothing looks those up by name later.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Health, Spawner, UnitIdentity};
use skirmish_core::config::{RulesConfig, UnitTemplate};
use skirmish_core::constants::GROUND_HEIGHT;
use skirmish_core::types::{Position, Team};
use skirmish_orders::{Contacts, UnitOrders};

/// Where each side's base sits in a standard skirmish.
pub const SKIRMISH_BASES: [(Team, Vec3); 2] = [
    (Team(0), Vec3::new(-30.0, GROUND_HEIGHT, 0.0)),
    (Team(1), Vec3::new(30.0, GROUND_HEIGHT, 0.0)),
];

/// Units each side starts with in a standard skirmish.
pub const SKIRMISH_SQUAD_SIZE: usize = 4;

/// What `setup_skirmish` created for one team.
#[derive(Debug, Clone)]
pub struct TeamSetup {
    pub team: Team,
    pub spawner: Entity,
    pub units: Vec<Entity>,
}

/// Spawn a unit of `template` for `team` at `position`, idle and at full health.
pub fn spawn_unit(
    world: &mut World,
    team: Team,
    template: &UnitTemplate,
    position: Vec3,
) -> Entity {
    let stats = template.stats;
    world.spawn((
        Position(position),
        UnitIdentity {
            team,
            name: template.name.clone(),
            hotkey: template.hotkey,
        },
        stats,
        Health::initialize(stats.max_health),
        UnitOrders::new(),
        Contacts::new(),
    ))
}

/// Spawn a spawner standing at `position`.
pub fn spawn_spawner(
    world: &mut World,
    team: Team,
    position: Vec3,
    spawn_radius: f32,
    templates: Vec<String>,
) -> Entity {
    world.spawn((
        Position(position),
        Spawner::new(team, position, spawn_radius, templates),
    ))
}

/// Two opposing bases, each with a spawner that offers every template and a
/// squad scattered around it. Scatter comes from `rng`, so the same seed
/// always lays out the same field.
pub fn setup_skirmish(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &RulesConfig,
) -> Vec<TeamSetup> {
    let catalog: Vec<String> = rules.templates.iter().map(|t| t.name.clone()).collect();

    SKIRMISH_BASES
        .iter()
        .map(|&(team, base)| {
            let spawner = spawn_spawner(world, team, base, rules.spawn_radius, catalog.clone());
            let mut units = Vec::with_capacity(SKIRMISH_SQUAD_SIZE);
            if !rules.templates.is_empty() {
                for i in 0..SKIRMISH_SQUAD_SIZE {
                    let template = &rules.templates[i % rules.templates.len()];
                    let offset = Vec3::new(
                        rng.gen_range(-6.0..6.0),
                        0.0,
                        rng.gen_range(-6.0..6.0),
                    );
                    units.push(spawn_unit(world, team, template, base + offset));
                }
            }
            TeamSetup {
                team,
                spawner,
                units,
            }
        })
        .collect()
}
