//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the per-team players,
//! processes queued player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::config::RulesConfig;
use skirmish_core::enums::{ActionKind, OrderKind};
use skirmish_core::error::ConfigError;
use skirmish_core::events::SimEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::{EntityId, SimTime, Team};

use crate::actions;
use crate::dispatcher;
use crate::error::CommandError;
use crate::player::{Player, Roster};
use crate::selection::Selection;
use crate::session::{ClickOutcome, InputSession};
use crate::spawner;
use crate::systems;
use crate::world_setup::{self, TeamSetup};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub rules: RulesConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: RulesConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON config document and validate its rules.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.rules.validate()?;
        info!(seed = config.seed, "sim config loaded");
        Ok(config)
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rules: RulesConfig,
    rng: ChaCha8Rng,
    players: Vec<Player>,
    command_queue: VecDeque<(Team, PlayerCommand)>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rules: config.rules,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            players: Vec::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    // --- Setup ---

    /// Register a player for `team`. Registering twice is a no-op.
    pub fn add_player(&mut self, team: Team) {
        self.player_mut(team);
    }

    /// Place a spawner for `team` and add it to the team's roster.
    pub fn spawn_spawner(&mut self, team: Team, position: Vec3, templates: Vec<String>) -> Entity {
        let spawner = world_setup::spawn_spawner(
            &mut self.world,
            team,
            position,
            self.rules.spawn_radius,
            templates,
        );
        self.player_mut(team).roster.add_spawner(spawner);
        spawner
    }

    /// Place an idle unit for `team` directly, bypassing spawners.
    pub fn spawn_unit_at(
        &mut self,
        team: Team,
        template: &str,
        position: Vec3,
    ) -> Result<Entity, CommandError> {
        let blueprint = self
            .rules
            .template(template)
            .ok_or_else(|| CommandError::UnknownTemplate(template.to_string()))?;
        let unit = world_setup::spawn_unit(&mut self.world, team, blueprint, position);
        self.player_mut(team).roster.add_unit(unit);
        Ok(unit)
    }

    /// Lay out the standard two-team skirmish from the engine's seed.
    pub fn setup_skirmish(&mut self) -> Vec<TeamSetup> {
        let setups = world_setup::setup_skirmish(&mut self.world, &mut self.rng, &self.rules);
        for setup in &setups {
            let player = self.player_mut(setup.team);
            player.roster.add_spawner(setup.spawner);
            for &unit in &setup.units {
                player.roster.add_unit(unit);
            }
        }
        setups
    }

    // --- Commands ---

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, team: Team, command: PlayerCommand) {
        self.command_queue.push_back((team, command));
    }

    /// Queue multiple commands.
    pub fn queue_commands(
        &mut self,
        team: Team,
        commands: impl IntoIterator<Item = PlayerCommand>,
    ) {
        self.command_queue
            .extend(commands.into_iter().map(|c| (team, c)));
    }

    /// Carry out a command right away instead of at the next tick.
    pub fn execute(&mut self, team: Team, command: PlayerCommand) -> Result<(), CommandError> {
        let index = self
            .player_index(team)
            .ok_or(CommandError::UnknownPlayer(team))?;
        let now = self.time.elapsed_secs;
        let player = &mut self.players[index];
        let world = &mut self.world;
        let rules = &self.rules;
        let events = &mut self.events;

        match command {
            PlayerCommand::SelectArea { corner_a, corner_b } => {
                player
                    .selection
                    .select_area(world, &player.roster, corner_a, corner_b);
            }
            PlayerCommand::SelectUnits { units } => {
                let units = units
                    .into_iter()
                    .map(|id| entity_from_id(world, id))
                    .collect::<Result<Vec<_>, _>>()?;
                player.selection.select_units(world, &player.roster, &units);
            }
            PlayerCommand::ClearSelection => player.selection.clear(),
            PlayerCommand::ArmOrder { order } => player.session.arm(order),
            PlayerCommand::PrimaryClick { point } => {
                if let ClickOutcome::Execute(order) = player.session.primary_click() {
                    run_order(world, rules, player, order, point, now)?;
                }
            }
            PlayerCommand::SecondaryClick { point } => {
                if player.session.secondary_click() == ClickOutcome::MoveUnits {
                    run_order(world, rules, player, OrderKind::Move, point, now)?;
                }
            }
            PlayerCommand::ActivateAction { key } => {
                let panel = actions::panel_for(world, &player.selection, rules);
                let kind = actions::find_action(&panel, key)?.kind.clone();
                match kind {
                    ActionKind::Arm { order } => player.session.arm(order),
                    ActionKind::Stop => {
                        dispatcher::stop_units(world, player.selection.units())?;
                    }
                    ActionKind::EndRally => {
                        spawner::reset_rally_point(world, player.selection.spawners())?;
                    }
                    ActionKind::Spawn { template } => {
                        let first = player
                            .selection
                            .spawners()
                            .first()
                            .copied()
                            .ok_or(CommandError::NoSpawnerSelected)?;
                        spawner::spawn_unit(
                            world,
                            first,
                            &template,
                            rules,
                            &mut player.roster,
                            events,
                        )?;
                    }
                }
            }
            PlayerCommand::MoveUnits { target } => {
                run_order(world, rules, player, OrderKind::Move, target, now)?;
            }
            PlayerCommand::PatrolUnits { target } => {
                run_order(world, rules, player, OrderKind::Patrol, target, now)?;
            }
            PlayerCommand::AttackUnits { target } => {
                run_order(world, rules, player, OrderKind::Attack, target, now)?;
            }
            PlayerCommand::StopUnits => {
                dispatcher::stop_units(world, player.selection.units())?;
            }
            PlayerCommand::SetRallyPoint { point } => {
                run_order(world, rules, player, OrderKind::Rally, point, now)?;
            }
            PlayerCommand::ResetRallyPoint => {
                spawner::reset_rally_point(world, player.selection.spawners())?;
            }
            PlayerCommand::SpawnUnit {
                spawner: spawner_id,
                template,
            } => {
                let entity = entity_from_id(world, spawner_id)?;
                spawner::spawn_unit(world, entity, &template, rules, &mut player.roster, events)?;
            }
        }
        Ok(())
    }

    /// Forward an external detection-volume enter notification.
    pub fn notify_contact_enter(&mut self, observer: Entity, other: Entity) -> bool {
        systems::detection::notify_contact_enter(&mut self.world, observer, other)
    }

    /// Forward an external detection-volume exit notification.
    pub fn notify_contact_exit(&mut self, observer: Entity, other: Entity) -> bool {
        systems::detection::notify_contact_exit(&mut self.world, observer, other)
    }

    // --- Tick ---

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();
        self.run_systems(dt);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.players,
            &self.rules,
            events,
        )
    }

    // --- Accessors ---

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn selection(&self, team: Team) -> Option<&Selection> {
        self.player(team).map(|p| &p.selection)
    }

    pub fn roster(&self, team: Team) -> Option<&Roster> {
        self.player(team).map(|p| &p.roster)
    }

    pub fn session(&self, team: Team) -> Option<&InputSession> {
        self.player(team).map(|p| &p.session)
    }

    fn player(&self, team: Team) -> Option<&Player> {
        self.players.iter().find(|p| p.team() == team)
    }

    fn player_index(&self, team: Team) -> Option<usize> {
        self.players.iter().position(|p| p.team() == team)
    }

    /// The player for `team`, registering it on first use.
    fn player_mut(&mut self, team: Team) -> &mut Player {
        let index = match self.player_index(team) {
            Some(index) => index,
            None => {
                info!(?team, "player joined");
                self.players.push(Player::new(team));
                self.players.len() - 1
            }
        };
        &mut self.players[index]
    }

    /// Process all queued commands. Rejected commands are logged and dropped.
    fn process_commands(&mut self) {
        while let Some((team, command)) = self.command_queue.pop_front() {
            debug!(?team, ?command, "processing command");
            if let Err(error) = self.execute(team, command) {
                warn!(?team, %error, "command rejected");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Detection volumes
        systems::detection::run(&mut self.world);
        // 2. Unit orders
        systems::orders::run(&mut self.world, dt, &self.rules, &mut self.events);
        // 3. Combat (apply strikes, deactivate the dead)
        systems::combat::run(&mut self.world, &mut self.events);
        // 4. Cleanup (selections)
        systems::cleanup::run(
            &self.world,
            self.players.iter_mut().map(|p| &mut p.selection),
        );
    }
}

/// Dispatch an order that needs a target point.
fn run_order(
    world: &mut World,
    rules: &RulesConfig,
    player: &mut Player,
    order: OrderKind,
    point: Vec3,
    now: f64,
) -> Result<(), CommandError> {
    let units = player.selection.units();
    match order {
        OrderKind::Move => {
            let timer = player.session.double_click_mut();
            dispatcher::move_units(world, units, point, timer, now, rules)?;
        }
        OrderKind::Patrol => {
            dispatcher::patrol_units(world, units, point, rules)?;
        }
        OrderKind::Attack => {
            dispatcher::attack_units(world, units, point, rules)?;
        }
        OrderKind::Rally => {
            spawner::set_rally_point(world, player.selection.spawners(), point)?;
        }
    }
    Ok(())
}

fn entity_from_id(world: &World, id: EntityId) -> Result<Entity, CommandError> {
    Entity::from_bits(id)
        .filter(|&e| world.contains(e))
        .ok_or(CommandError::UnknownEntity(id))
}
