//! Per-unit order state machine.
//!
//! `UnitOrders` holds the unit status, the running directive, and the
//! directive held while the unit fights. Each tick the owner calls `step`
//! once; new commands replace the running directive immediately and the
//! replaced one is simply dropped. Every step re-checks that the running
//! directive still matches the unit status before acting on it.

use glam::Vec3;
use hecs::Entity;
use tracing::{debug, warn};

use skirmish_core::components::UnitStats;
use skirmish_core::enums::UnitStatus;
use skirmish_core::events::SimEvent;
use skirmish_core::geometry::{at_height, distance, move_towards};

use crate::contacts::Contacts;
use crate::directive::{Directive, PatrolLeg, StepOutcome};

/// Read-only view of the other units on the field.
pub trait Battlefield {
    /// False once a unit died (or never existed).
    fn is_active(&self, unit: Entity) -> bool;
    /// Current position of a unit, if it exists.
    fn position_of(&self, unit: Entity) -> Option<Vec3>;
}

/// Everything a step needs besides the unit's own mutable state.
pub struct StepContext<'a, B: Battlefield + ?Sized> {
    pub unit: Entity,
    pub stats: UnitStats,
    pub field: &'a B,
    /// Seconds since the previous tick.
    pub dt: f32,
    pub arrival_tolerance: f32,
    /// Abandon moves and attack-moves that run longer than this.
    pub directive_timeout_secs: Option<f32>,
}

/// Status plus the running and held directives of one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitOrders {
    status: UnitStatus,
    current: Option<Directive>,
    held: Option<Directive>,
}

/// What a directive step asks the state machine to do next.
enum Transition {
    Stay,
    Arrived(Vec3),
    TimedOut,
    Engage(Entity),
    Resume,
    Superseded,
}

impl UnitOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> UnitStatus {
        self.status
    }

    pub fn current(&self) -> Option<&Directive> {
        self.current.as_ref()
    }

    pub fn held(&self) -> Option<&Directive> {
        self.held.as_ref()
    }

    /// Number of directives currently running. Never more than one.
    pub fn active_directive_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    // --- Commands ---

    /// Cancel whatever the unit is doing and stand still.
    pub fn stop(&mut self) {
        self.status = UnitStatus::Idle;
        self.current = None;
        self.held = None;
    }

    /// Walk to `target` at the unit's current height.
    pub fn set_destination(&mut self, target: Vec3, current_height: f32) {
        self.start(Directive::MoveTo {
            target: at_height(target, current_height),
            elapsed: 0.0,
        });
    }

    /// Walk back and forth between `origin` and `dest`, starting toward `dest`.
    pub fn set_patrol(&mut self, origin: Vec3, dest: Vec3) {
        self.start(Directive::Patrol {
            origin,
            dest,
            leg: PatrolLeg::Outbound,
        });
    }

    /// Walk to `target` at the unit's current height, fighting on the way.
    pub fn set_attack_move(&mut self, target: Vec3, current_height: f32) {
        self.start(Directive::AttackMove {
            target: at_height(target, current_height),
            elapsed: 0.0,
        });
    }

    fn start(&mut self, directive: Directive) {
        self.stop();
        self.status = directive.status();
        self.current = Some(directive);
    }

    // --- Stepping ---

    /// Advance the running directive by one tick.
    ///
    /// Moves `position`, prunes and reads `contacts`, and pushes strikes and
    /// lifecycle events into `events`. Strikes are not applied here; the
    /// caller applies them once every unit has stepped.
    /// When the target of an attack is gone, the held attack-move is
    /// restored and stepped in the same call.
    pub fn step<B: Battlefield + ?Sized>(
        &mut self,
        ctx: &StepContext<'_, B>,
        position: &mut Vec3,
        contacts: &mut Contacts,
        events: &mut Vec<SimEvent>,
    ) -> StepOutcome {
        let status = self.status;
        let Some(directive) = self.current.as_mut() else {
            return StepOutcome::Done;
        };

        let transition = if directive.status() != status {
            Transition::Superseded
        } else {
            match directive {
                Directive::MoveTo { target, elapsed } => {
                    walk(ctx, position, *target, elapsed)
                }
                Directive::Patrol { origin, dest, leg } => {
                    patrol(ctx, position, *origin, *dest, leg)
                }
                Directive::AttackMove { target, elapsed } => {
                    contacts.prune(|unit| ctx.field.is_active(unit));
                    match contacts.first() {
                        Some(enemy) => Transition::Engage(enemy),
                        None => walk(ctx, position, *target, elapsed),
                    }
                }
                Directive::Attack { enemy, cooldown } => {
                    attack(ctx, position, *enemy, cooldown, events)
                }
            }
        };

        let resumed = matches!(transition, Transition::Resume);
        self.apply(transition, ctx, events);

        // A resumed attack-move keeps walking this tick.
        if resumed && self.current.is_some() {
            return self.step(ctx, position, contacts, events);
        }

        if self.current.is_some() {
            StepOutcome::Continue
        } else {
            StepOutcome::Done
        }
    }

    fn apply<B: Battlefield + ?Sized>(
        &mut self,
        transition: Transition,
        ctx: &StepContext<'_, B>,
        events: &mut Vec<SimEvent>,
    ) {
        let unit = ctx.unit.to_bits().get();
        match transition {
            Transition::Stay => {}
            Transition::Arrived(position) => {
                debug!(unit = ?ctx.unit, ?position, "arrived");
                self.stop();
                events.push(SimEvent::Arrived { unit, position });
            }
            Transition::TimedOut => {
                warn!(unit = ?ctx.unit, status = ?self.status, "directive timed out");
                self.stop();
                events.push(SimEvent::DirectiveTimedOut { unit });
            }
            Transition::Engage(enemy) => {
                debug!(unit = ?ctx.unit, ?enemy, "target acquired");
                self.held = self.current.take();
                self.status = UnitStatus::Attacking;
                self.current = Some(Directive::Attack {
                    enemy,
                    cooldown: 0.0,
                });
                events.push(SimEvent::TargetAcquired {
                    unit,
                    target: enemy.to_bits().get(),
                });
            }
            Transition::Resume => match self.held.take() {
                Some(held) => {
                    debug!(unit = ?ctx.unit, "target gone, resuming attack-move");
                    self.status = held.status();
                    self.current = Some(held);
                    if let Some(destination) = held.destination() {
                        events.push(SimEvent::AttackResumed { unit, destination });
                    }
                }
                None => self.stop(),
            },
            Transition::Superseded => {
                self.current = None;
            }
        }
    }
}

/// Advance toward `target`; report arrival or timeout.
fn walk<B: Battlefield + ?Sized>(
    ctx: &StepContext<'_, B>,
    position: &mut Vec3,
    target: Vec3,
    elapsed: &mut f32,
) -> Transition {
    if advance(ctx, position, target) {
        return Transition::Arrived(target);
    }
    *elapsed += ctx.dt;
    match ctx.directive_timeout_secs {
        Some(limit) if *elapsed >= limit => Transition::TimedOut,
        _ => Transition::Stay,
    }
}

/// Walk the current leg; turn around at either end.
fn patrol<B: Battlefield + ?Sized>(
    ctx: &StepContext<'_, B>,
    position: &mut Vec3,
    origin: Vec3,
    dest: Vec3,
    leg: &mut PatrolLeg,
) -> Transition {
    let waypoint = match leg {
        PatrolLeg::Outbound => dest,
        PatrolLeg::Return => origin,
    };
    let waypoint = at_height(waypoint, position.y);
    if advance(ctx, position, waypoint) {
        *leg = leg.flipped();
    }
    Transition::Stay
}

/// Chase `enemy` into range, strike when the cooldown allows, and let the
/// cooldown run down every tick.
fn attack<B: Battlefield + ?Sized>(
    ctx: &StepContext<'_, B>,
    position: &mut Vec3,
    enemy: Entity,
    cooldown: &mut f32,
    events: &mut Vec<SimEvent>,
) -> Transition {
    if !ctx.field.is_active(enemy) {
        return Transition::Resume;
    }
    let Some(enemy_position) = ctx.field.position_of(enemy) else {
        return Transition::Resume;
    };

    if distance(enemy_position, *position) > ctx.stats.attack_range {
        *position = move_towards(*position, enemy_position, ctx.stats.move_speed * ctx.dt);
    } else if *cooldown <= 0.0 {
        events.push(SimEvent::Strike {
            attacker: ctx.unit.to_bits().get(),
            target: enemy.to_bits().get(),
            damage: ctx.stats.attack_damage,
        });
        *cooldown = ctx.stats.time_between_attacks;
    }

    if *cooldown > 0.0 {
        *cooldown -= ctx.dt;
    }
    Transition::Stay
}

/// One tick of movement toward `target`. True once within tolerance, in
/// which case the position is snapped onto the target.
fn advance<B: Battlefield + ?Sized>(
    ctx: &StepContext<'_, B>,
    position: &mut Vec3,
    target: Vec3,
) -> bool {
    *position = move_towards(*position, target, ctx.stats.move_speed * ctx.dt);
    if distance(*position, target) <= ctx.arrival_tolerance {
        *position = target;
        true
    } else {
        false
    }
}
