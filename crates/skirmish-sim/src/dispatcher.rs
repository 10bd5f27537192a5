//! Group command dispatcher.
//!
//! Turns a move, patrol, or attack order for a whole selection into one
//! directive per unit. A multi-unit order keeps the group's shape (each
//! unit keeps its offset from the selection center) unless the target is
//! strictly inside the group's own footprint. A quick second move command
//! overrides that and sends everyone to the same point.

use glam::Vec3;
use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::Inactive;
use skirmish_core::config::RulesConfig;
use skirmish_core::geometry::{ground_center, GroundBounds};
use skirmish_core::types::Position;
use skirmish_orders::UnitOrders;

use crate::error::CommandError;
use crate::session::DoubleClickTimer;

/// A selected unit that can still take orders, with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Member {
    pub entity: Entity,
    pub position: Vec3,
}

/// The live part of a selection: units that exist, take orders, and are
/// not dead, in selection order.
pub fn active_members(world: &World, selection: &[Entity]) -> Vec<Member> {
    selection
        .iter()
        .filter(|&&entity| world.get::<&Inactive>(entity).is_err())
        .filter(|&&entity| world.get::<&UnitOrders>(entity).is_ok())
        .filter_map(|&entity| {
            world.get::<&Position>(entity).ok().map(|p| Member {
                entity,
                position: p.0,
            })
        })
        .collect()
}

/// True unless `point` lies strictly inside the x/z bounding box of the
/// group. A point on the box edge, or any point for a group whose box has
/// no area, counts as a formation move.
pub fn is_formation_move(members: &[Member], point: Vec3) -> bool {
    match GroundBounds::from_points(members.iter().map(|m| m.position)) {
        Some(bounds) => !bounds.contains_strict(point),
        None => false,
    }
}

/// Mean x/z of the group at `ground_height`.
pub fn selection_center(members: &[Member], ground_height: f32) -> Option<Vec3> {
    ground_center(members.iter().map(|m| m.position), ground_height)
}

/// Send the selection to `target`. Only multi-unit moves consult the
/// double-click timer, and they always do, so the timer is updated even
/// when the formation check would have failed anyway.
pub fn move_units(
    world: &mut World,
    selection: &[Entity],
    target: Vec3,
    timer: &mut DoubleClickTimer,
    now: f64,
    rules: &RulesConfig,
) -> Result<usize, CommandError> {
    let members = active_members(world, selection);
    let formation = match members.len() {
        0 => return Err(CommandError::EmptySelection),
        1 => false,
        _ => {
            let double = timer.double_clicked(now, rules.time_for_double_click);
            !double && is_formation_move(&members, target)
        }
    };
    let plan = destinations(&members, target, formation, rules.ground_height);
    debug!(units = plan.len(), formation, ?target, "move order");
    for (member, dest) in plan {
        with_orders(world, member.entity, |orders| {
            orders.set_destination(dest, member.position.y)
        });
    }
    Ok(members.len())
}

/// Patrol the selection between where each unit stands and `target`.
pub fn patrol_units(
    world: &mut World,
    selection: &[Entity],
    target: Vec3,
    rules: &RulesConfig,
) -> Result<usize, CommandError> {
    let members = active_members(world, selection);
    let formation = group_formation(&members, target)?;
    let plan = destinations(&members, target, formation, rules.ground_height);
    debug!(units = plan.len(), formation, ?target, "patrol order");
    for (member, dest) in plan {
        with_orders(world, member.entity, |orders| {
            orders.set_patrol(member.position, dest)
        });
    }
    Ok(members.len())
}

/// Attack-move the selection to `target`.
pub fn attack_units(
    world: &mut World,
    selection: &[Entity],
    target: Vec3,
    rules: &RulesConfig,
) -> Result<usize, CommandError> {
    let members = active_members(world, selection);
    let formation = group_formation(&members, target)?;
    let plan = destinations(&members, target, formation, rules.ground_height);
    debug!(units = plan.len(), formation, ?target, "attack order");
    for (member, dest) in plan {
        with_orders(world, member.entity, |orders| {
            orders.set_attack_move(dest, member.position.y)
        });
    }
    Ok(members.len())
}

/// Stop every selected unit at once.
pub fn stop_units(world: &mut World, selection: &[Entity]) -> Result<usize, CommandError> {
    let members = active_members(world, selection);
    if members.is_empty() {
        return Err(CommandError::EmptySelection);
    }
    for member in &members {
        with_orders(world, member.entity, UnitOrders::stop);
    }
    Ok(members.len())
}

/// Formation check for orders without the double-click override.
fn group_formation(members: &[Member], target: Vec3) -> Result<bool, CommandError> {
    match members.len() {
        0 => Err(CommandError::EmptySelection),
        1 => Ok(false),
        _ => Ok(is_formation_move(members, target)),
    }
}

/// Per-unit destinations: the target itself, or the target shifted by each
/// unit's offset from the selection center.
fn destinations(
    members: &[Member],
    target: Vec3,
    formation: bool,
    ground_height: f32,
) -> Vec<(Member, Vec3)> {
    let center = if formation {
        selection_center(members, ground_height)
    } else {
        None
    };
    members
        .iter()
        .map(|&m| match center {
            Some(c) => (m, target + (m.position - c)),
            None => (m, target),
        })
        .collect()
}

fn with_orders(world: &mut World, entity: Entity, f: impl FnOnce(&mut UnitOrders)) {
    if let Ok(mut orders) = world.get::<&mut UnitOrders>(entity) {
        f(&mut orders);
    }
}
