//! Detection system: proximity-based enter/exit notifications.
//!
//! Each unit's detection volume is a sphere of its attack range. Only living
//! units are seen, so a unit that dies inside a volume never raises an exit;
//! the orders step prunes it instead.

use glam::Vec3;
use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::{Inactive, UnitIdentity, UnitStats};
use skirmish_core::geometry::distance;
use skirmish_core::types::{Position, Team};
use skirmish_orders::Contacts;

struct Body {
    entity: Entity,
    team: Team,
    position: Vec3,
}

/// Compare every living unit against every living enemy and raise enter and
/// exit notifications on the observer's contact list. Returns how many
/// notifications changed a list.
pub fn run(world: &mut World) -> usize {
    let mut bodies: Vec<Body> = world
        .query::<(&Position, &UnitIdentity, Option<&Inactive>)>()
        .iter()
        .filter(|(_, (_, _, inactive))| inactive.is_none())
        .map(|(entity, (pos, identity, _))| Body {
            entity,
            team: identity.team,
            position: pos.0,
        })
        .collect();
    bodies.sort_by_key(|b| b.entity.id());

    let mut changes = 0;
    for (observer, (pos, identity, stats, contacts, inactive)) in world.query_mut::<(
        &Position,
        &UnitIdentity,
        &UnitStats,
        &mut Contacts,
        Option<&Inactive>,
    )>() {
        if inactive.is_some() {
            continue;
        }
        for other in &bodies {
            if other.entity == observer || other.team == identity.team {
                continue;
            }
            let changed = if distance(pos.0, other.position) <= stats.attack_range {
                contacts.on_enter(identity.team, other.entity, other.team)
            } else {
                contacts.on_exit(identity.team, other.entity, other.team)
            };
            if changed {
                changes += 1;
            }
        }
    }
    if changes > 0 {
        debug!(changes, "contacts updated");
    }
    changes
}

/// An external trigger saw `other` enter `observer`'s volume.
pub fn notify_contact_enter(world: &mut World, observer: Entity, other: Entity) -> bool {
    notify(world, observer, other, Contacts::on_enter)
}

/// An external trigger saw `other` leave `observer`'s volume.
pub fn notify_contact_exit(world: &mut World, observer: Entity, other: Entity) -> bool {
    notify(world, observer, other, Contacts::on_exit)
}

fn notify(
    world: &mut World,
    observer: Entity,
    other: Entity,
    f: fn(&mut Contacts, Team, Entity, Team) -> bool,
) -> bool {
    let Ok(other_team) = world.get::<&UnitIdentity>(other).map(|id| id.team) else {
        return false;
    };
    match world.query_one_mut::<(&UnitIdentity, &mut Contacts)>(observer) {
        Ok((identity, contacts)) => f(contacts, identity.team, other, other_team),
        Err(_) => false,
    }
}
