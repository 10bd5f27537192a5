//! Cleanup system: drops dead units from player selections.
//!
//! Dead units are never despawned. They stay in the world, marked
//! `Inactive`, so rosters and contact lists never hold dangling entities.

use hecs::World;

use crate::selection::Selection;

/// Remove inactive units from every selection. Returns how many were removed.
pub fn run<'a>(
    world: &World,
    selections: impl IntoIterator<Item = &'a mut Selection>,
) -> usize {
    selections
        .into_iter()
        .map(|selection| selection.retain_active(world))
        .sum()
}
