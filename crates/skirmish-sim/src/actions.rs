//! Action panel: the hotkey buttons offered for the current selection.
//!
//! Units get Move / Stop / Patrol / Attack. Spawners get Rally / End Rally
//! followed by one button per template the first selected spawner offers.

use hecs::World;

use skirmish_core::components::Spawner;
use skirmish_core::config::RulesConfig;
use skirmish_core::constants::*;
use skirmish_core::enums::{ActionKind, OrderKind};
use skirmish_core::state::ActionSlot;

use crate::error::CommandError;
use crate::selection::Selection;

/// Panel for a selection. An empty selection shows the unit panel.
pub fn panel_for(world: &World, selection: &Selection, rules: &RulesConfig) -> Vec<ActionSlot> {
    if selection.spawners().is_empty() {
        unit_panel()
    } else {
        spawner_panel(world, selection, rules)
    }
}

pub fn unit_panel() -> Vec<ActionSlot> {
    vec![
        slot("Move", HOTKEY_MOVE, ActionKind::Arm { order: OrderKind::Move }),
        slot("Stop", HOTKEY_STOP, ActionKind::Stop),
        slot("Patrol", HOTKEY_PATROL, ActionKind::Arm { order: OrderKind::Patrol }),
        slot("Attack", HOTKEY_ATTACK, ActionKind::Arm { order: OrderKind::Attack }),
    ]
}

pub fn spawner_panel(
    world: &World,
    selection: &Selection,
    rules: &RulesConfig,
) -> Vec<ActionSlot> {
    let mut panel = vec![
        slot("Rally", HOTKEY_RALLY, ActionKind::Arm { order: OrderKind::Rally }),
        slot("End Rally", HOTKEY_END_RALLY, ActionKind::EndRally),
    ];
    let Some(&first) = selection.spawners().first() else {
        return panel;
    };
    if let Ok(spawner) = world.get::<&Spawner>(first) {
        for name in &spawner.templates {
            if let Some(template) = rules.template(name) {
                panel.push(slot(
                    &template.name,
                    template.hotkey,
                    ActionKind::Spawn {
                        template: template.name.clone(),
                    },
                ));
            }
        }
    }
    panel
}

/// The action bound to `key`, ignoring letter case.
pub fn find_action(panel: &[ActionSlot], key: char) -> Result<&ActionSlot, CommandError> {
    panel
        .iter()
        .find(|s| s.hotkey.eq_ignore_ascii_case(&key))
        .ok_or(CommandError::UnboundHotkey(key))
}

fn slot(label: &str, hotkey: char, kind: ActionKind) -> ActionSlot {
    ActionSlot {
        label: label.to_string(),
        hotkey,
        kind,
    }
}
