//! Gameplay rules configuration.
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides. `RulesConfig::from_json_str` parses and validates in one go.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::components::UnitStats;
use crate::constants::*;
use crate::error::ConfigError;

/// Tunable gameplay rules shared by the dispatcher, spawners, and units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Max seconds between two move commands that still count as a double click.
    pub time_for_double_click: f64,
    /// Distance at which a unit counts as having reached its destination.
    pub arrival_tolerance: f32,
    /// Height of the selection center.
    pub ground_height: f32,
    /// Distance behind a spawner where new units appear.
    pub spawn_radius: f32,
    /// Give up on a move or attack-move after this many seconds.
    /// `None` keeps walking until superseded.
    pub directive_timeout_secs: Option<f32>,
    /// Unit templates spawners may produce.
    pub templates: Vec<UnitTemplate>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            time_for_double_click: TIME_FOR_DOUBLE_CLICK,
            arrival_tolerance: ARRIVAL_TOLERANCE,
            ground_height: GROUND_HEIGHT,
            spawn_radius: SPAWN_RADIUS,
            directive_timeout_secs: None,
            templates: default_templates(),
        }
    }
}

/// Blueprint for a spawnable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub name: String,
    pub hotkey: char,
    #[serde(default)]
    pub stats: UnitStats,
}

impl RulesConfig {
    /// Parse a JSON rules document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let rules: RulesConfig = serde_json::from_str(json)?;
        rules.validate()?;
        info!(
            templates = rules.templates.len(),
            timeout = ?rules.directive_timeout_secs,
            "rules config loaded"
        );
        Ok(rules)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_for_double_click < 0.0 {
            return Err(ConfigError::Invalid(
                "time_for_double_click must not be negative".into(),
            ));
        }
        if self.arrival_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(
                "arrival_tolerance must be positive".into(),
            ));
        }
        if let Some(timeout) = self.directive_timeout_secs {
            if timeout <= 0.0 {
                return Err(ConfigError::Invalid(
                    "directive_timeout_secs must be positive".into(),
                ));
            }
        }

        let mut names = HashSet::new();
        let mut hotkeys = HashSet::new();
        for template in &self.templates {
            if template.name.is_empty() {
                return Err(ConfigError::Invalid("template with empty name".into()));
            }
            if !names.insert(template.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate template `{}`",
                    template.name
                )));
            }
            let hotkey = template.hotkey.to_ascii_uppercase();
            if hotkey == HOTKEY_RALLY || hotkey == HOTKEY_END_RALLY {
                return Err(ConfigError::Invalid(format!(
                    "template `{}` hotkey `{}` is taken by the spawner panel",
                    template.name, template.hotkey
                )));
            }
            if !hotkeys.insert(hotkey) {
                return Err(ConfigError::Invalid(format!(
                    "hotkey `{}` bound twice",
                    template.hotkey
                )));
            }
            if template.stats.move_speed <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "template `{}` has non-positive move_speed",
                    template.name
                )));
            }
            if template.stats.max_health <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "template `{}` has non-positive max_health",
                    template.name
                )));
            }
            let stats = &template.stats;
            if stats.attack_damage < 0
                || stats.attack_range < 0.0
                || stats.time_between_attacks < 0.0
            {
                return Err(ConfigError::Invalid(format!(
                    "template `{}` has negative attack stats",
                    template.name
                )));
            }
        }
        Ok(())
    }

    /// Look a template up by name.
    pub fn template(&self, name: &str) -> Option<&UnitTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }
}

/// The stock catalog: a baseline infantry unit, a fast fragile scout, and a
/// slow heavy hitter.
fn default_templates() -> Vec<UnitTemplate> {
    vec![
        UnitTemplate {
            name: "Infantry".into(),
            hotkey: 'Q',
            stats: UnitStats::default(),
        },
        UnitTemplate {
            name: "Scout".into(),
            hotkey: 'W',
            stats: UnitStats {
                max_health: 6,
                attack_range: 4.0,
                attack_damage: 1,
                time_between_attacks: 0.75,
                move_speed: 5.0,
            },
        },
        UnitTemplate {
            name: "Heavy".into(),
            hotkey: 'E',
            stats: UnitStats {
                max_health: 20,
                attack_range: 6.0,
                attack_damage: 3,
                time_between_attacks: 2.0,
                move_speed: 2.0,
            },
        },
    ]
}
