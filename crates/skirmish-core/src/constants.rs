//! Simulation constants and tuning defaults.
//!
//! Most of these seed `RulesConfig` defaults and can be overridden there.

/// Default simulation tick rate (Hz) for drivers that run a fixed step.
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at the default tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Input ---

/// Two move commands closer than this (seconds) count as a double click.
pub const TIME_FOR_DOUBLE_CLICK: f64 = 0.2;

// --- Movement ---

/// A unit within this distance of its destination has arrived.
pub const ARRIVAL_TOLERANCE: f32 = 1e-3;

/// Nominal ground height used for the selection center.
pub const GROUND_HEIGHT: f32 = 1.0;

// --- Spawning ---

/// Distance behind a spawner (along -z) where new units appear.
pub const SPAWN_RADIUS: f32 = 1.0;

// --- Unit defaults ---

pub const DEFAULT_MAX_HEALTH: i32 = 10;
pub const DEFAULT_ATTACK_RANGE: f32 = 5.0;
pub const DEFAULT_ATTACK_DAMAGE: i32 = 1;
pub const DEFAULT_TIME_BETWEEN_ATTACKS: f32 = 1.0;
pub const DEFAULT_MOVE_SPEED: f32 = 3.0;

// --- Action panel hotkeys ---

pub const HOTKEY_MOVE: char = 'M';
pub const HOTKEY_STOP: char = 'S';
pub const HOTKEY_PATROL: char = 'P';
pub const HOTKEY_ATTACK: char = 'A';
pub const HOTKEY_RALLY: char = 'R';
pub const HOTKEY_END_RALLY: char = 'X';
