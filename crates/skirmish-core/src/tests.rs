#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::components::{Health, Spawner, UnitStats};
    use crate::config::RulesConfig;
    use crate::constants::*;
    use crate::enums::OrderKind;
    use crate::error::ConfigError;
    use crate::geometry::{at_height, ground_center, move_towards, GroundBounds};
    use crate::types::{Position, SimTime, Team};

    // ---- Geometry ----

    #[test]
    fn test_bounds_strictly_inside() {
        let bounds = GroundBounds::from_points([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
        ])
        .unwrap();
        assert!(bounds.contains_strict(Vec3::new(5.0, 0.0, 5.0)));
        assert!(!bounds.contains_strict(Vec3::new(0.0, 0.0, 5.0)), "boundary is outside");
        assert!(!bounds.contains_strict(Vec3::new(10.0, 0.0, 10.0)), "corner is outside");
        assert!(!bounds.contains_strict(Vec3::new(15.0, 0.0, 5.0)));
    }

    #[test]
    fn test_bounds_degenerate_column() {
        // Units at (0,0) and (0,10): the box has zero width in x.
        let bounds = GroundBounds::from_points([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        ])
        .unwrap();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 0.0);
        assert!(!bounds.contains_strict(Vec3::new(0.0, 0.0, 5.0)));
        assert!(!bounds.contains_strict(Vec3::new(0.5, 0.0, 5.0)));
    }

    #[test]
    fn test_bounds_ignore_height() {
        let bounds = GroundBounds::from_points([
            Vec3::new(-2.0, 100.0, -2.0),
            Vec3::new(2.0, -100.0, 2.0),
        ])
        .unwrap();
        assert!(bounds.contains_strict(Vec3::new(0.0, 5000.0, 0.0)));
    }

    #[test]
    fn test_bounds_from_no_points() {
        assert!(GroundBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounds_from_corners_any_order() {
        let a = GroundBounds::from_corners(Vec3::new(5.0, 0.0, -5.0), Vec3::new(-5.0, 0.0, 5.0));
        let b = GroundBounds::from_corners(Vec3::new(-5.0, 0.0, 5.0), Vec3::new(5.0, 0.0, -5.0));
        assert_eq!(a, b);
        assert_eq!(a.min_x, -5.0);
        assert_eq!(a.max_z, 5.0);
    }

    #[test]
    fn test_ground_center_uses_nominal_height() {
        let center = ground_center(
            [
                Vec3::new(0.0, 3.0, 0.0),
                Vec3::new(4.0, 7.0, 2.0),
                Vec3::new(2.0, 9.0, 4.0),
            ],
            GROUND_HEIGHT,
        )
        .unwrap();
        assert_eq!(center, Vec3::new(2.0, GROUND_HEIGHT, 2.0));
        assert!(ground_center(std::iter::empty(), GROUND_HEIGHT).is_none());
    }

    #[test]
    fn test_move_towards_caps_step_and_lands_on_target() {
        let start = Vec3::ZERO;
        let target = Vec3::new(10.0, 0.0, 0.0);
        let step = move_towards(start, target, 3.0);
        assert!((step - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);

        let last = move_towards(Vec3::new(9.0, 0.0, 0.0), target, 3.0);
        assert_eq!(last, target, "overshoot should snap to the target");

        assert_eq!(move_towards(target, target, 3.0), target);
    }

    #[test]
    fn test_at_height_keeps_ground_coordinates() {
        assert_eq!(
            at_height(Vec3::new(1.0, 50.0, -2.0), 0.5),
            Vec3::new(1.0, 0.5, -2.0)
        );
    }

    // ---- Health ----

    #[test]
    fn test_health_reports_the_killing_blow_once() {
        let mut health = Health::initialize(3);
        assert_eq!(health.current, 3);
        assert!(!health.take_damage(2));
        assert!(health.take_damage(2), "third point of damage kills");
        assert!(health.is_depleted());
        assert!(!health.take_damage(1), "already dead");
    }

    // ---- Spawner ----

    #[test]
    fn test_spawner_rally_defaults_and_resets_to_spawn_point() {
        let mut spawner = Spawner::new(
            Team(1),
            Vec3::new(10.0, 0.0, 10.0),
            SPAWN_RADIUS,
            vec!["Infantry".into()],
        );
        assert_eq!(spawner.spawn_position, Vec3::new(10.0, 0.0, 9.0));
        assert_eq!(spawner.rally_point, spawner.spawn_position);

        spawner.set_rally_point(Vec3::new(30.0, 0.0, 30.0));
        assert_eq!(spawner.rally_point, Vec3::new(30.0, 0.0, 30.0));
        assert_eq!(spawner.spawn_position, Vec3::new(10.0, 0.0, 9.0));

        spawner.reset_rally_point();
        assert_eq!(spawner.rally_point, spawner.spawn_position);

        assert!(spawner.can_spawn("Infantry"));
        assert!(!spawner.can_spawn("Scout"));
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advances_by_dt() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, u64::from(TICK_RATE));
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    // ---- Config ----

    #[test]
    fn test_default_rules_are_valid() {
        let rules = RulesConfig::default();
        rules.validate().unwrap();
        assert_eq!(rules.time_for_double_click, 0.2);
        assert!(rules.directive_timeout_secs.is_none());
        assert_eq!(rules.template("Infantry").unwrap().stats, UnitStats::default());
    }

    #[test]
    fn test_rules_partial_override() {
        let rules = RulesConfig::from_json_str(
            r#"{
                "time_for_double_click": 0.35,
                "directive_timeout_secs": 30.0,
                "templates": [
                    { "name": "Knight", "hotkey": "K", "stats": { "move_speed": 4.5 } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(rules.time_for_double_click, 0.35);
        assert_eq!(rules.directive_timeout_secs, Some(30.0));
        assert_eq!(rules.spawn_radius, SPAWN_RADIUS);

        let knight = rules.template("Knight").unwrap();
        assert_eq!(knight.stats.move_speed, 4.5);
        assert_eq!(knight.stats.max_health, DEFAULT_MAX_HEALTH);
        assert!(rules.template("Infantry").is_none());
    }

    #[test]
    fn test_rules_reject_duplicate_hotkeys() {
        let err = RulesConfig::from_json_str(
            r#"{ "templates": [
                { "name": "A", "hotkey": "q" },
                { "name": "B", "hotkey": "Q" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
    }

    #[test]
    fn test_rules_reject_hotkeys_taken_by_spawner_panel() {
        for key in ["R", "r", "X", "x"] {
            let json = format!(r#"{{ "templates": [{{ "name": "Ranger", "hotkey": "{key}" }}] }}"#);
            let err = RulesConfig::from_json_str(&json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "hotkey {key}: got {err}");
        }
        // Unit panel keys never share a panel with templates.
        RulesConfig::from_json_str(r#"{ "templates": [{ "name": "Archer", "hotkey": "A" }] }"#)
            .unwrap();
    }

    #[test]
    fn test_rules_reject_negative_attack_stats() {
        for stats in [
            r#"{ "attack_damage": -3 }"#,
            r#"{ "attack_range": -1.0 }"#,
            r#"{ "time_between_attacks": -0.5 }"#,
        ] {
            let json = format!(r#"{{ "templates": [{{ "name": "Rogue", "hotkey": "G", "stats": {stats} }}] }}"#);
            let err = RulesConfig::from_json_str(&json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{stats}: got {err}");
        }
        // Zero damage and zero cooldown are allowed.
        RulesConfig::from_json_str(
            r#"{ "templates": [{ "name": "Pacifist", "hotkey": "G",
                 "stats": { "attack_damage": 0, "time_between_attacks": 0.0 } }] }"#,
        )
        .unwrap();
    }

    #[test]
    fn test_rules_reject_bad_timeout_and_tolerance() {
        let err = RulesConfig::from_json_str(r#"{ "directive_timeout_secs": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = RulesConfig::from_json_str(r#"{ "arrival_tolerance": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rules_parse_error() {
        let err = RulesConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_position_serializes_as_plain_vector() {
        let position = Position::new(1.0, 2.0, -3.0);
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, "[1.0,2.0,-3.0]");
        let parsed: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, position);
        assert_eq!(parsed.0, Vec3::new(1.0, 2.0, -3.0));
    }

    // ---- Commands ----

    #[test]
    fn test_command_wire_format_is_tagged() {
        let cmd = PlayerCommand::ArmOrder {
            order: OrderKind::Patrol,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "ArmOrder");
        assert_eq!(json["order"], "Patrol");

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"MoveUnits","target":[1.0,0.0,-4.0]}"#).unwrap();
        assert_eq!(
            parsed,
            PlayerCommand::MoveUnits {
                target: Vec3::new(1.0, 0.0, -4.0)
            }
        );
    }
}
