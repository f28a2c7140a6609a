#[cfg(test)]
mod tests {
    use crate::catalog::*;
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::GameOver,
            GamePhase::Victory,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_kind_serde() {
        let variants = vec![WeaponKind::Pistol, WeaponKind::Rifle, WeaponKind::Knife];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_state_serde() {
        let variants = vec![EnemyState::Patrol, EnemyState::Cover, EnemyState::Attack];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_tagged_serde() {
        let cmd = PlayerCommand::StartGame {
            difficulty: Difficulty::Hard,
            outfit: Some(OutfitKind::Sniper),
            squad: true,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"StartGame\""), "got {json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            PlayerCommand::StartGame {
                difficulty: Difficulty::Hard,
                outfit: Some(OutfitKind::Sniper),
                squad: true,
            }
        ));
    }

    #[test]
    fn test_start_game_optional_fields_default() {
        // The frontend may omit outfit/squad entirely.
        let json = r#"{"type":"StartGame","difficulty":"Normal"}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::StartGame {
                difficulty: Difficulty::Normal,
                outfit: None,
                squad: false,
            }
        ));
    }

    #[test]
    fn test_game_event_tagged_serde() {
        let event = GameEvent::EnemyKilled {
            enemy_id: 7,
            melee: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"EnemyKilled\""), "got {json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            GameEvent::EnemyKilled {
                enemy_id: 7,
                melee: true
            }
        ));
    }

    #[test]
    fn test_snapshot_omits_allies_when_absent() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("allies"), "got {json}");
    }

    // ---- Types ----

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_position_bearing() {
        let origin = Position::new(400.0, 500.0);
        // Straight up the screen (smaller y) is -pi/2.
        let up = Position::new(400.0, 100.0);
        assert!((origin.bearing_to(&up) + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        // Straight right is 0.
        let right = Position::new(800.0, 500.0);
        assert!(origin.bearing_to(&right).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_from_bearing() {
        let v = Velocity::from_bearing(0.0, 10.0);
        assert!((v.x - 10.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
        assert!((v.speed() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Constants & catalog ----

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(50), 1);
        assert_eq!(ms_to_ticks(500), 10);
        assert_eq!(ms_to_ticks(1500), 30);
        assert_eq!(ms_to_ticks(2000), 40);
    }

    #[test]
    fn test_catalog_durations_align_to_ticks() {
        for kind in [WeaponKind::Pistol, WeaponKind::Rifle, WeaponKind::Knife] {
            let w = weapon_profile(kind);
            assert_eq!(w.fire_rate_ms % TICK_MS, 0, "{kind:?} fire rate");
            assert_eq!(w.reload_ms % TICK_MS, 0, "{kind:?} reload");
        }
        assert_eq!(WAVE_BREAK_MS % TICK_MS, 0);
        assert_eq!(REVIVE_STEP_MS % TICK_MS, 0);
        assert_eq!(REVIVE_DURATION_MS % TICK_MS, 0);
        assert_eq!(ENEMY_FIRE_COOLDOWN_MS % TICK_MS, 0);
    }

    #[test]
    fn test_weapon_profiles() {
        let pistol = weapon_profile(WeaponKind::Pistol);
        assert_eq!(pistol.damage, 50);
        assert_eq!(pistol.ammo_capacity, 12);
        assert!(!pistol.is_melee());

        let rifle = weapon_profile(WeaponKind::Rifle);
        assert_eq!(rifle.fire_rate_ticks(), 3);
        assert_eq!(rifle.reload_ticks(), 50);

        let knife = weapon_profile(WeaponKind::Knife);
        assert!(knife.is_melee());
        assert_eq!(knife.range, 100.0);
        assert_eq!(knife.ammo_capacity, KNIFE_AMMO_SENTINEL);
    }

    #[test]
    fn test_difficulty_profiles_scale() {
        let easy = difficulty_profile(Difficulty::Easy);
        let normal = difficulty_profile(Difficulty::Normal);
        let hard = difficulty_profile(Difficulty::Hard);
        assert!(easy.enemy_health < normal.enemy_health);
        assert!(normal.enemy_health < hard.enemy_health);
        assert!(easy.enemies_per_wave < hard.enemies_per_wave);
    }

    #[test]
    fn test_wave_enemy_count() {
        // 5 + floor(wave/2) on normal.
        assert_eq!(wave_enemy_count(Difficulty::Normal, 1), 5);
        assert_eq!(wave_enemy_count(Difficulty::Normal, 4), 7);
        assert_eq!(wave_enemy_count(Difficulty::Hard, 1), 7);
    }

    #[test]
    fn test_outfit_profiles() {
        let none = outfit_profile(None);
        assert_eq!(none.health_bonus, 0);
        assert_eq!(none.damage_bonus_pct, 0);

        let medic = outfit_profile(Some(OutfitKind::Medic));
        assert!(medic.damage_bonus_pct < 0, "medic trades damage for health");

        let sniper = outfit_profile(Some(OutfitKind::Sniper));
        assert!(sniper.damage_bonus_pct > 0);
    }
}
