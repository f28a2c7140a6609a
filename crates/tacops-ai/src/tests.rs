#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use tacops_core::constants::*;
    use tacops_core::enums::EnemyState;
    use tacops_core::types::Position;

    use crate::fsm::{evaluate, move_speed, EnemyContext, EnemyUpdate};

    fn player() -> Position {
        Position::new(PLAYER_X, PLAYER_Y)
    }

    /// Context for an enemy straight above the player at `distance`.
    fn make_context(
        state: EnemyState,
        distance: f32,
        ticks_since_last_shot: Option<u64>,
    ) -> EnemyContext {
        EnemyContext {
            state,
            position: Position::new(PLAYER_X, PLAYER_Y - distance),
            facing: 0.0,
            target: player(),
            distance_to_target: distance,
            ticks_since_last_shot,
        }
    }

    fn eval(ctx: &EnemyContext) -> EnemyUpdate {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        evaluate(ctx, &mut rng)
    }

    #[test]
    fn test_patrol_to_attack_close_range() {
        let ctx = make_context(EnemyState::Patrol, ATTACK_RANGE - 1.0, None);
        let update = eval(&ctx);
        assert!(update.state_changed);
        assert_eq!(update.new_state, EnemyState::Attack);
        // Re-aimed straight down at the player.
        let expected = ctx.position.bearing_to(&player());
        assert!((update.new_facing - expected).abs() < 1e-6);
    }

    #[test]
    fn test_attack_range_boundary() {
        // Exactly at 200: cover, not attack.
        let ctx = make_context(EnemyState::Patrol, ATTACK_RANGE, None);
        let update = eval(&ctx);
        assert_eq!(update.new_state, EnemyState::Cover);
    }

    #[test]
    fn test_cover_band_holds_course_and_fire() {
        let ctx = make_context(EnemyState::Attack, 250.0, None);
        let update = eval(&ctx);
        assert!(update.state_changed);
        assert_eq!(update.new_state, EnemyState::Cover);
        assert_eq!(update.new_facing, ctx.facing, "cover keeps heading");
        assert!(!update.fire);
    }

    #[test]
    fn test_cover_range_boundary() {
        // Exactly at 300: patrol.
        let ctx = make_context(EnemyState::Cover, COVER_RANGE, None);
        let update = eval(&ctx);
        assert_eq!(update.new_state, EnemyState::Patrol);
    }

    #[test]
    fn test_attack_fires_when_cooldown_ready() {
        // Never fired: allowed immediately.
        let ctx = make_context(EnemyState::Attack, 100.0, None);
        assert!(eval(&ctx).fire);

        // Cooldown elapsed exactly: allowed.
        let cooldown = ms_to_ticks(ENEMY_FIRE_COOLDOWN_MS) as u64;
        let ctx = make_context(EnemyState::Attack, 100.0, Some(cooldown));
        assert!(eval(&ctx).fire);
    }

    #[test]
    fn test_attack_holds_fire_during_cooldown() {
        let cooldown = ms_to_ticks(ENEMY_FIRE_COOLDOWN_MS) as u64;
        let ctx = make_context(EnemyState::Attack, 100.0, Some(cooldown - 1));
        let update = eval(&ctx);
        assert_eq!(update.new_state, EnemyState::Attack);
        assert!(!update.fire);
    }

    #[test]
    fn test_no_fire_outside_attack_state() {
        // Cooldown ready but out of attack range: no shot.
        let ctx = make_context(EnemyState::Patrol, 500.0, None);
        assert!(!eval(&ctx).fire);
    }

    #[test]
    fn test_patrol_wander_is_occasional() {
        // Over many evaluations the 2% wander should trigger sometimes,
        // and most ticks should keep the current heading.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ctx = make_context(EnemyState::Patrol, 500.0, None);
        let mut turns = 0;
        let samples = 1000;
        for _ in 0..samples {
            let update = evaluate(&ctx, &mut rng);
            assert_eq!(update.new_state, EnemyState::Patrol);
            if update.new_facing != ctx.facing {
                assert!((0.0..std::f32::consts::TAU).contains(&update.new_facing));
                turns += 1;
            }
        }
        assert!(turns > 0, "wander never triggered in {samples} ticks");
        assert!(turns < samples / 10, "wander triggered {turns} times");
    }

    #[test]
    fn test_patrol_is_deterministic_per_seed() {
        let ctx = make_context(EnemyState::Patrol, 500.0, None);
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..100)
                .map(|_| evaluate(&ctx, &mut rng).new_facing)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_attack_move_speed_boost() {
        assert_eq!(move_speed(EnemyState::Attack, 1.5), 1.5 * ATTACK_SPEED_FACTOR);
        assert_eq!(move_speed(EnemyState::Patrol, 1.5), 1.5);
        assert_eq!(move_speed(EnemyState::Cover, 2.0), 2.0);
    }
}
