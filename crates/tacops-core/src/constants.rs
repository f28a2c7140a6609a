//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Milliseconds per tick.
pub const TICK_MS: u32 = 1000 / TICK_RATE;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Convert a millisecond duration from the catalog into whole ticks.
/// All catalog durations are multiples of TICK_MS.
pub const fn ms_to_ticks(ms: u32) -> u32 {
    ms / TICK_MS
}

// --- World geometry ---

/// Arena width in world units.
pub const WORLD_WIDTH: f32 = 800.0;

/// Arena height in world units.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Enemies are confined to the upper portion of the arena while moving.
pub const ENEMY_AREA_HEIGHT: f32 = 400.0;

/// New enemies spawn within this band from the top edge.
pub const ENEMY_SPAWN_BAND: f32 = 200.0;

/// The player's fixed firing position, bottom-center of the arena.
pub const PLAYER_X: f32 = 400.0;
pub const PLAYER_Y: f32 = 500.0;

// --- Player ---

/// Base max health before outfit bonuses.
pub const PLAYER_BASE_HEALTH: i32 = 100;

// --- Enemy AI ---

/// Distance below which an enemy commits to attacking.
pub const ATTACK_RANGE: f32 = 200.0;

/// Distance below which an enemy takes cover (no fire, no course change).
pub const COVER_RANGE: f32 = 300.0;

/// Per-tick probability that a patrolling enemy picks a new heading.
pub const PATROL_TURN_CHANCE: f64 = 0.02;

/// Speed multiplier while in the attack state.
pub const ATTACK_SPEED_FACTOR: f32 = 1.2;

/// Minimum time between shots for a single enemy.
pub const ENEMY_FIRE_COOLDOWN_MS: u32 = 1500;

/// Enemy bullet speed, world units per tick.
pub const ENEMY_BULLET_SPEED: f32 = 8.0;

// --- Combat ---

/// Bullet hit radius against enemies and the player.
pub const HIT_RADIUS: f32 = 30.0;

/// Bullet hit radius against allies.
pub const ALLY_HIT_RADIUS: f32 = 25.0;

/// Melee cone half-width in radians (~28.6 degrees either side of aim).
pub const MELEE_CONE_HALF_ANGLE: f32 = 0.5;

// --- Scoring ---

/// Score for killing an enemy with a projectile.
pub const KILL_SCORE: u32 = 100;

/// Score for killing an enemy with the knife.
pub const MELEE_KILL_SCORE: u32 = 150;

/// Score for clearing a wave.
pub const WAVE_CLEAR_SCORE: u32 = 500;

/// Score for completing an ally revive.
pub const REVIVE_SCORE: u32 = 200;

// --- Waves ---

/// Delay between clearing a wave and the next spawn.
pub const WAVE_BREAK_MS: u32 = 2000;

/// Clearing this wave ends the session in victory.
pub const FINAL_WAVE: u32 = 10;

// --- Allies ---

/// Fixed ally spawn positions, flanking the player.
pub const ALLY_SPAWN_POSITIONS: [(f32, f32); 2] = [(300.0, 480.0), (520.0, 480.0)];

/// Ally max health.
pub const ALLY_MAX_HEALTH: i32 = 100;

/// Total duration of a revive action; it cancels if incomplete by then.
pub const REVIVE_DURATION_MS: u32 = 2000;

/// Interval between revive progress increments.
pub const REVIVE_STEP_MS: u32 = 200;

/// Progress gained per revive step (percent).
pub const REVIVE_STEP_PERCENT: u32 = 10;

/// Progress at which a revive completes.
pub const REVIVE_COMPLETE: u32 = 100;
