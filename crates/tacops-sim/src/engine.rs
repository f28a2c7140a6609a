//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the session state,
//! processes player commands, runs all systems in a fixed order each
//! tick, advances pending timed actions, and produces
//! `GameStateSnapshot`s. It is also the session controller: the only
//! place that changes `GamePhase`.

use std::collections::VecDeque;

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tacops_core::catalog::weapon_profile;
use tacops_core::commands::PlayerCommand;
use tacops_core::components::{AllyStatus, EnemyBrain, Health, Projectile, UnitId};
use tacops_core::constants::*;
use tacops_core::enums::{Difficulty, GamePhase, OutfitKind, WeaponKind};
use tacops_core::errors::Rejection;
use tacops_core::events::GameEvent;
use tacops_core::state::GameStateSnapshot;
use tacops_core::types::{Position, SimTime};

use tacops_combat::damage::{apply_damage, computed_damage};
use tacops_combat::hit::melee_hit;

use crate::player::PlayerState;
use crate::systems;
use crate::timers::{PendingTimer, TimedAction};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same session.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    difficulty: Difficulty,
    squad: bool,
    score: u32,
    wave: u32,
    player: PlayerState,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    pending_timers: Vec<PendingTimer>,
    pending_events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            difficulty: Difficulty::default(),
            squad: false,
            score: 0,
            wave: 0,
            player: PlayerState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            pending_timers: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.pending_events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.difficulty,
            self.score,
            self.wave,
            &self.player,
            self.squad,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of enemies still standing.
    pub fn enemies_remaining(&self) -> usize {
        self.world.query::<&EnemyBrain>().iter().count()
    }

    /// Process all queued commands, discarding rejections (policy no-ops).
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(rejection) = self.apply_command(command.clone()) {
                log::debug!("{command:?} rejected: {rejection}");
            }
        }
    }

    /// Validate and apply a single player command.
    ///
    /// Rejections are silent no-ops at the UI boundary; they are returned
    /// here so tests can observe exactly why a command did nothing.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), Rejection> {
        match command {
            PlayerCommand::StartGame {
                difficulty,
                outfit,
                squad,
            } => self.start_game(difficulty, outfit, squad),
            PlayerCommand::FireAt { x, y } => self.fire_at(x, y),
            PlayerCommand::Reload => self.start_reload(),
            PlayerCommand::SwitchWeapon { weapon } => self.switch_weapon(weapon),
            PlayerCommand::StartRevive { ally_id } => self.start_revive(ally_id),
            PlayerCommand::ReturnToMenu => self.return_to_menu(),
        }
    }

    // --- Commands ---

    fn start_game(
        &mut self,
        difficulty: Difficulty,
        outfit: Option<OutfitKind>,
        squad: bool,
    ) -> Result<(), Rejection> {
        if self.phase != GamePhase::Menu {
            return Err(Rejection::NotInMenu);
        }

        self.world = World::new();
        self.next_unit_id = 0;
        self.time = SimTime::default();
        self.difficulty = difficulty;
        self.squad = squad;
        self.player = PlayerState::new(outfit);
        self.score = 0;
        self.wave = 1;
        self.pending_timers.clear();

        if squad {
            world_setup::spawn_allies(&mut self.world, &mut self.next_unit_id);
        }
        let enemy_count = world_setup::spawn_wave(
            &mut self.world,
            &mut self.rng,
            &mut self.next_unit_id,
            self.wave,
            self.difficulty,
        );
        self.pending_events.push(GameEvent::WaveSpawned {
            wave: self.wave,
            enemy_count,
        });

        self.phase = GamePhase::Playing;
        log::info!(
            "session started: {difficulty:?}, outfit {outfit:?}, squad {squad}, {enemy_count} enemies"
        );
        Ok(())
    }

    fn fire_at(&mut self, x: f32, y: f32) -> Result<(), Rejection> {
        if self.phase != GamePhase::Playing {
            return Err(Rejection::NotPlaying);
        }
        if self.player.reviving.is_some() {
            return Err(Rejection::ReviveBusy);
        }

        let weapon = self.player.weapon_profile();
        let now = self.time.tick;
        if !self.player.shot_ready(now) {
            return Err(Rejection::FireCooldown);
        }
        if !weapon.is_melee() {
            if self.player.reloading {
                return Err(Rejection::Reloading);
            }
            if self.player.ammo == 0 {
                return Err(Rejection::OutOfAmmo);
            }
        }

        // The shot clock starts here: even a knife swing at a point beyond
        // reach consumes the cooldown (reference behavior).
        self.player.last_shot_tick = Some(now);

        let target = Position::new(x, y);
        let aim = self.player.position.bearing_to(&target);

        if weapon.is_melee() {
            if self.player.position.distance_to(&target) > weapon.range {
                return Err(Rejection::MeleeOutOfRange);
            }
            self.resolve_melee(aim);
        } else {
            let spread = (self.rng.gen::<f32>() - 0.5) * weapon.spread;
            world_setup::spawn_bullet(
                &mut self.world,
                &mut self.next_unit_id,
                self.player.position,
                aim + spread,
                weapon.bullet_speed,
                true,
            );
            self.player.ammo -= 1;
        }
        Ok(())
    }

    /// Knife swing: damages every enemy in the cone synchronously, no
    /// projectile entity.
    fn resolve_melee(&mut self, aim: f32) {
        let weapon = self.player.weapon_profile();
        let outfit = tacops_core::catalog::outfit_profile(self.player.outfit);
        let damage = computed_damage(&weapon, &outfit);

        let hits: Vec<(hecs::Entity, u32)> = {
            let mut query = self.world.query::<(&UnitId, &Position, &EnemyBrain)>();
            query
                .iter()
                .filter(|(_, (_, pos, _))| {
                    melee_hit(&self.player.position, aim, pos, &weapon)
                })
                .map(|(entity, (unit, _, _))| (entity, unit.id))
                .collect()
        };

        for (enemy, enemy_id) in hits {
            let dead = match self.world.get::<&mut Health>(enemy) {
                Ok(mut health) => {
                    health.current = apply_damage(health.current, damage);
                    health.current == 0
                }
                Err(_) => false,
            };
            if dead {
                let _ = self.world.despawn(enemy);
                self.score += MELEE_KILL_SCORE;
                self.pending_events.push(GameEvent::EnemyKilled {
                    enemy_id,
                    melee: true,
                });
            }
        }
    }

    fn start_reload(&mut self) -> Result<(), Rejection> {
        if self.phase != GamePhase::Playing {
            return Err(Rejection::NotPlaying);
        }
        let weapon = self.player.weapon_profile();
        if self.player.reloading {
            return Err(Rejection::Reloading);
        }
        if weapon.is_melee() {
            return Err(Rejection::MeleeReload);
        }
        if self.player.ammo == weapon.ammo_capacity {
            return Err(Rejection::AmmoFull);
        }

        self.player.reloading = true;
        self.pending_timers
            .push(PendingTimer::new(TimedAction::Reload, weapon.reload_ticks()));
        Ok(())
    }

    fn switch_weapon(&mut self, weapon: WeaponKind) -> Result<(), Rejection> {
        if self.phase != GamePhase::Playing {
            return Err(Rejection::NotPlaying);
        }
        // Reference behavior: no swapping mid-reload.
        if self.player.reloading {
            return Err(Rejection::Reloading);
        }

        self.player.weapon = weapon;
        self.player.ammo = weapon_profile(weapon).ammo_capacity;
        Ok(())
    }

    fn start_revive(&mut self, ally_id: u32) -> Result<(), Rejection> {
        if self.phase != GamePhase::Playing {
            return Err(Rejection::NotPlaying);
        }
        if !self.squad {
            return Err(Rejection::SquadDisabled);
        }
        if self.player.reviving.is_some() {
            return Err(Rejection::ReviveBusy);
        }

        let (_, status) = self.find_ally(ally_id).ok_or(Rejection::UnknownAlly)?;
        if !status.downed {
            return Err(Rejection::AllyNotDowned);
        }

        self.player.reviving = Some(ally_id);
        self.pending_timers.push(PendingTimer::new(
            TimedAction::Revive { ally_id },
            ms_to_ticks(REVIVE_DURATION_MS),
        ));
        Ok(())
    }

    fn return_to_menu(&mut self) -> Result<(), Rejection> {
        if self.phase == GamePhase::Menu {
            return Err(Rejection::AlreadyInMenu);
        }

        self.world = World::new();
        self.next_unit_id = 0;
        self.time = SimTime::default();
        self.player = PlayerState::default();
        self.score = 0;
        self.wave = 0;
        self.squad = false;
        self.pending_timers.clear();
        self.phase = GamePhase::Menu;
        log::info!("returned to menu");
        Ok(())
    }

    // --- Tick pipeline ---

    /// Run all systems in order. Within a tick: bullets move before AI
    /// runs, and AI runs before collisions are resolved — an enemy killed
    /// this tick still got its chance to fire and move first.
    fn run_systems(&mut self) {
        // 1. Advance bullets; cull out-of-bounds.
        systems::movement::run(&mut self.world, &mut self.despawn_buffer);

        // Snapshot the bullet set now: bullets the AI spawns below are not
        // moved or collision-tested until the next tick.
        let live_bullets: Vec<hecs::Entity> = self
            .world
            .query::<&Projectile>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();

        // 2. Enemy AI: state transitions, fire, movement.
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_unit_id,
            self.time.tick,
            &self.player.position,
        );

        // 3. Collision resolution.
        let outcome = systems::collision::run(
            &mut self.world,
            &live_bullets,
            &mut self.player,
            self.difficulty,
        );
        self.score += outcome.score_gained;
        self.pending_events.extend(outcome.events);
        if outcome.player_died {
            self.on_player_death();
            return;
        }

        // 4. Pending timed actions (reload, revive, wave break).
        self.advance_timers();

        // 5. Wave-clear watcher.
        self.check_wave_clear();
    }

    fn on_player_death(&mut self) {
        self.phase = GamePhase::GameOver;
        self.pending_timers.clear();
        self.player.reviving = None;
        self.pending_events.push(GameEvent::GameOver {
            score: self.score,
            wave: self.wave,
        });
        log::info!("game over at wave {}, score {}", self.wave, self.score);
    }

    /// Count down every pending timer and apply expiries. Leaving the
    /// Playing phase mid-pass (victory) cancels everything outstanding.
    fn advance_timers(&mut self) {
        let mut pending = std::mem::take(&mut self.pending_timers);
        let mut keep = Vec::with_capacity(pending.len());

        for mut timer in pending.drain(..) {
            if self.phase != GamePhase::Playing {
                break;
            }
            let expired = timer.advance();
            match timer.action {
                TimedAction::Reload => {
                    if expired {
                        self.player.ammo = self.player.weapon_profile().ammo_capacity;
                        self.player.reloading = false;
                    } else {
                        keep.push(timer);
                    }
                }
                TimedAction::WaveBreak => {
                    if expired {
                        self.finish_wave_break();
                    } else {
                        keep.push(timer);
                    }
                }
                TimedAction::Revive { ally_id } => {
                    let mut completed = false;
                    if timer.elapsed_ticks % ms_to_ticks(REVIVE_STEP_MS) == 0 {
                        completed = self.step_revive(ally_id);
                    }
                    if completed {
                        self.player.reviving = None;
                    } else if expired {
                        // Hard cap: cancel, leaving partial progress.
                        self.player.reviving = None;
                        log::debug!("revive of ally {ally_id} expired incomplete");
                    } else {
                        keep.push(timer);
                    }
                }
            }
        }

        if self.phase == GamePhase::Playing {
            keep.append(&mut self.pending_timers);
            self.pending_timers = keep;
        } else {
            self.pending_timers.clear();
        }
    }

    /// Advance one revive step. Returns true when the revive completed.
    fn step_revive(&mut self, ally_id: u32) -> bool {
        let Some((entity, _)) = self.find_ally(ally_id) else {
            return true;
        };

        let revived = match self.world.get::<&mut AllyStatus>(entity) {
            Ok(mut status) => {
                if !status.downed {
                    return true;
                }
                status.revive_progress =
                    (status.revive_progress + REVIVE_STEP_PERCENT).min(REVIVE_COMPLETE);
                if status.revive_progress >= REVIVE_COMPLETE {
                    status.downed = false;
                    status.revive_progress = 0;
                    true
                } else {
                    false
                }
            }
            Err(_) => return true,
        };

        if revived {
            if let Ok(mut health) = self.world.get::<&mut Health>(entity) {
                health.current = health.max;
            }
            self.score += REVIVE_SCORE;
            self.pending_events.push(GameEvent::AllyRevived { ally_id });
        }
        revived
    }

    /// Wave break expired: award the clear bonus, then either spawn the
    /// next wave or end the session in victory after the final wave.
    fn finish_wave_break(&mut self) {
        self.score += WAVE_CLEAR_SCORE;

        if self.wave >= FINAL_WAVE {
            self.phase = GamePhase::Victory;
            self.player.reviving = None;
            self.pending_events.push(GameEvent::Victory {
                score: self.score,
                wave: self.wave,
            });
            log::info!("victory at wave {}, score {}", self.wave, self.score);
            return;
        }

        self.wave += 1;
        let enemy_count = world_setup::spawn_wave(
            &mut self.world,
            &mut self.rng,
            &mut self.next_unit_id,
            self.wave,
            self.difficulty,
        );
        self.pending_events.push(GameEvent::WaveSpawned {
            wave: self.wave,
            enemy_count,
        });
        log::info!("wave {} spawned: {enemy_count} enemies", self.wave);
    }

    /// When the arena empties, schedule the between-wave break once.
    fn check_wave_clear(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self
            .pending_timers
            .iter()
            .any(|t| t.action == TimedAction::WaveBreak)
        {
            return;
        }
        if self.enemies_remaining() > 0 {
            return;
        }

        self.pending_events.push(GameEvent::WaveCleared { wave: self.wave });
        self.pending_timers.push(PendingTimer::new(
            TimedAction::WaveBreak,
            ms_to_ticks(WAVE_BREAK_MS),
        ));
    }

    // --- Test support ---

    /// Mutable access to the player state (for test setup).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Force the current wave number (for end-game tests).
    #[cfg(test)]
    pub fn set_wave(&mut self, wave: u32) {
        self.wave = wave;
    }

    /// Remove every enemy (for tests needing a controlled arena).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let enemies: Vec<hecs::Entity> = self
            .world
            .query::<&EnemyBrain>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in enemies {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn an enemy at an exact position (for tests). Returns its id.
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, x: f32, y: f32, health: i32, speed: f32) -> u32 {
        use tacops_core::enums::EnemyState;
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        self.world.spawn((
            UnitId { id },
            Position::new(x, y),
            Health {
                current: health,
                max: health,
            },
            EnemyBrain {
                state: EnemyState::Patrol,
                facing: 0.0,
                speed,
                last_shot_tick: None,
            },
        ));
        id
    }

    /// Spawn an ally at an exact position (for tests). Returns its id.
    #[cfg(test)]
    pub fn spawn_ally_at(&mut self, x: f32, y: f32) -> u32 {
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        self.world.spawn((
            UnitId { id },
            Position::new(x, y),
            Health {
                current: ALLY_MAX_HEALTH,
                max: ALLY_MAX_HEALTH,
            },
            AllyStatus::default(),
        ));
        id
    }

    /// Spawn a bullet with an exact velocity (for tests). Returns its id.
    #[cfg(test)]
    pub fn spawn_bullet_at(&mut self, x: f32, y: f32, vx: f32, vy: f32, friendly: bool) -> u32 {
        use tacops_core::types::Velocity;
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        self.world.spawn((
            UnitId { id },
            Position::new(x, y),
            Velocity::new(vx, vy),
            Projectile { friendly },
        ));
        id
    }

    fn find_ally(&self, ally_id: u32) -> Option<(hecs::Entity, AllyStatus)> {
        let mut query = self.world.query::<(&UnitId, &AllyStatus)>();
        query
            .iter()
            .find(|(_, (unit, _))| unit.id == ally_id)
            .map(|(entity, (_, status))| (entity, *status))
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
