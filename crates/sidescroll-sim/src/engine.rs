//! Game engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no windowing dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use sidescroll_core::commands::PlayerCommand;
use sidescroll_core::components::MoveIntent;
use sidescroll_core::constants::{
    COIN_SPAWN_CHANCE, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, HURDLE_SPAWN_CHANCE,
    MIN_WORLD_HEIGHT, MIN_WORLD_WIDTH,
};
use sidescroll_core::enums::GamePhase;
use sidescroll_core::events::GameEvent;
use sidescroll_core::state::GameStateSnapshot;
use sidescroll_core::types::GameTime;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new game.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same spawn sequence.
    pub seed: u64,
    /// World width in pixels.
    pub world_width: f64,
    /// World height in pixels.
    pub world_height: f64,
    /// Probability of a coin spawning on any given tick.
    pub coin_spawn_chance: f64,
    /// Probability of a hurdle spawning on any given tick.
    pub hurdle_spawn_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            coin_spawn_chance: COIN_SPAWN_CHANCE,
            hurdle_spawn_chance: HURDLE_SPAWN_CHANCE,
        }
    }
}

impl GameConfig {
    /// Bring user-supplied values back into the ranges the engine can
    /// run on. Out-of-range probabilities are clamped (non-finite ones
    /// fall back to the defaults), undersized or non-finite world
    /// dimensions fall back to the defaults.
    fn sanitized(mut self) -> Self {
        self.coin_spawn_chance = sanitize_chance(self.coin_spawn_chance, COIN_SPAWN_CHANCE);
        self.hurdle_spawn_chance = sanitize_chance(self.hurdle_spawn_chance, HURDLE_SPAWN_CHANCE);

        let width_ok = self.world_width.is_finite() && self.world_width >= MIN_WORLD_WIDTH;
        let height_ok = self.world_height.is_finite() && self.world_height >= MIN_WORLD_HEIGHT;
        if !width_ok || !height_ok {
            log::warn!(
                "world size {}x{} unusable, using {}x{}",
                self.world_width,
                self.world_height,
                DEFAULT_WORLD_WIDTH,
                DEFAULT_WORLD_HEIGHT
            );
            self.world_width = DEFAULT_WORLD_WIDTH;
            self.world_height = DEFAULT_WORLD_HEIGHT;
        }

        self
    }
}

fn sanitize_chance(chance: f64, fallback: f64) -> f64 {
    if (0.0..=1.0).contains(&chance) {
        chance
    } else if chance.is_finite() {
        log::warn!("spawn chance {chance} out of range, clamping");
        chance.clamp(0.0, 1.0)
    } else {
        log::warn!("spawn chance {chance} not a probability, using {fallback}");
        fallback
    }
}

/// The game engine. Owns the ECS world and all game state.
pub struct GameEngine {
    world: World,
    config: GameConfig,
    time: GameTime,
    phase: GamePhase,
    score: u32,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new game engine with the given config. Config values
    /// outside the ranges the engine can run on are sanitized first.
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            world: World::new(),
            config,
            time: GameTime::default(),
            phase: GamePhase::default(),
            score: 0,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        // Time advances first so events record the tick number of the
        // snapshot that carries them.
        if self.phase == GamePhase::Active {
            self.time.advance();
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            &self.config,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current game time.
    pub fn time(&self) -> GameTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a coin at an explicit position (for tests).
    #[cfg(test)]
    pub fn spawn_coin_at(&mut self, x: f64, y: f64) -> hecs::Entity {
        world_setup::spawn_coin_at(&mut self.world, x, y)
    }

    /// Spawn a hurdle at an explicit position (for tests).
    #[cfg(test)]
    pub fn spawn_hurdle_at(&mut self, x: f64, y: f64) -> hecs::Entity {
        world_setup::spawn_hurdle_at(&mut self.world, x, y)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Ready | GamePhase::GameOver) {
                    self.reset();
                }
            }
            PlayerCommand::Restart => {
                // Full state reload from any phase.
                self.reset();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::MoveLeft => {
                if self.phase == GamePhase::Active {
                    for (_entity, intent) in self.world.query_mut::<&mut MoveIntent>() {
                        intent.left = true;
                    }
                }
            }
            PlayerCommand::MoveRight => {
                if self.phase == GamePhase::Active {
                    for (_entity, intent) in self.world.query_mut::<&mut MoveIntent>() {
                        intent.right = true;
                    }
                }
            }
            PlayerCommand::Jump => {
                if self.phase == GamePhase::Active {
                    for (_entity, intent) in self.world.query_mut::<&mut MoveIntent>() {
                        intent.jump = true;
                    }
                }
            }
        }
    }

    /// Rebuild the entire game state: fresh world, zero score, tick 0.
    fn reset(&mut self) {
        self.world.clear();
        world_setup::setup_world(&mut self.world, &self.config);
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = GameTime::default();
        self.score = 0;
        self.events.clear();
        self.phase = GamePhase::Active;
        log::info!("game started (seed {})", self.config.seed);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Probabilistic coin/hurdle spawning at the right edge
        systems::spawner::run(&mut self.world, &mut self.rng, &self.config);
        // 2. Player input: walk, clamp to bounds, jump impulses
        systems::player_control::run(&mut self.world, &self.config, &mut self.events);
        // 3. Gravity on jump-capable entities
        systems::physics::apply_gravity(&mut self.world);
        // 4. Euler integration for everything that moves
        systems::movement::run(&mut self.world);
        // 5. Land on platform tops, clamp to the world floor
        systems::physics::resolve_platform_collisions(
            &mut self.world,
            &self.config,
            &mut self.events,
        );
        // 6. Coin pickup and hurdle collision
        let hit_hurdle = systems::collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
            self.time.tick,
        );
        if hit_hurdle {
            self.phase = GamePhase::GameOver;
            log::info!("game over at tick {} with score {}", self.time.tick, self.score);
        }
        // 7. Despawn entities that scrolled off the left edge
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
