//! Game constants and tuning parameters.
//!
//! All motion values are expressed in pixels per tick (the game runs a
//! fixed-step loop, one integration step per tick).

/// Game tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World ---

/// Default world width in pixels.
pub const DEFAULT_WORLD_WIDTH: f64 = 1280.0;

/// Default world height in pixels.
pub const DEFAULT_WORLD_HEIGHT: f64 = 720.0;

/// Thickness of the ground platform (pixels).
pub const GROUND_THICKNESS: f64 = 50.0;

/// Smallest world width the engine accepts. Must fit the player spawn
/// position plus the player sprite.
pub const MIN_WORLD_WIDTH: f64 = 400.0;

/// Smallest world height the engine accepts. Must clear the coin spawn
/// band (COIN_BAND_TOP + COIN_BAND_BOTTOM) with room to spare.
pub const MIN_WORLD_HEIGHT: f64 = 300.0;

// --- Player ---

/// Player sprite width (pixels).
pub const PLAYER_WIDTH: f64 = 50.0;

/// Player sprite height (pixels).
pub const PLAYER_HEIGHT: f64 = 100.0;

/// Horizontal walk speed (pixels per tick).
pub const WALK_SPEED: f64 = 5.0;

/// Downward acceleration (pixels per tick squared).
pub const GRAVITY: f64 = 0.5;

/// Vertical impulse of the first jump (negative = up).
pub const JUMP_IMPULSE: f64 = -12.0;

/// Vertical impulse of the mid-air second jump (stronger than the first).
pub const DOUBLE_JUMP_IMPULSE: f64 = -18.0;

/// Maximum jumps before the player must land again.
pub const MAX_JUMPS: u8 = 2;

/// Player spawn x position (pixels from the left edge).
pub const PLAYER_SPAWN_X: f64 = 50.0;

/// Player spawn clearance above the bottom of the world (pixels).
pub const PLAYER_SPAWN_CLEARANCE: f64 = 150.0;

// --- Scrolling entities ---

/// Leftward scroll speed of coins and hurdles (pixels per tick).
pub const SCROLL_SPEED: f64 = 3.0;

/// Probability of a coin spawning on any given tick.
pub const COIN_SPAWN_CHANCE: f64 = 0.01;

/// Probability of a hurdle spawning on any given tick.
pub const HURDLE_SPAWN_CHANCE: f64 = 0.005;

/// Coin side length (pixels, coins are square).
pub const COIN_SIZE: f64 = 30.0;

/// Hurdle side length (pixels, hurdles are square).
pub const HURDLE_SIZE: f64 = 50.0;

/// Score awarded per collected coin.
pub const COIN_VALUE: u32 = 10;

/// Top margin of the coin spawn band (pixels from the top of the world).
pub const COIN_BAND_TOP: f64 = 100.0;

/// Bottom margin of the coin spawn band (pixels from the bottom of the world).
pub const COIN_BAND_BOTTOM: f64 = 100.0;

/// Distance from the bottom of the world to a hurdle's top edge.
/// Hurdles rest on the ground: GROUND_THICKNESS + HURDLE_SIZE.
pub const HURDLE_GROUND_OFFSET: f64 = GROUND_THICKNESS + HURDLE_SIZE;
