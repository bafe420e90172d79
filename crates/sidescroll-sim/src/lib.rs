//! Headless game engine for the sidescroll game.
//!
//! Owns the ECS world and runs the per-tick systems. Has no dependency
//! on any windowing framework, enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

#[cfg(test)]
mod tests;
