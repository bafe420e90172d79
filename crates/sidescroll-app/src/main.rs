//! Sidescroll frontend — a macroquad window driving the headless
//! engine one tick per frame.

mod input;
mod render;

use macroquad::prelude::*;

use sidescroll_core::constants::{DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};
use sidescroll_sim::engine::{GameConfig, GameEngine};

fn window_conf() -> Conf {
    Conf {
        window_title: "Sidescroll".to_owned(),
        window_width: DEFAULT_WORLD_WIDTH as i32,
        window_height: DEFAULT_WORLD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = load_config();
    if config.world_width != DEFAULT_WORLD_WIDTH || config.world_height != DEFAULT_WORLD_HEIGHT {
        request_new_screen_size(config.world_width as f32, config.world_height as f32);
    }

    let mut engine = GameEngine::new(config);
    let mut phase = engine.phase();

    loop {
        let frame = input::sample();
        engine.queue_commands(input::commands(&frame, phase));

        let snapshot = engine.tick();
        phase = snapshot.phase;

        for event in &snapshot.events {
            log::debug!("event: {event:?}");
        }

        render::draw(&snapshot);
        next_frame().await;
    }
}

/// Load the game config from the JSON file given as the first
/// argument, falling back to defaults on any problem.
fn load_config() -> GameConfig {
    let Some(path) = std::env::args().nth(1) else {
        return GameConfig::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                log::info!("loaded config from {path}");
                config
            }
            Err(err) => {
                log::warn!("bad config file {path}: {err}, using defaults");
                GameConfig::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read config file {path}: {err}, using defaults");
            GameConfig::default()
        }
    }
}
