//! Drawing — renders a snapshot to the screen as flat-colored
//! rectangles plus HUD text, matching the original look.

use macroquad::prelude::*;

use sidescroll_core::enums::GamePhase;
use sidescroll_core::state::{GameStateSnapshot, RectView};

/// Draw one frame from the latest snapshot.
pub fn draw(snapshot: &GameStateSnapshot) {
    clear_background(SKYBLUE);

    for platform in &snapshot.platforms {
        draw_rect(platform, DARKGREEN);
    }
    for coin in &snapshot.coins {
        draw_rect(coin, GOLD);
    }
    for hurdle in &snapshot.hurdles {
        draw_rect(hurdle, RED);
    }

    let player = &snapshot.player;
    draw_rectangle(
        player.x as f32,
        player.y as f32,
        player.width as f32,
        player.height as f32,
        GREEN,
    );

    draw_text(&format!("Score: {}", snapshot.score), 20.0, 40.0, 32.0, BLACK);

    let center_x = snapshot.world.width as f32 / 2.0;
    let center_y = snapshot.world.height as f32 / 2.0;
    match snapshot.phase {
        GamePhase::Ready => {
            draw_centered(center_x, center_y, "PRESS ENTER TO START", 48.0, BLACK);
        }
        GamePhase::Paused => {
            draw_centered(center_x, center_y, "PAUSED", 48.0, BLACK);
        }
        GamePhase::GameOver => {
            draw_centered(center_x, center_y, "GAME OVER!", 64.0, RED);
            draw_centered(center_x, center_y + 50.0, "press R to restart", 32.0, BLACK);
        }
        GamePhase::Active => {}
    }
}

fn draw_rect(rect: &RectView, color: Color) {
    draw_rectangle(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
        color,
    );
}

fn draw_centered(center_x: f32, y: f32, text: &str, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - dims.width / 2.0, y, font_size, color);
}
