use app::app_loop::AppState;
use game_core::Game;
use macroquad::prelude::{get_frame_time, next_frame};

mod frame_input;
mod render;
mod window_config;

use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    let seed = macroquad::miniquad::date::now().to_bits();
    let mut game = Game::new(seed);
    let mut app_state = AppState::new();

    loop {
        let input = frame_input::capture_frame_input();
        app_state.advance(
            &mut game,
            &input.pressed,
            &input.released,
            input.start_level,
            get_frame_time() as f64,
        );
        render::draw_frame(&game.snapshot());
        next_frame().await
    }
}
