//! Fixed-step drive of the simulation from variable-rate rendered frames.

use game_core::Game;
use game_core::types::{GamePhase, Key};

/// The design-target simulation step; the core's rules count frames at
/// this rate.
pub const SIM_STEP: f64 = 1.0 / 60.0;
/// Cap a stalled frame so the accumulator cannot spiral.
const MAX_FRAME_TIME: f64 = 0.25;

#[derive(Default)]
pub struct AppState {
    accumulator: f64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward one rendered frame's input edges, then run as many fixed
    /// simulation steps as the elapsed time covers.
    pub fn advance(
        &mut self,
        game: &mut Game,
        pressed: &[Key],
        released: &[Key],
        start_level: Option<u8>,
        frame_dt: f64,
    ) {
        if let Some(number) = start_level
            && game.phase() == GamePhase::Menu
        {
            // Number keys outside 1..=3 are simply ignored.
            let _ = game.start_level(number);
        }
        for key in pressed {
            game.key_down(*key);
        }
        for key in released {
            game.key_up(*key);
        }

        self.accumulator += frame_dt.min(MAX_FRAME_TIME);
        while self.accumulator >= SIM_STEP {
            game.tick(SIM_STEP);
            self.accumulator -= SIM_STEP;
        }
    }
}
