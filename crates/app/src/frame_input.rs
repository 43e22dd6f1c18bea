//! Keyboard input collection for one rendered frame.

use game_core::types::Key;
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed, is_key_released};

/// Arrow keys and WASD both map onto the logical direction tokens.
const DIRECTION_BINDINGS: [(KeyCode, Key); 8] = [
    (KeyCode::Up, Key::Up),
    (KeyCode::W, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::S, Key::Down),
    (KeyCode::Left, Key::Left),
    (KeyCode::A, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::D, Key::Right),
];

#[derive(Default)]
pub struct FrameInput {
    pub pressed: Vec<Key>,
    pub released: Vec<Key>,
    pub start_level: Option<u8>,
}

pub fn capture_frame_input() -> FrameInput {
    let mut input = FrameInput::default();

    for token in [Key::Up, Key::Down, Key::Left, Key::Right] {
        let bindings = DIRECTION_BINDINGS.iter().filter(|(_, t)| *t == token);
        let mut any_pressed = false;
        let mut any_released = false;
        let mut any_down = false;
        for (code, _) in bindings {
            any_pressed |= is_key_pressed(*code);
            any_released |= is_key_released(*code);
            any_down |= is_key_down(*code);
        }
        if any_pressed {
            input.pressed.push(token);
        }
        // The token stays held while either bound key is still down.
        if any_released && !any_down {
            input.released.push(token);
        }
    }

    if is_key_pressed(KeyCode::E) {
        input.pressed.push(Key::ReturnToMenu);
    }
    if is_key_pressed(KeyCode::G) {
        input.pressed.push(Key::ToggleGodMode);
    }

    input.start_level = if is_key_pressed(KeyCode::Key1) {
        Some(1)
    } else if is_key_pressed(KeyCode::Key2) {
        Some(2)
    } else if is_key_pressed(KeyCode::Key3) {
        Some(3)
    } else {
        None
    };

    input
}
