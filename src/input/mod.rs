use macroquad::prelude::*;

use crate::application::{FrameInput, InputEvent};

/// Discrete key bindings, checked once per press
const KEY_ACTIONS: [(KeyCode, InputEvent); 5] = [
    (KeyCode::Escape, InputEvent::Quit),
    (KeyCode::Enter, InputEvent::Start),
    (KeyCode::KpEnter, InputEvent::Start),
    (KeyCode::H, InputEvent::ResetCamera),
    (KeyCode::A, InputEvent::CycleAlgorithm),
];

/// Direction of held arrow keys, each axis in -1..=1
pub fn held_pan() -> (i64, i64) {
    let axis = |neg: KeyCode, pos: KeyCode| i64::from(is_key_down(pos)) - i64::from(is_key_down(neg));
    (axis(KeyCode::Left, KeyCode::Right), axis(KeyCode::Up, KeyCode::Down))
}

/// Gather this frame's input from macroquad
pub fn poll() -> FrameInput {
    let mut events: Vec<InputEvent> = KEY_ACTIONS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, event)| *event)
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(InputEvent::Toggle { x, y });
    }

    FrameInput {
        events,
        pan: held_pan(),
    }
}
