//! Translation from egui input events to dispatcher events
//!
//! Character keys arrive as egui `Text` events. Keys that carry a control
//! byte (Enter, Escape, ...) are delivered as key presses with that byte,
//! and navigation/function keys become special key presses.
//!
//! Vertical wheel motion is reported as a press and release of a wheel
//! button at the pointer, one pair per egui wheel event.

use eframe::egui::{self, Key, PointerButton, Pos2};

use super::dispatch::InputEvent;
use super::handlers::{
    ButtonState, KeyPress, MouseButton, MouseClick, SpecialKey, SpecialKeyPress,
};
use crate::geometry::PixelPoint;

/// Round a window position (in points) to a pixel position
pub fn to_pixel(pos: Pos2) -> PixelPoint {
    PixelPoint::new(pos.x.round() as i32, pos.y.round() as i32)
}

/// Translate one egui event
///
/// `pointer` is the last known mouse position, reported alongside key
/// presses. Events with no counterpart translate to nothing.
pub fn translate(event: &egui::Event, pointer: PixelPoint) -> Vec<InputEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let click = MouseClick {
                button: mouse_button(*button),
                state: if *pressed {
                    ButtonState::Down
                } else {
                    ButtonState::Up
                },
                position: to_pixel(*pos),
            };
            vec![InputEvent::Mouse(click)]
        }

        egui::Event::Text(text) => text
            .chars()
            .map(|key| InputEvent::Key(KeyPress { key, position: pointer }))
            .collect(),

        egui::Event::MouseWheel { delta, .. } => {
            let button = if delta.y > 0.0 {
                MouseButton::WheelUp
            } else if delta.y < 0.0 {
                MouseButton::WheelDown
            } else {
                return Vec::new();
            };
            [ButtonState::Down, ButtonState::Up]
                .into_iter()
                .map(|state| {
                    InputEvent::Mouse(MouseClick {
                        button,
                        state,
                        position: pointer,
                    })
                })
                .collect()
        }

        egui::Event::Key { key, pressed: true, .. } => {
            if let Some(c) = control_char(*key) {
                return vec![InputEvent::Key(KeyPress {
                    key: c,
                    position: pointer,
                })];
            }
            match special_key(*key) {
                Some(key) => vec![InputEvent::SpecialKey(SpecialKeyPress {
                    key,
                    position: pointer,
                })],
                None => Vec::new(),
            }
        }

        _ => Vec::new(),
    }
}

fn mouse_button(button: PointerButton) -> MouseButton {
    match button {
        PointerButton::Primary => MouseButton::Left,
        PointerButton::Middle => MouseButton::Middle,
        PointerButton::Secondary => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

/// Keys delivered as ASCII control bytes
fn control_char(key: Key) -> Option<char> {
    let byte = match key {
        Key::Backspace => 8,
        Key::Tab => 9,
        Key::Enter => 13,
        Key::Escape => 27,
        Key::Delete => 127,
        _ => return None,
    };
    Some(char::from(byte))
}

fn special_key(key: Key) -> Option<SpecialKey> {
    let special = match key {
        Key::F1 => SpecialKey::F(1),
        Key::F2 => SpecialKey::F(2),
        Key::F3 => SpecialKey::F(3),
        Key::F4 => SpecialKey::F(4),
        Key::F5 => SpecialKey::F(5),
        Key::F6 => SpecialKey::F(6),
        Key::F7 => SpecialKey::F(7),
        Key::F8 => SpecialKey::F(8),
        Key::F9 => SpecialKey::F(9),
        Key::F10 => SpecialKey::F(10),
        Key::F11 => SpecialKey::F(11),
        Key::F12 => SpecialKey::F(12),
        Key::ArrowLeft => SpecialKey::Left,
        Key::ArrowUp => SpecialKey::Up,
        Key::ArrowRight => SpecialKey::Right,
        Key::ArrowDown => SpecialKey::Down,
        Key::PageUp => SpecialKey::PageUp,
        Key::PageDown => SpecialKey::PageDown,
        Key::Home => SpecialKey::Home,
        Key::End => SpecialKey::End,
        Key::Insert => SpecialKey::Insert,
        _ => return None,
    };
    Some(special)
}
