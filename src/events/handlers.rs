//! Handler roles and redraw composition
//!
//! Each kind of input has its own handler trait with a no-op default body.
//! Input handlers are not registered directly: `with_redraw` wraps them so
//! that a redraw is requested every time one returns.

use crate::error::Result;
use crate::geometry::{PixelPoint, Viewport};
use crate::render::Canvas;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// One notch of vertical scrolling, reported as a press then a release
    WheelUp,
    WheelDown,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Down,
    Up,
}

/// A mouse button changed state at a window position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseClick {
    pub button: MouseButton,
    pub state: ButtonState,
    pub position: PixelPoint,
}

/// A character key was pressed
///
/// Control keys arrive as their ASCII byte: Enter is 13, Escape 27.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub position: PixelPoint,
}

/// Keys that do not produce a character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialKey {
    F(u8),
    Left,
    Up,
    Right,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
}

/// A special key was pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialKeyPress {
    pub key: SpecialKey,
    pub position: PixelPoint,
}

pub trait MouseHandler {
    fn on_click(&mut self, _click: MouseClick) {}
}

pub trait KeyboardHandler {
    fn on_press(&mut self, _press: KeyPress) {}
}

pub trait SpecialKeyboardHandler {
    fn on_press(&mut self, _press: SpecialKeyPress) {}
}

/// Draws a frame when the toolkit asks for one
pub trait DisplayHandler {
    fn display(&mut self, canvas: &mut dyn Canvas, screen: Viewport) -> Result<()>;
}

/// Anything that can schedule another call to the display handler
pub trait RequestRedraw {
    fn request_redraw(&self);
}

impl RequestRedraw for eframe::egui::Context {
    fn request_redraw(&self) {
        self.request_repaint();
    }
}

/// Wrap `handler` so a redraw is requested after every call
///
/// The request happens whether or not the handler changed anything.
pub fn with_redraw<E, F, R>(mut handler: F, redraw: R) -> impl FnMut(E)
where
    F: FnMut(E),
    R: RequestRedraw,
{
    move |event: E| {
        handler(event);
        redraw.request_redraw();
    }
}

/// Input handlers for the flower window
///
/// None of them change any state; the redraw that follows is their only
/// effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlowerInput;

impl MouseHandler for FlowerInput {
    fn on_click(&mut self, click: MouseClick) {
        log::debug!(
            "Mouse {:?} {:?} at ({}, {})",
            click.button, click.state, click.position.x, click.position.y
        );
    }
}

impl KeyboardHandler for FlowerInput {
    fn on_press(&mut self, press: KeyPress) {
        log::debug!("Key {:?} at ({}, {})", press.key, press.position.x, press.position.y);
    }
}

impl SpecialKeyboardHandler for FlowerInput {
    fn on_press(&mut self, press: SpecialKeyPress) {
        log::debug!(
            "Special key {:?} at ({}, {})",
            press.key, press.position.x, press.position.y
        );
    }
}
