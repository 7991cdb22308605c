//! Events module - input dispatch and redraw requests
//!
//! This module provides:
//! - One handler trait per input role, plus the display role
//! - `with_redraw` to request a redraw after each input handler
//! - `EventDispatcher` that routes toolkit input to the handlers
//! - Translation from egui events

mod dispatch;
mod handlers;
mod input;

pub use dispatch::EventDispatcher;
#[allow(unused_imports)]
pub use dispatch::InputEvent;
pub use handlers::{DisplayHandler, FlowerInput};
#[allow(unused_imports)]
pub use handlers::{
    with_redraw, ButtonState, KeyPress, KeyboardHandler, MouseButton, MouseClick, MouseHandler,
    RequestRedraw, SpecialKey, SpecialKeyPress, SpecialKeyboardHandler,
};
pub use input::{to_pixel, translate};
