//! Error types

use thiserror::Error;

/// Errors raised while setting up the window or drawing a frame
#[derive(Error, Debug)]
pub enum FlowerError {
    /// Viewport dimensions must both be strictly positive
    #[error("Invalid viewport {width}x{height}: dimensions must be positive")]
    InvalidViewport { width: i32, height: i32 },

    /// The windowing toolkit failed to start
    #[error("Failed to run window: {0}")]
    Window(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, FlowerError>;
