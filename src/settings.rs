use std::path::{Path, PathBuf};

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Viewport;

/// Returns the path to the window configuration: `~/.config/flower/window.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("flower");
    path.push("window.json");
    path
}

/// How frames are presented
///
/// Colors are always RGBA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Present as soon as the frame is flushed
    Single,
    /// Present in step with the display refresh
    Double,
}

/// Parameters used to create the window.
///
/// Read once at startup and never written back. Fields use
/// `#[serde(default)]` so a file may override only some of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub title: String,
    pub display_mode: DisplayMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            position_x: 100,
            position_y: 50,
            title: "Untitled".to_string(),
            display_mode: DisplayMode::Single,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Load the configuration file, falling back to `fallback` on any error.
    ///
    /// Fields missing from the file keep their value from `fallback`.
    pub fn load_or(fallback: Self) -> Self {
        Self::load_from(&settings_path(), fallback)
    }

    fn load_from(path: &Path, fallback: Self) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::overlay(&contents, &fallback) {
                Ok(config) => {
                    log::info!("Loaded window configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse window configuration ({}), using defaults", e);
                    fallback
                }
            },
            Err(e) => {
                log::info!("No window configuration found ({}), using defaults", e);
                fallback
            }
        }
    }

    /// Fields present in `contents` replace those of `fallback`
    fn overlay(contents: &str, fallback: &Self) -> serde_json::Result<Self> {
        let mut merged = serde_json::to_value(fallback)?;
        let serde_json::Value::Object(file) = serde_json::from_str(contents)? else {
            return Err(serde::de::Error::custom("expected a JSON object"));
        };
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(file);
        }
        serde_json::from_value(merged)
    }

    /// Size of the window's drawing area
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Fails if the window would have a non-positive dimension
    pub fn validate(&self) -> Result<()> {
        self.viewport().validate()
    }

    /// Options handed to eframe when the window is created
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width as f32, self.height as f32])
                .with_position([self.position_x as f32, self.position_y as f32])
                .with_title(self.title.clone()),
            vsync: self.display_mode == DisplayMode::Double,
            ..Default::default()
        }
    }
}
