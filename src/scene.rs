//! Scene - what gets drawn on every redraw
//!
//! The scene holds the flower (a circle that persists across frames) and
//! draws one fixed circle next to it.
//!
//! ## Rotation
//!
//! After drawing its circle the flower rotates the model-view transform by
//! 10° and immediately resets it. Nothing is drawn in between, so the
//! rotation never shows and the picture is static from frame to frame.

use eframe::egui::Color32;

use crate::error::Result;
use crate::events::DisplayHandler;
use crate::geometry::{PixelPoint, Viewport};
use crate::render::Canvas;
use crate::shapes::{Circle, Shape};

/// Radius of the flower's circle in pixels
pub const FLOWER_RADIUS: i32 = 20;

/// Rotation applied after the flower is drawn, in degrees
pub const FLOWER_ROTATION: f32 = 10.0;

/// Center and radius of the fixed circle
pub const STATIC_CENTER: PixelPoint = PixelPoint::new(200, 200);
pub const STATIC_RADIUS: i32 = 40;

pub const BACKGROUND: Color32 = Color32::WHITE;
pub const FOREGROUND: Color32 = Color32::BLACK;

/// The rotating shape
#[derive(Clone, Debug)]
pub struct Flower {
    center: PixelPoint,
}

impl Flower {
    pub fn new(center: PixelPoint) -> Self {
        Self { center }
    }

    pub fn center(&self) -> PixelPoint {
        self.center
    }

    #[allow(dead_code)]
    pub fn set_center(&mut self, center: PixelPoint) {
        self.center = center;
    }

    /// Draw the flower's circle, then rotate and reset the model-view
    pub fn display(&self, canvas: &mut dyn Canvas, screen: Viewport) -> Result<()> {
        Circle::new(self.center, FLOWER_RADIUS).draw(canvas, screen)?;
        canvas.rotate(FLOWER_ROTATION);
        canvas.load_identity();
        Ok(())
    }
}

/// Everything drawn in one frame
pub struct FlowerScene {
    flower: Flower,
}

impl FlowerScene {
    /// Create a scene whose flower sits at the center of `window`
    pub fn new(window: Viewport) -> Self {
        Self {
            flower: Flower::new(window.center()),
        }
    }

    pub fn flower(&self) -> &Flower {
        &self.flower
    }

    /// Record one complete frame into `canvas`
    ///
    /// `screen` is the size pixel coordinates are normalized against.
    pub fn render_frame(&self, canvas: &mut dyn Canvas, screen: Viewport) -> Result<()> {
        canvas.clear(BACKGROUND);
        canvas.set_color(FOREGROUND);

        self.flower.display(canvas, screen)?;

        let circle = Circle::new(STATIC_CENTER, STATIC_RADIUS);
        log::trace!("Drawing {} at {:?}", circle.name(), circle.center());
        circle.draw(canvas, screen)?;

        canvas.flush();
        Ok(())
    }
}

impl DisplayHandler for FlowerScene {
    fn display(&mut self, canvas: &mut dyn Canvas, screen: Viewport) -> Result<()> {
        self.render_frame(canvas, screen)
    }
}
