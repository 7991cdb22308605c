//! flower - draws a flower and a circle on a windowed canvas
//!
//! Every redraw records the scene into a frame and paints it with egui.
//! Mouse, keyboard and special-key input each request another redraw.
//!
//! Pixel coordinates are normalized against the size of the screen the
//! window is on, not the window itself, so shapes land where they would on
//! a full-screen canvas scaled down to the window.

use eframe::egui;

mod error;
mod events;
mod geometry;
mod render;
mod scene;
mod settings;
mod shapes;

use error::Result;
use events::{to_pixel, translate, DisplayHandler, EventDispatcher, FlowerInput};
use geometry::{screen_viewport, Viewport};
use render::{Frame, FrameRecorder, FramePainter};
use scene::FlowerScene;
use settings::WindowConfig;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Starting flower");

    let config = WindowConfig::load_or(WindowConfig::default().with_title("Ex01"));
    config.validate()?;
    log::info!(
        "Window {}x{} at ({}, {}), {:?} buffered",
        config.width,
        config.height,
        config.position_x,
        config.position_y,
        config.display_mode,
    );

    let title = config.title.clone();
    let options = config.native_options();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(FlowerApp::new(cc, &config)))),
    )?;
    Ok(())
}

/// Main application state
struct FlowerApp {
    dispatcher: EventDispatcher<egui::Context>,
    display: Box<dyn DisplayHandler>,
    recorder: FrameRecorder,
    painter: FramePainter,
    /// Used for normalization when the screen size is unknown
    window: Viewport,
    warned_no_monitor: bool,
}

impl FlowerApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &WindowConfig) -> Self {
        let window = config.viewport();

        let mut dispatcher = EventDispatcher::new(cc.egui_ctx.clone());
        dispatcher.set_mouse_handler(FlowerInput);
        dispatcher.set_keyboard_handler(FlowerInput);
        dispatcher.set_special_keyboard_handler(FlowerInput);

        let scene = FlowerScene::new(window);
        log::info!("Flower centered at {:?}", scene.flower().center());

        Self {
            dispatcher,
            display: Box::new(scene),
            recorder: FrameRecorder::new(),
            painter: FramePainter::default(),
            window,
            warned_no_monitor: false,
        }
    }

    /// Size of the monitor the window is on
    fn screen_size(&mut self, ctx: &egui::Context) -> Viewport {
        let monitor = ctx.input(|i| i.viewport().monitor_size);
        if monitor.is_none() && !self.warned_no_monitor {
            log::warn!("Monitor size unavailable, normalizing against the window");
            self.warned_no_monitor = true;
        }
        screen_viewport(monitor, self.window)
    }
}

/// Run the display handler and hand back what it drew
fn record_frame(
    display: &mut dyn DisplayHandler,
    recorder: &mut FrameRecorder,
    screen: Viewport,
) -> Result<Frame> {
    display.display(recorder, screen)?;
    Ok(recorder.take_frame())
}

impl eframe::App for FlowerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Input first: each delivered event requests the next redraw
        let (events, pointer) = ctx.input(|i| (i.events.clone(), i.pointer.latest_pos()));
        let pointer = pointer.map(to_pixel).unwrap_or_default();
        for event in &events {
            for input in translate(event, pointer) {
                self.dispatcher.dispatch(input);
            }
        }

        let screen = self.screen_size(ctx);
        let frame = match record_frame(self.display.as_mut(), &mut self.recorder, screen) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Failed to draw frame: {}", e);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        };
        log::trace!("Presenting {} primitives", frame.primitives.len());

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.painter.paint(ui.painter(), ui.max_rect(), &frame);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowerError;

    const WINDOW: Viewport = Viewport::new(400, 400);

    #[test]
    fn test_record_frame_uses_monitor_size() {
        let mut scene = FlowerScene::new(WINDOW);
        let mut recorder = FrameRecorder::new();
        let screen = screen_viewport(Some(egui::vec2(800.0, 800.0)), WINDOW);

        let frame = record_frame(&mut scene, &mut recorder, screen).unwrap();
        assert_eq!(frame.primitives.len(), 2);

        // (200, 200) on an 800x800 screen sits halfway into the top-left quadrant
        let static_circle = &frame.primitives[1].vertices;
        let n = static_circle.len() as f32;
        let cx: f32 = static_circle.iter().map(|v| v.x).sum::<f32>() / n;
        let cy: f32 = static_circle.iter().map(|v| v.y).sum::<f32>() / n;
        assert!((cx + 0.5).abs() < 0.001);
        assert!((cy - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_record_frame_without_monitor_uses_window() {
        let mut scene = FlowerScene::new(WINDOW);
        let mut recorder = FrameRecorder::new();
        let screen = screen_viewport(None, WINDOW);

        let frame = record_frame(&mut scene, &mut recorder, screen).unwrap();
        let static_circle = &frame.primitives[1].vertices;
        let n = static_circle.len() as f32;
        let cx: f32 = static_circle.iter().map(|v| v.x).sum::<f32>() / n;
        assert!(cx.abs() < 0.001);
    }

    #[test]
    fn test_record_frame_fails_on_degenerate_monitor() {
        let mut scene = FlowerScene::new(WINDOW);
        let mut recorder = FrameRecorder::new();
        let screen = screen_viewport(Some(egui::vec2(1920.0, 0.2)), WINDOW);

        let result = record_frame(&mut scene, &mut recorder, screen);
        assert!(matches!(
            result,
            Err(FlowerError::InvalidViewport { width: 1920, height: 0 })
        ));

        // The failed frame left no open line loop behind
        let leftover = recorder.take_frame();
        assert_eq!(leftover.primitives.len(), 1);
        assert!(!leftover.flushed);
    }
}
