//! Room Walk - interactive viewer for the room scene
//!
//! Run with: `cargo run --bin room_walk [scene.json]`
//!
//! Controls:
//! - W/S: Move forward/backward along the view
//! - A/D: Strafe left/right
//! - Arrow Left/Right: Turn
//! - Arrow Up/Down: Look up/down
//! - Space: Jump
//! - E: Open/close the door
//! - ESC: Exit
//!
//! The viewer owns the window and event loop only. Drawing is done by the
//! renderer collaborator; here the view transform and door angle are logged
//! (`RUST_LOG=debug`) and the door angle is shown in the window title.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use room_walk_engine::{KeyCode, SceneCommand, SceneConfig, SceneState};

const WINDOW_TITLE: &str = "Room Walk";

/// Translate a winit key into the engine's key code.
fn map_key(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

struct App {
    scene: SceneState,
    window: Option<Arc<Window>>,
    next_spin: Instant,
}

impl App {
    fn new(scene: SceneState) -> Self {
        Self {
            scene,
            window: None,
            next_spin: Instant::now(),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let outcome = self.scene.advance_frame();

        let camera = &self.scene.camera;
        log::debug!(
            "eye {:.3} center {:.3} up {:.3} | door {:.1}° | spin {:.0}°",
            camera.eye(),
            camera.center(),
            camera.up(),
            self.scene.door.angle(),
            self.scene.spin.angle(),
        );

        if let Some(window) = &self.window {
            window.set_title(&format!(
                "{WINDOW_TITLE} - door {:.0}°{}",
                self.scene.door.angle(),
                if self.scene.camera.is_jumping() { " - jumping" } else { "" }
            ));
            if outcome.needs_redraw {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(1280, 720));

        match event_loop.create_window(window_attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                window.request_redraw();
                self.window = Some(window);
                log::info!("window created; WASD move, arrows look, Space jump, E door, ESC exit");
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match self.scene.handle_key(map_key(key)) {
                Some(SceneCommand::Exit) => event_loop.exit(),
                Some(SceneCommand::Continue) => self.request_redraw(),
                None => {}
            },
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_spin {
            self.scene.tick_spin();
            self.next_spin = now + self.scene.spin.interval();
            self.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_spin));
    }
}

fn load_config() -> Result<SceneConfig, room_walk_engine::ConfigError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SceneConfig::load(&path),
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(SceneState::new(config));
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_scene_keys() {
        assert_eq!(map_key(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(map_key(WinitKeyCode::KeyE), KeyCode::E);
        assert_eq!(map_key(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(map_key(WinitKeyCode::Escape), KeyCode::Escape);
    }

    #[test]
    fn test_map_key_unknown() {
        assert_eq!(map_key(WinitKeyCode::KeyQ), KeyCode::Unknown);
        assert_eq!(map_key(WinitKeyCode::F1), KeyCode::Unknown);
    }
}
