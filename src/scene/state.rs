//! Scene State
//!
//! Central state struct that owns the camera, the door, and the spin
//! animation, and routes input actions to them.

use crate::camera::RoomCamera;
use crate::input::{InputAction, KeyBindings, KeyCode};
use crate::scene::config::SceneConfig;
use crate::scene::door::Door;
use crate::scene::spin::SpinAnimation;

/// What the caller should do after an input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Keep running
    Continue,
    /// Close the viewer
    Exit,
}

/// Result of one frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Another frame is needed right away (door swinging or camera airborne)
    pub needs_redraw: bool,
}

/// Central scene state holding the camera, door, and decorations.
pub struct SceneState {
    /// First-person camera
    pub camera: RoomCamera,
    /// The animated door
    pub door: Door,
    /// Display-model spin
    pub spin: SpinAnimation,
    /// Key to action mapping
    pub bindings: KeyBindings,
    config: SceneConfig,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl SceneState {
    /// Build a scene from a configuration, with default key bindings.
    pub fn new(config: SceneConfig) -> Self {
        let start = config.camera;
        Self {
            camera: RoomCamera::with_room(
                start.eye,
                start.center,
                start.up,
                config.room,
                config.jump,
            ),
            door: Door::with_config(config.door),
            spin: SpinAnimation::new(config.spin),
            bindings: KeyBindings::new(),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Look up the action bound to `key` and apply it.
    ///
    /// Returns `None` for unbound keys.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<SceneCommand> {
        let action = self.bindings.get_action(key)?;
        Some(self.apply_action(action))
    }

    /// Apply one input action.
    pub fn apply_action(&mut self, action: InputAction) -> SceneCommand {
        let move_speed = self.config.move_speed;
        let rotate_speed = self.config.rotate_speed;

        match action {
            InputAction::MoveForward => self.camera.forward(move_speed),
            InputAction::MoveBack => self.camera.backward(move_speed),
            InputAction::MoveLeft => self.camera.move_left(move_speed),
            InputAction::MoveRight => self.camera.move_right(move_speed),
            InputAction::RotateLeft => self.camera.rotate_left(rotate_speed),
            InputAction::RotateRight => self.camera.rotate_right(rotate_speed),
            InputAction::LookUp => self.camera.look_up(rotate_speed),
            InputAction::LookDown => self.camera.look_down(rotate_speed),
            InputAction::Jump => self.camera.jump(),
            InputAction::ToggleDoor => self.door.toggle(),
            InputAction::Exit => return SceneCommand::Exit,
        }
        SceneCommand::Continue
    }

    /// Per-frame simulation step. Call exactly once per rendered frame,
    /// before reading camera or door state for drawing.
    pub fn advance_frame(&mut self) -> FrameOutcome {
        self.camera.update_gravity_and_jump();
        self.door.update();

        FrameOutcome {
            needs_redraw: self.door.is_animating() || self.camera.is_airborne(),
        }
    }

    /// Advance the decorative spin by one timer tick.
    pub fn tick_spin(&mut self) {
        self.spin.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_is_idle() {
        let mut scene = SceneState::default();
        assert!(scene.door.is_open());
        assert!(!scene.advance_frame().needs_redraw);
    }

    #[test]
    fn test_handle_key_routes_to_camera() {
        let mut scene = SceneState::default();
        let z = scene.camera.eye().z;
        assert_eq!(scene.handle_key(KeyCode::W), Some(SceneCommand::Continue));
        assert!(scene.camera.eye().z < z);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut scene = SceneState::default();
        assert_eq!(scene.handle_key(KeyCode::Unknown), None);
    }

    #[test]
    fn test_escape_exits() {
        let mut scene = SceneState::default();
        assert_eq!(scene.handle_key(KeyCode::Escape), Some(SceneCommand::Exit));
    }

    #[test]
    fn test_door_needs_redraw_until_closed() {
        let mut scene = SceneState::default();
        scene.apply_action(InputAction::ToggleDoor);

        let mut frames = 0;
        while scene.advance_frame().needs_redraw {
            frames += 1;
            assert!(frames < 1000);
        }
        // The 90th step reaches 0 and reports no further redraw.
        assert_eq!(frames, 89);
        assert_eq!(scene.door.angle(), 0.0);
    }

    #[test]
    fn test_jump_needs_redraw_until_landed() {
        let mut scene = SceneState::default();
        scene.apply_action(InputAction::Jump);
        assert!(scene.camera.is_jumping());

        while scene.advance_frame().needs_redraw {}
        assert!(!scene.camera.is_jumping());
        assert_eq!(scene.camera.eye().y, scene.config().room.floor());
    }

    #[test]
    fn test_rotate_uses_configured_speed() {
        let mut scene = SceneState::default();
        scene.apply_action(InputAction::RotateLeft);
        let look = scene.camera.look_direction();
        let turned = look.x.atan2(-look.z).abs();
        assert!((turned - scene.config().rotate_speed).abs() < 1e-9);
    }

    #[test]
    fn test_tick_spin() {
        let mut scene = SceneState::default();
        scene.tick_spin();
        assert_eq!(scene.spin.angle(), 4.0);
    }
}
