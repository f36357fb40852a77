//! Input Bindings Module
//!
//! Maps physical keys to logical scene actions, allowing key remapping
//! without touching the scene logic.

use std::collections::HashMap;

use super::KeyCode;

/// Logical scene actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move along the look direction (default: W)
    MoveForward,
    /// Move against the look direction (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Yaw left (default: Left arrow)
    RotateLeft,
    /// Yaw right (default: Right arrow)
    RotateRight,
    /// Pitch up (default: Up arrow)
    LookUp,
    /// Pitch down (default: Down arrow)
    LookDown,
    /// Jump (default: Space)
    Jump,
    /// Open/close the door (default: E)
    ToggleDoor,
    /// Quit the viewer (default: Escape)
    Exit,
}

/// Keys bound by [`KeyBindings::new`].
pub const DEFAULT_BINDINGS: [(KeyCode, InputAction); 11] = [
    (KeyCode::W, InputAction::MoveForward),
    (KeyCode::S, InputAction::MoveBack),
    (KeyCode::A, InputAction::MoveLeft),
    (KeyCode::D, InputAction::MoveRight),
    (KeyCode::ArrowLeft, InputAction::RotateLeft),
    (KeyCode::ArrowRight, InputAction::RotateRight),
    (KeyCode::ArrowUp, InputAction::LookUp),
    (KeyCode::ArrowDown, InputAction::LookDown),
    (KeyCode::Space, InputAction::Jump),
    (KeyCode::E, InputAction::ToggleDoor),
    (KeyCode::Escape, InputAction::Exit),
];

/// Key-to-action table for the scene.
///
/// One key per action: binding an action to a new key frees its old key.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// The scene's standard layout, see [`DEFAULT_BINDINGS`].
    pub fn new() -> Self {
        Self {
            keys: DEFAULT_BINDINGS.into_iter().collect(),
        }
    }

    /// No keys bound.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Point `key` at `action`, dropping whatever key `action` had and
    /// whatever action `key` had.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.unbind_action(action);
        if let Some(previous) = self.keys.insert(key, action) {
            log::debug!("{key:?} rebound from {previous:?} to {action:?}");
        }
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    pub fn unbind_action(&mut self, action: InputAction) {
        self.keys.retain(|_, bound| *bound != action);
    }

    /// Action triggered by `key`, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.keys.get(&key).copied()
    }

    /// Key that triggers `action`, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.keys
            .iter()
            .find_map(|(&key, &bound)| (bound == action).then_some(key))
    }

    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, InputAction)> + '_ {
        self.keys.iter().map(|(&key, &action)| (key, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_action(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(KeyCode::S), Some(InputAction::MoveBack));
        assert_eq!(bindings.get_action(KeyCode::A), Some(InputAction::MoveLeft));
        assert_eq!(bindings.get_action(KeyCode::D), Some(InputAction::MoveRight));
        assert_eq!(bindings.get_action(KeyCode::ArrowLeft), Some(InputAction::RotateLeft));
        assert_eq!(bindings.get_action(KeyCode::ArrowRight), Some(InputAction::RotateRight));
        assert_eq!(bindings.get_action(KeyCode::ArrowUp), Some(InputAction::LookUp));
        assert_eq!(bindings.get_action(KeyCode::ArrowDown), Some(InputAction::LookDown));
        assert_eq!(bindings.get_action(KeyCode::Space), Some(InputAction::Jump));
        assert_eq!(bindings.get_action(KeyCode::E), Some(InputAction::ToggleDoor));
        assert_eq!(bindings.get_action(KeyCode::Escape), Some(InputAction::Exit));
        assert_eq!(bindings.get_action(KeyCode::Unknown), None);
        assert_eq!(bindings.all_bindings().count(), 11);
    }

    #[test]
    fn test_reverse_lookup() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_key(InputAction::MoveForward), Some(KeyCode::W));
        assert_eq!(bindings.get_key(InputAction::ToggleDoor), Some(KeyCode::E));
        assert_eq!(bindings.get_key(InputAction::Jump), Some(KeyCode::Space));
    }

    #[test]
    fn test_rebind_key() {
        let mut bindings = KeyBindings::new();

        // Swap forward onto the Up arrow; LookUp loses its key.
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);

        assert_eq!(bindings.get_action(KeyCode::W), None);
        assert_eq!(bindings.get_action(KeyCode::ArrowUp), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_key(InputAction::MoveForward), Some(KeyCode::ArrowUp));
        assert_eq!(bindings.get_key(InputAction::LookUp), None);
    }

    #[test]
    fn test_unbind_key() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_key(KeyCode::E);

        assert_eq!(bindings.get_action(KeyCode::E), None);
        assert_eq!(bindings.get_key(InputAction::ToggleDoor), None);
    }

    #[test]
    fn test_unbind_action() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_action(InputAction::Jump);

        assert_eq!(bindings.get_action(KeyCode::Space), None);
        assert_eq!(bindings.get_key(InputAction::Jump), None);
    }

    #[test]
    fn test_rebind_action_frees_old_key() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::Unknown, InputAction::Jump);

        assert_eq!(bindings.get_action(KeyCode::Space), None);
        assert_eq!(bindings.get_key(InputAction::Jump), Some(KeyCode::Unknown));
        assert_eq!(bindings.all_bindings().count(), 11);
    }

    #[test]
    fn test_empty_bindings() {
        let bindings = KeyBindings::empty();
        assert_eq!(bindings.all_bindings().count(), 0);
    }
}
