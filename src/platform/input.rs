//! Logical input actions and the held-key state behind them

/// Every action the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    RotateLeft,
    RotateRight,
    Fire,
    Pause,
    Activate,
}

const ACTION_COUNT: usize = 9;

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Fire,
        Action::Pause,
        Action::Activate,
    ];

    /// Default keyboard binding (browser `KeyboardEvent.key` names)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" => Some(Action::Up),
            "s" => Some(Action::Down),
            "a" => Some(Action::Left),
            "d" => Some(Action::Right),
            "q" => Some(Action::RotateLeft),
            "e" => Some(Action::RotateRight),
            " " => Some(Action::Fire),
            "Escape" => Some(Action::Pause),
            "Enter" => Some(Action::Activate),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Query interface the simulation reads input through
pub trait InputQuery {
    /// Whether the action is currently held
    fn is_pressed(&self, action: Action) -> bool;
    /// Release everything (called on game start so no key sticks)
    fn reset(&mut self);
}

/// Held-action set fed by key down/up events
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: [bool; ACTION_COUNT],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed; unbound keys are ignored
    pub fn key_down(&mut self, key: &str) {
        if let Some(action) = Action::from_key(key) {
            self.press(action);
        }
    }

    /// Key released; unbound keys are ignored
    pub fn key_up(&mut self, key: &str) {
        if let Some(action) = Action::from_key(key) {
            self.release(action);
        }
    }

    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
    }

    /// Set an action's held state directly (scripted input)
    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }
}

impl InputQuery for KeyboardState {
    fn is_pressed(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    fn reset(&mut self) {
        self.held = [false; ACTION_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        let mut keys = KeyboardState::new();
        keys.key_down("w");
        keys.key_down(" ");
        keys.key_down("x");
        assert!(keys.is_pressed(Action::Up));
        assert!(keys.is_pressed(Action::Fire));
        assert!(!keys.is_pressed(Action::Down));

        keys.key_up("w");
        assert!(!keys.is_pressed(Action::Up));
        assert!(keys.is_pressed(Action::Fire));
    }

    #[test]
    fn test_reset_releases_all() {
        let mut keys = KeyboardState::new();
        for action in Action::ALL {
            keys.press(action);
        }
        keys.reset();
        assert!(Action::ALL.iter().all(|a| !keys.is_pressed(*a)));
    }

    #[test]
    fn test_every_action_has_a_key() {
        let keys = ["w", "s", "a", "d", "q", "e", " ", "Escape", "Enter"];
        let mapped: Vec<_> = keys.iter().filter_map(|k| Action::from_key(k)).collect();
        assert_eq!(mapped, Action::ALL.to_vec());
    }
}
