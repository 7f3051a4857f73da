//! Debounced cyclic menu selector

use serde::Serialize;

use crate::platform::{Action, InputQuery};

/// What a menu entry does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuAction {
    /// Begin the first game from the title menu
    Start,
    /// Leave the pause menu
    Resume,
    /// Abandon the current game and start over
    Restart,
    /// Start over after a game over
    NewGame,
    /// Handled by the caller
    Credits,
}

/// A labeled entry
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<A> {
    pub label: String,
    pub action: A,
}

impl<A> MenuItem<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Vertical list of entries navigated with Up/Down and chosen with Activate.
///
/// Input is ignored until more than `input_delay` milliseconds have passed
/// since the menu opened or since the last accepted input.
#[derive(Debug, Clone)]
pub struct Menu<A> {
    items: Vec<MenuItem<A>>,
    active: usize,
    input_delay: f32,
    since_input: f32,
}

impl<A: Clone> Menu<A> {
    pub fn new(input_delay: f32) -> Self {
        Self {
            items: Vec::new(),
            active: 0,
            input_delay,
            since_input: 0.0,
        }
    }

    /// Replace the entries and start over at the first one
    pub fn open(&mut self, items: Vec<MenuItem<A>>) {
        self.items = items;
        self.active = 0;
        self.since_input = 0.0;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|i| i.label.clone()).collect()
    }

    /// Advance the debounce timer and handle at most one input.
    /// Returns the chosen action when Activate is accepted.
    pub fn update(&mut self, input: &impl InputQuery, dt: f32) -> Option<A> {
        if self.items.is_empty() {
            return None;
        }
        if self.since_input < self.input_delay {
            self.since_input += dt;
            return None;
        }

        if input.is_pressed(Action::Activate) {
            self.since_input = 0.0;
            return Some(self.items[self.active].action.clone());
        }

        let count = self.items.len();
        if input.is_pressed(Action::Up) {
            self.active = (self.active + count - 1) % count;
            self.since_input = 0.0;
        } else if input.is_pressed(Action::Down) {
            self.active = (self.active + 1) % count;
            self.since_input = 0.0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::KeyboardState;

    const DELAY: f32 = 250.0;

    fn menu() -> Menu<MenuAction> {
        let mut menu = Menu::new(DELAY);
        menu.open(vec![
            MenuItem::new("START", MenuAction::Start),
            MenuItem::new("RESTART", MenuAction::Restart),
            MenuItem::new("CREDITS", MenuAction::Credits),
        ]);
        menu
    }

    /// Let the debounce window elapse without input
    fn settle(menu: &mut Menu<MenuAction>) {
        let idle = KeyboardState::new();
        assert_eq!(menu.update(&idle, DELAY), None);
    }

    #[test]
    fn test_down_moves_and_wraps() {
        let mut menu = menu();
        let mut keys = KeyboardState::new();
        keys.press(Action::Down);
        assert_eq!(menu.active_index(), 0);

        settle(&mut menu);
        menu.update(&keys, 16.0);
        assert_eq!(menu.active_index(), 1);

        settle(&mut menu);
        menu.update(&keys, 16.0);
        settle(&mut menu);
        menu.update(&keys, 16.0);
        assert_eq!(menu.active_index(), 0);
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut menu = menu();
        let mut keys = KeyboardState::new();
        keys.press(Action::Up);
        settle(&mut menu);
        menu.update(&keys, 16.0);
        assert_eq!(menu.active_index(), 2);
    }

    #[test]
    fn test_presses_inside_window_count_once() {
        let mut menu = menu();
        let mut keys = KeyboardState::new();
        keys.press(Action::Down);
        settle(&mut menu);

        // Held Down across several frames inside the window
        for _ in 0..10 {
            menu.update(&keys, 16.0);
        }
        assert_eq!(menu.active_index(), 1);
    }

    #[test]
    fn test_activate_returns_active_action() {
        let mut menu = menu();
        let mut keys = KeyboardState::new();
        keys.press(Action::Down);
        settle(&mut menu);
        menu.update(&keys, 16.0);

        keys.reset();
        keys.press(Action::Activate);
        settle(&mut menu);
        assert_eq!(menu.update(&keys, 16.0), Some(MenuAction::Restart));
        // Debounced again right after activation
        assert_eq!(menu.update(&keys, 16.0), None);
    }

    #[test]
    fn test_activate_beats_navigation() {
        let mut menu = menu();
        let mut keys = KeyboardState::new();
        keys.press(Action::Activate);
        keys.press(Action::Down);
        settle(&mut menu);
        assert_eq!(menu.update(&keys, 16.0), Some(MenuAction::Start));
        assert_eq!(menu.active_index(), 0);
    }

    #[test]
    fn test_open_resets_selection() {
        let mut menu = menu();
        let mut keys = KeyboardState::new();
        keys.press(Action::Down);
        settle(&mut menu);
        menu.update(&keys, 16.0);

        menu.open(vec![MenuItem::new("RESUME", MenuAction::Resume)]);
        assert_eq!(menu.active_index(), 0);
        assert_eq!(menu.labels(), vec!["RESUME".to_string()]);
        // Fresh debounce window
        assert_eq!(menu.update(&keys, 16.0), None);
    }

    #[test]
    fn test_empty_menu_is_noop() {
        let mut menu: Menu<MenuAction> = Menu::new(DELAY);
        let mut keys = KeyboardState::new();
        keys.press(Action::Activate);
        assert_eq!(menu.update(&keys, 10_000.0), None);
    }
}
