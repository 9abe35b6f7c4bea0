use raylib::prelude::*;

use crate::scaler::Viewport;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Action {
    Next,
    Previous,
    ResetTimer,
    Quit,
    Resize(Viewport),
}

pub fn action_for_key(key: KeyboardKey) -> Option<Action> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE => Some(Action::Next),
        KeyboardKey::KEY_LEFT => Some(Action::Previous),
        KeyboardKey::KEY_R => Some(Action::ResetTimer),
        KeyboardKey::KEY_ESCAPE | KeyboardKey::KEY_Q => Some(Action::Quit),
        _ => None,
    }
}

/// Drains this frame's events: queued key presses first, then window close and resize.
pub fn poll(rl: &mut RaylibHandle) -> Vec<Action> {
    let mut actions = Vec::new();

    while let Some(key) = rl.get_key_pressed() {
        if let Some(action) = action_for_key(key) {
            actions.push(action);
        }
    }

    if rl.window_should_close() {
        actions.push(Action::Quit);
    }

    if rl.is_window_resized() {
        actions.push(Action::Resize(Viewport::new(rl.get_screen_width(), rl.get_screen_height())));
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys() {
        assert_eq!(action_for_key(KeyboardKey::KEY_RIGHT), Some(Action::Next));
        assert_eq!(action_for_key(KeyboardKey::KEY_SPACE), Some(Action::Next));
        assert_eq!(action_for_key(KeyboardKey::KEY_LEFT), Some(Action::Previous));
    }

    #[test]
    fn reset_and_quit_keys() {
        assert_eq!(action_for_key(KeyboardKey::KEY_R), Some(Action::ResetTimer));
        assert_eq!(action_for_key(KeyboardKey::KEY_ESCAPE), Some(Action::Quit));
        assert_eq!(action_for_key(KeyboardKey::KEY_Q), Some(Action::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(action_for_key(KeyboardKey::KEY_UP), None);
        assert_eq!(action_for_key(KeyboardKey::KEY_ENTER), None);
    }
}
