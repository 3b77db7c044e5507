//! Input handling: translating key events into game commands
//!
//! Bindings come from the settings file as key-name strings and are parsed
//! into key codes once, up front. Held-key repeat is left to the terminal's
//! own key repeat, which matches the discrete one-command-one-step model.

use crate::game::Command;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Forward a command to the engine
    Play(Command),
    /// Start the game over
    Restart,
    /// Leave the application
    Quit,
}

/// Parsed key bindings
#[derive(Debug, Clone)]
pub struct InputMap {
    move_left: Vec<KeyCode>,
    move_right: Vec<KeyCode>,
    soft_drop: Vec<KeyCode>,
    rotate_cw: Vec<KeyCode>,
    rotate_ccw: Vec<KeyCode>,
    restart: Vec<KeyCode>,
    quit: Vec<KeyCode>,
}

impl InputMap {
    /// Build the map from settings strings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_left: parse_keys(&settings.keys.move_left),
            move_right: parse_keys(&settings.keys.move_right),
            soft_drop: parse_keys(&settings.keys.soft_drop),
            rotate_cw: parse_keys(&settings.keys.rotate_cw),
            rotate_ccw: parse_keys(&settings.keys.rotate_ccw),
            restart: parse_keys(&settings.keys.restart),
            quit: parse_keys(&settings.keys.quit),
        }
    }

    /// Translate a key press; None for keys bound to nothing
    pub fn map(&self, key: KeyEvent) -> Option<InputEvent> {
        // Ctrl+C always quits, regardless of bindings.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let code = normalize_key(key.code);
        if self.move_left.contains(&code) {
            Some(InputEvent::Play(Command::MoveLeft))
        } else if self.move_right.contains(&code) {
            Some(InputEvent::Play(Command::MoveRight))
        } else if self.soft_drop.contains(&code) {
            Some(InputEvent::Play(Command::SoftDrop))
        } else if self.rotate_cw.contains(&code) {
            Some(InputEvent::Play(Command::RotateCw))
        } else if self.rotate_ccw.contains(&code) {
            Some(InputEvent::Play(Command::RotateCcw))
        } else if self.restart.contains(&code) {
            Some(InputEvent::Restart)
        } else if self.quit.contains(&code) {
            Some(InputEvent::Quit)
        } else {
            None
        }
    }
}

impl Default for InputMap {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Parse a key name from the settings file into a KeyCode
fn parse_key(s: &str) -> KeyCode {
    match s.to_lowercase().as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        s if s.chars().count() == 1 => KeyCode::Char(s.chars().next().unwrap()),
        _ => KeyCode::Null, // unknown names bind to nothing
    }
}

fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
    keys.iter().map(|s| parse_key(s)).collect()
}

/// Normalize key codes so bindings are case-insensitive
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_cover_every_command() {
        let map = InputMap::default();
        assert_eq!(
            map.map(press(KeyCode::Left)),
            Some(InputEvent::Play(Command::MoveLeft))
        );
        assert_eq!(
            map.map(press(KeyCode::Right)),
            Some(InputEvent::Play(Command::MoveRight))
        );
        assert_eq!(
            map.map(press(KeyCode::Down)),
            Some(InputEvent::Play(Command::SoftDrop))
        );
        assert_eq!(
            map.map(press(KeyCode::Char('w'))),
            Some(InputEvent::Play(Command::RotateCw))
        );
        assert_eq!(
            map.map(press(KeyCode::Char('q'))),
            Some(InputEvent::Play(Command::RotateCcw))
        );
        assert_eq!(map.map(press(KeyCode::Char('r'))), Some(InputEvent::Restart));
        assert_eq!(map.map(press(KeyCode::Esc)), Some(InputEvent::Quit));
    }

    #[test]
    fn uppercase_keys_match_lowercase_bindings() {
        let map = InputMap::default();
        assert_eq!(
            map.map(press(KeyCode::Char('W'))),
            Some(InputEvent::Play(Command::RotateCw))
        );
    }

    #[test]
    fn ctrl_c_quits_regardless_of_bindings() {
        let map = InputMap::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map.map(key), Some(InputEvent::Quit));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let map = InputMap::default();
        assert_eq!(map.map(press(KeyCode::Char('z'))), None);
        assert_eq!(map.map(press(KeyCode::Tab)), None);
    }

    #[test]
    fn unknown_binding_names_never_match() {
        let mut settings = Settings::default();
        settings.keys.move_left = vec!["NoSuchKey".to_string()];
        let map = InputMap::from_settings(&settings);
        assert_eq!(map.map(press(KeyCode::Left)), None);
    }
}
