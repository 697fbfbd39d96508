//! Per-frame keyboard input resource.
//!
//! The host feeds key transitions into [`InputState`] before the schedule
//! runs and calls [`InputState::end_frame`] afterwards. Systems read
//! [`InputState::just_pressed`] for edge-triggered actions such as the
//! FX tester's manual hotkey.
use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Keyboard keys the engine can bind actions to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl KeyCode {
    /// Every bindable key, in display order.
    pub const ALL: [KeyCode; 57] = [
        KeyCode::A,
        KeyCode::B,
        KeyCode::C,
        KeyCode::D,
        KeyCode::E,
        KeyCode::F,
        KeyCode::G,
        KeyCode::H,
        KeyCode::I,
        KeyCode::J,
        KeyCode::K,
        KeyCode::L,
        KeyCode::M,
        KeyCode::N,
        KeyCode::O,
        KeyCode::P,
        KeyCode::Q,
        KeyCode::R,
        KeyCode::S,
        KeyCode::T,
        KeyCode::U,
        KeyCode::V,
        KeyCode::W,
        KeyCode::X,
        KeyCode::Y,
        KeyCode::Z,
        KeyCode::Num0,
        KeyCode::Num1,
        KeyCode::Num2,
        KeyCode::Num3,
        KeyCode::Num4,
        KeyCode::Num5,
        KeyCode::Num6,
        KeyCode::Num7,
        KeyCode::Num8,
        KeyCode::Num9,
        KeyCode::Space,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::Tab,
        KeyCode::Backspace,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::F1,
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::F4,
        KeyCode::F5,
        KeyCode::F6,
        KeyCode::F7,
        KeyCode::F8,
        KeyCode::F9,
        KeyCode::F10,
        KeyCode::F11,
        KeyCode::F12,
    ];

    pub fn name(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for KeyCode {
    type Err = String;

    /// Case-insensitive key name. Bare digits map to `NumN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.len() == 1 {
            if let Some(digit) = wanted.chars().next().and_then(|c| c.to_digit(10)) {
                return Ok(KeyCode::ALL[26 + digit as usize]);
            }
        }
        KeyCode::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown key '{}'", s))
    }
}

impl TryFrom<String> for KeyCode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parse an optional key binding. Empty strings and `none` mean unbound.
pub fn parse_key_binding(s: &str) -> Result<Option<KeyCode>, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Resource capturing the keys held and the edges seen this frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    held: FxHashSet<KeyCode>,
    just_pressed: FxHashSet<KeyCode>,
    just_released: FxHashSet<KeyCode>,
}

impl InputState {
    pub fn press(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        if self.held.remove(&key) {
            self.just_released.insert(key);
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn just_released(&self, key: KeyCode) -> bool {
        self.just_released.contains(&key)
    }

    /// Forget this frame's edges. Held keys stay held.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_parse_is_case_insensitive() {
        assert_eq!("space".parse::<KeyCode>(), Ok(KeyCode::Space));
        assert_eq!("F5".parse::<KeyCode>(), Ok(KeyCode::F5));
        assert_eq!("q".parse::<KeyCode>(), Ok(KeyCode::Q));
        assert_eq!("7".parse::<KeyCode>(), Ok(KeyCode::Num7));
        assert!("hyper".parse::<KeyCode>().is_err());
    }

    #[test]
    fn test_parse_key_binding_none() {
        assert_eq!(parse_key_binding(""), Ok(None));
        assert_eq!(parse_key_binding("None"), Ok(None));
        assert_eq!(parse_key_binding("Enter"), Ok(Some(KeyCode::Enter)));
    }

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::default();
        input.press(KeyCode::Space);
        assert!(input.just_pressed(KeyCode::Space));
        input.end_frame();
        input.press(KeyCode::Space);
        assert!(input.is_down(KeyCode::Space));
        assert!(!input.just_pressed(KeyCode::Space));
        input.release(KeyCode::Space);
        assert!(input.just_released(KeyCode::Space));
        assert!(!input.is_down(KeyCode::Space));
    }
}
