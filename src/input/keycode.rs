use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a physical keyboard key.
///
/// Uses the W3C UIEvents `code` names ("KeyA", "Digit1", "Slash"), which
/// name the physical key independent of layout and shift state, so configs
/// written on one keyboard keep working on another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(String);

impl KeyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for pad captions: "KeyA" -> "A", "Digit1" -> "1".
    /// Codes without a prefix to strip are shown as-is.
    pub fn hint(&self) -> &str {
        if let Some(rest) = self.0.strip_prefix("Key") {
            if rest.len() == 1 {
                return rest;
            }
        }
        if let Some(rest) = self.0.strip_prefix("Digit") {
            if rest.len() == 1 {
                return rest;
            }
        }
        &self.0
    }

    /// Map an egui key to its W3C code name.
    ///
    /// Keys without a stable physical code (clipboard actions, browser
    /// keys) have no mapping and are dropped by the caller.
    pub fn from_egui(key: egui::Key) -> Option<Self> {
        egui_code_name(key).map(Self::new)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn egui_code_name(key: egui::Key) -> Option<&'static str> {
    use egui::Key;

    let name = match key {
        Key::A => "KeyA",
        Key::B => "KeyB",
        Key::C => "KeyC",
        Key::D => "KeyD",
        Key::E => "KeyE",
        Key::F => "KeyF",
        Key::G => "KeyG",
        Key::H => "KeyH",
        Key::I => "KeyI",
        Key::J => "KeyJ",
        Key::K => "KeyK",
        Key::L => "KeyL",
        Key::M => "KeyM",
        Key::N => "KeyN",
        Key::O => "KeyO",
        Key::P => "KeyP",
        Key::Q => "KeyQ",
        Key::R => "KeyR",
        Key::S => "KeyS",
        Key::T => "KeyT",
        Key::U => "KeyU",
        Key::V => "KeyV",
        Key::W => "KeyW",
        Key::X => "KeyX",
        Key::Y => "KeyY",
        Key::Z => "KeyZ",
        Key::Num0 => "Digit0",
        Key::Num1 => "Digit1",
        Key::Num2 => "Digit2",
        Key::Num3 => "Digit3",
        Key::Num4 => "Digit4",
        Key::Num5 => "Digit5",
        Key::Num6 => "Digit6",
        Key::Num7 => "Digit7",
        Key::Num8 => "Digit8",
        Key::Num9 => "Digit9",
        Key::Space => "Space",
        Key::Enter => "Enter",
        Key::Tab => "Tab",
        Key::Backspace => "Backspace",
        Key::Escape => "Escape",
        Key::Minus => "Minus",
        Key::Equals => "Equal",
        Key::Semicolon => "Semicolon",
        Key::Quote => "Quote",
        Key::Comma => "Comma",
        Key::Period => "Period",
        Key::Slash => "Slash",
        Key::Backslash => "Backslash",
        Key::OpenBracket => "BracketLeft",
        Key::CloseBracket => "BracketRight",
        Key::Backtick => "Backquote",
        Key::ArrowUp => "ArrowUp",
        Key::ArrowDown => "ArrowDown",
        Key::ArrowLeft => "ArrowLeft",
        Key::ArrowRight => "ArrowRight",
        Key::Insert => "Insert",
        Key::Delete => "Delete",
        Key::Home => "Home",
        Key::End => "End",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::F1 => "F1",
        Key::F2 => "F2",
        Key::F3 => "F3",
        Key::F4 => "F4",
        Key::F5 => "F5",
        Key::F6 => "F6",
        Key::F7 => "F7",
        Key::F8 => "F8",
        Key::F9 => "F9",
        Key::F10 => "F10",
        Key::F11 => "F11",
        Key::F12 => "F12",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_and_digit_codes() {
        assert_eq!(KeyCode::from_egui(egui::Key::A), Some(KeyCode::new("KeyA")));
        assert_eq!(
            KeyCode::from_egui(egui::Key::Num1),
            Some(KeyCode::new("Digit1"))
        );
        assert_eq!(
            KeyCode::from_egui(egui::Key::Slash),
            Some(KeyCode::new("Slash"))
        );
    }

    #[test]
    fn test_punctuation_uses_w3c_names() {
        assert_eq!(
            KeyCode::from_egui(egui::Key::OpenBracket),
            Some(KeyCode::new("BracketLeft"))
        );
        assert_eq!(
            KeyCode::from_egui(egui::Key::Equals),
            Some(KeyCode::new("Equal"))
        );
        assert_eq!(
            KeyCode::from_egui(egui::Key::Backtick),
            Some(KeyCode::new("Backquote"))
        );
    }

    #[test]
    fn test_keys_without_physical_code_are_unmapped() {
        assert_eq!(KeyCode::from_egui(egui::Key::Copy), None);
        assert_eq!(KeyCode::from_egui(egui::Key::Cut), None);
    }

    #[test]
    fn test_hint_strips_prefixes() {
        assert_eq!(KeyCode::new("KeyA").hint(), "A");
        assert_eq!(KeyCode::new("Digit7").hint(), "7");
        assert_eq!(KeyCode::new("Slash").hint(), "Slash");
        assert_eq!(KeyCode::new("Keyboard").hint(), "Keyboard");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&KeyCode::new("KeyA")).unwrap();
        assert_eq!(json, "\"KeyA\"");

        let back: KeyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, KeyCode::new("KeyA"));
    }
}
