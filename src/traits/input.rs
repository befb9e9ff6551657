use crate::input::KeyCode;

/// One key-down notification from the host input stream.
///
/// Delivered for every physical key press whether or not it produces a
/// printable character, and again for each auto-repeat while the key is
/// held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Identifier of the physical key that went down.
    pub code: KeyCode,
    /// true when this press comes from the host's key auto-repeat.
    pub repeat: bool,
}

impl KeyPress {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            repeat: false,
        }
    }
}
