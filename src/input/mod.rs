//! Keyboard input handling.
//!
//! This module provides:
//! - [`KeyCode`]: Layout-independent physical key identifiers
//! - [`key_presses`]: Extraction of key-down notifications from a frame

mod frame;
mod keycode;

pub use frame::key_presses;
pub use keycode::KeyCode;
