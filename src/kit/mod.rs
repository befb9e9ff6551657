//! The kit itself: key-to-resource wiring and the event controller.
//!
//! This module provides:
//! - [`KitController`]: Key presses to playback and highlights, completions
//!   back to resets
//! - [`KitLayout`]: The lookup table built from configuration at startup

mod controller;
mod layout;

pub use controller::KitController;
pub use layout::{KitLayout, PadSpec};
