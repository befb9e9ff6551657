//! The animated pad surface and its egui shell.
//!
//! This module provides:
//! - [`PadBoard`]: The row of pads with their highlight state
//! - [`Transition`] / [`PadStyle`]: Stylesheet-like property animation
//! - [`DrumKitApp`]: The eframe application wrapping it all

mod app;
mod board;
mod theme;
mod transition;

pub use app::DrumKitApp;
pub use board::{Pad, PadBoard};
pub use theme::Theme;
pub use transition::{PadStyle, StyleTiming, Transition};
