//! Kit configuration with save/load.
//!
//! This module provides:
//! - [`KitConfig`]: Window, insights, and pad binding settings
//! - [`PadBinding`]: One key/label/sample row

mod settings;

pub use settings::{InsightsConfig, KitConfig, PadBinding};
