//! Trait seams between the controller and its collaborators.
//!
//! This module provides:
//! - [`AudioBackend`]: Sample loading and single-voice playback
//! - [`KitLookup`]: Key identifier to sample/pad resolution
//! - [`PadSurface`]: The highlightable pad surface
//! - [`KeyPress`] / [`TransitionEnd`]: The two event kinds the kit reacts to

mod audio;
mod input;
mod lookup;
mod surface;

pub use audio::{AudioBackend, SoundId};
pub use input::KeyPress;
pub use lookup::KitLookup;
pub use surface::{PadId, PadSurface, StyleProperty, TransitionEnd};
