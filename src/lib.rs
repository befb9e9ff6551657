//! Keyboard drum kit.
//!
//! Pressing a bound key re-triggers its sample from the start and lights the
//! matching pad; the highlight is dropped again when the pad's transform
//! transition finishes. The wiring between keys, samples, and pads lives in
//! [`kit`], playback in [`audio`], and the animated surface in [`view`].

pub mod audio;
pub mod config;
pub mod external;
pub mod input;
pub mod kit;
pub mod traits;
pub mod util;
pub mod view;
