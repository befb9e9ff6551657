//! Audio subsystem using kira.
//!
//! This module provides:
//! - [`KiraDriver`]: Sample loading and single-voice playback with kira

mod driver;

pub use driver::KiraDriver;
