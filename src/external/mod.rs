//! Outward-facing integrations.
//!
//! This module provides:
//! - [`insights`]: The fire-and-forget launch ping

pub mod insights;
