//! Shared utilities.
//!
//! This module provides:
//! - [`init_logging`]: env_logger setup with a verbosity switch

mod logging;

pub use logging::init_logging;
