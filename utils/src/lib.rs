//! Shared utilities for chattel crates.

pub mod logging;

pub use logging::{init_logging, LogFormat};
