//! GazeKit Common Utilities
//!
//! Shared infrastructure for all GazeKit crates:
//! - Error types and result aliases
//! - Clock and rate-control utilities for the per-frame loop
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
