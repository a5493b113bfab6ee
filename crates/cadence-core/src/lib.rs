//! Shared building blocks for the cadence workspace.
//!
//! Settings, the core error type, the repeat/recurrence enums used on the
//! wire and in the generator, and tracing setup.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;
pub mod util;
