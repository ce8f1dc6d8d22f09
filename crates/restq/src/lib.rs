//! Client library for the restq hosted queue service.
//!
//! - [`config`] resolves which queue an invocation targets.
//! - [`client`] issues the create, get and put REST calls.
//! - [`telemetry`] wires `log` output to a stderr subscriber.

pub mod client;
pub mod config;
pub mod error;
pub mod telemetry;

pub use client::{DEFAULT_BASE_URL, EMPTY_QUEUE_MARKER, Reply, RestqClient};
pub use config::{QueueFile, resolve_queue};
pub use error::RestqError;

// Re-export logging macros for consistent usage across the workspace
pub use log::{debug, error, info, trace, warn};
