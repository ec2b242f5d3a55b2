// SPDX-License-Identifier: MIT

//! # EDP Memory Exporter
//!
//! Small HTTP service exposing a static greeting and process memory metrics
//! in Prometheus text exposition format.
//!
//! The memory gauges (`rss`, `vms`, `percent`) are refreshed synchronously
//! before every routed request and on every scrape; there are no background
//! tasks or timers.
//!
//! ## Main modules
//! - `api`: HTTP API handlers and the per-request refresh hook
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: Prometheus metrics registry and labels
//! - `procmem`: process memory readings from /proc
//! - `prelude`: commonly used types

mod api;
mod config;
mod error;
mod metrics;
mod procmem;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Metrics registry, labels, and metric name constants
pub use metrics::{MEMORY_USAGE_HELP, MEMORY_USAGE_METRIC, MemoryLabels, MemoryType, MetricsRegistry};

/// Process memory snapshot
pub use procmem::MemorySnapshot;
