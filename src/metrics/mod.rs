// SPDX-License-Identifier: MIT

//! Metrics registry and label types
//!
//! Contains the label model for the memory gauge family and the Prometheus
//! metrics registry.

mod labels;
mod registry;

/// Labels for the memory usage gauge family
pub use labels::{MemoryLabels, MemoryType};

/// Prometheus metrics registry
pub use registry::{MEMORY_USAGE_HELP, MEMORY_USAGE_METRIC, MetricsRegistry};
