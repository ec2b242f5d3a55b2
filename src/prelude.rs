// SPDX-License-Identifier: MIT

//! Prelude module for convenient imports
//!
//! Re-exports commonly used types so that users of the library can import
//! everything they need with:
//!
//! ```rust
//! use edp_memory_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::{AppState, create_router};

// Metrics types
pub use crate::metrics::{
    MEMORY_USAGE_HELP, MEMORY_USAGE_METRIC, MemoryLabels, MemoryType, MetricsRegistry,
};

// Process memory readings
pub use crate::procmem::MemorySnapshot;
