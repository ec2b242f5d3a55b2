// SPDX-License-Identifier: MIT

mod hello;
mod metrics;

pub use hello::hello;
pub use metrics::metrics_handler;
