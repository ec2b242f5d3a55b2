// SPDX-License-Identifier: MIT

//! Prometheus metrics registry
//!
//! Holds the process memory gauge family and encodes the registry into the
//! text exposition format. Gauge writes are single atomic stores, so
//! concurrent refreshes from different requests race benignly: the last
//! writer's snapshot wins.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::{Metric, Registry};
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::metrics::labels::{MemoryLabels, MemoryType};
use crate::procmem::MemorySnapshot;

/// Metric name of the memory usage gauge family
pub const MEMORY_USAGE_METRIC: &str = "app_memory_usage_v20kijyl";

/// Help text of the memory usage gauge family
pub const MEMORY_USAGE_HELP: &str = "Application memory usage in bytes";

type MemoryGauge = Family<MemoryLabels, Gauge<f64, AtomicU64>>;

/// Clonable handle to the process-wide metrics registry
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    memory_usage: MemoryGauge,
}

impl MetricsRegistry {
    /// Creates the registry and registers all gauge families.
    ///
    /// Fails on a duplicate metric name so that startup aborts before the
    /// server begins serving requests.
    pub fn new() -> Result<Self> {
        let mut registry = Registry::default();
        let mut names = HashSet::new();

        let memory_usage = MemoryGauge::default();
        register_metric(
            &mut registry,
            &mut names,
            MEMORY_USAGE_METRIC,
            MEMORY_USAGE_HELP,
            memory_usage.clone(),
        )?;

        Ok(Self {
            registry: Arc::new(Mutex::new(registry)),
            memory_usage,
        })
    }

    /// Overwrites the three memory gauges from a snapshot.
    pub fn refresh(&self, snapshot: &MemorySnapshot) {
        #[allow(clippy::cast_precision_loss)]
        {
            self.set_memory(MemoryType::Rss, snapshot.rss_bytes as f64);
            self.set_memory(MemoryType::Vms, snapshot.vms_bytes as f64);
        }
        self.set_memory(MemoryType::Percent, snapshot.percent);
    }

    /// Sets one labeled memory value. Values are stored as-is, without
    /// validation.
    pub fn set_memory(&self, kind: MemoryType, value: f64) {
        self.memory_usage
            .get_or_create(&MemoryLabels { r#type: kind })
            .set(value);
    }

    /// Current value of one labeled memory gauge.
    pub fn memory_value(&self, kind: MemoryType) -> f64 {
        self.memory_usage
            .get_or_create(&MemoryLabels { r#type: kind })
            .get()
    }

    /// Encodes the registry into the text exposition format.
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }
}

/// Registers a metric, rejecting duplicate names.
///
/// prometheus-client itself does not reject a second registration under the
/// same name; duplicate names are a programmer error and must abort
/// initialization.
fn register_metric(
    registry: &mut Registry,
    names: &mut HashSet<&'static str>,
    name: &'static str,
    help: &str,
    metric: impl Metric,
) -> Result<()> {
    if !names.insert(name) {
        return Err(AppError::Metrics(format!("duplicate metric name: {name}")));
    }
    registry.register(name, help, metric);
    Ok(())
}
