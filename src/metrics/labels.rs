//! Label types for Prometheus metrics

use std::fmt::Write;

use prometheus_client::encoding::{EncodeLabelSet, EncodeLabelValue, LabelValueEncoder};

/// The kind of memory reading a sample represents
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum MemoryType {
    /// Resident set size
    Rss,
    /// Virtual memory size
    Vms,
    /// Resident size as a percentage of total physical memory
    Percent,
}

impl MemoryType {
    pub const ALL: [MemoryType; 3] = [MemoryType::Rss, MemoryType::Vms, MemoryType::Percent];

    pub fn as_str(self) -> &'static str {
        match self {
            MemoryType::Rss => "rss",
            MemoryType::Vms => "vms",
            MemoryType::Percent => "percent",
        }
    }
}

impl EncodeLabelValue for MemoryType {
    fn encode(&self, encoder: &mut LabelValueEncoder) -> Result<(), std::fmt::Error> {
        encoder.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct MemoryLabels {
    pub r#type: MemoryType,
}
