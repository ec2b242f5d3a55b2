// SPDX-License-Identifier: MIT

//! Process memory statistics from the /proc filesystem
//!
//! Reads resident set size and virtual memory size of the current process
//! from `/proc/self/status`, and total physical memory from `/proc/meminfo`
//! to derive a usage percentage. Parsing is separated from the filesystem
//! read so it can be tested against fixture text.

use crate::error::{AppError, Result};

const PROC_SELF_STATUS: &str = "/proc/self/status";
const PROC_MEMINFO: &str = "/proc/meminfo";

/// Point-in-time memory usage of the current process
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySnapshot {
    /// Resident set size in bytes
    pub rss_bytes: u64,
    /// Virtual memory size in bytes
    pub vms_bytes: u64,
    /// Resident set size as a percentage of total physical memory
    pub percent: f64,
}

impl MemorySnapshot {
    /// Reads the current process memory usage from /proc.
    ///
    /// Fails only if the proc files cannot be read or parsed, which should
    /// never happen for a process querying itself on Linux.
    pub fn current() -> Result<Self> {
        let status = std::fs::read_to_string(PROC_SELF_STATUS)?;
        let meminfo = std::fs::read_to_string(PROC_MEMINFO)?;
        snapshot_from_proc(&status, &meminfo)
    }
}

/// Builds a snapshot from the raw contents of `/proc/self/status` and
/// `/proc/meminfo`.
pub(crate) fn snapshot_from_proc(status: &str, meminfo: &str) -> Result<MemorySnapshot> {
    let rss_bytes = parse_kib_field(status, "VmRSS")? * 1024;
    let vms_bytes = parse_kib_field(status, "VmSize")? * 1024;
    let total_bytes = parse_kib_field(meminfo, "MemTotal")? * 1024;

    if total_bytes == 0 {
        return Err(AppError::Proc("MemTotal is zero".to_string()));
    }

    #[allow(clippy::cast_precision_loss)]
    let percent = rss_bytes as f64 / total_bytes as f64 * 100.0;

    Ok(MemorySnapshot {
        rss_bytes,
        vms_bytes,
        percent,
    })
}

/// Extracts a `Key:   <n> kB` field from proc-style text, returning the
/// value in kibibytes.
pub(crate) fn parse_kib_field(text: &str, key: &str) -> Result<u64> {
    let line = text
        .lines()
        .find_map(|line| line.strip_prefix(key).and_then(|rest| rest.strip_prefix(':')))
        .ok_or_else(|| AppError::Proc(format!("field {key} not found")))?;

    let value = line
        .split_whitespace()
        .next()
        .ok_or_else(|| AppError::Proc(format!("field {key} has no value")))?;

    value
        .parse::<u64>()
        .map_err(|e| AppError::Proc(format!("field {key}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_FIXTURE: &str = "\
Name:\tedp-memory-exporter
Pid:\t4242
VmPeak:\t   20480 kB
VmSize:\t   16384 kB
VmRSS:\t    4096 kB
Threads:\t8
";

    const MEMINFO_FIXTURE: &str = "\
MemTotal:       16777216 kB
MemFree:         8388608 kB
MemAvailable:   12582912 kB
";

    #[test]
    fn test_parse_kib_field() {
        assert_eq!(parse_kib_field(STATUS_FIXTURE, "VmRSS").unwrap(), 4096);
        assert_eq!(parse_kib_field(STATUS_FIXTURE, "VmSize").unwrap(), 16384);
        assert_eq!(
            parse_kib_field(MEMINFO_FIXTURE, "MemTotal").unwrap(),
            16_777_216
        );
    }

    #[test]
    fn test_parse_kib_field_missing_key() {
        let err = parse_kib_field(STATUS_FIXTURE, "VmSwap").unwrap_err();
        assert!(matches!(err, AppError::Proc(_)));
        assert!(err.to_string().contains("VmSwap"));
    }

    #[test]
    fn test_parse_kib_field_requires_exact_key() {
        // "Vm" must not match "VmPeak" or "VmSize".
        assert!(parse_kib_field(STATUS_FIXTURE, "Vm").is_err());
    }

    #[test]
    fn test_parse_kib_field_non_numeric() {
        let err = parse_kib_field("VmRSS:\tlots kB\n", "VmRSS").unwrap_err();
        assert!(matches!(err, AppError::Proc(_)));
    }

    #[test]
    fn test_snapshot_from_proc() {
        let snapshot = snapshot_from_proc(STATUS_FIXTURE, MEMINFO_FIXTURE).unwrap();
        assert_eq!(snapshot.rss_bytes, 4096 * 1024);
        assert_eq!(snapshot.vms_bytes, 16384 * 1024);
        // 4096 kB of 16 GiB total
        let expected = 4096.0 / 16_777_216.0 * 100.0;
        assert!((snapshot.percent - expected).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_from_proc_zero_total() {
        let err = snapshot_from_proc(STATUS_FIXTURE, "MemTotal: 0 kB\n").unwrap_err();
        assert!(matches!(err, AppError::Proc(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_current_snapshot_is_plausible() {
        let snapshot = MemorySnapshot::current().expect("proc read failed");
        assert!(snapshot.rss_bytes > 0);
        assert!(snapshot.vms_bytes >= snapshot.rss_bytes);
        assert!(snapshot.percent > 0.0);
        assert!(snapshot.percent <= 100.0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_successive_snapshots_stay_plausible() {
        let first = MemorySnapshot::current().expect("proc read failed");
        let second = MemorySnapshot::current().expect("proc read failed");
        for snap in [first, second] {
            assert!(snap.rss_bytes > 0);
            assert!((0.0..=100.0).contains(&snap.percent));
        }
    }
}
