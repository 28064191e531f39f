//! Disk information types

use serde::{Deserialize, Serialize};

/// Result of `get_disk_info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskReport {
    /// Path as requested
    pub path: String,
    /// Usage of the filesystem holding `path`
    pub usage: DiskUsage,
    /// Every mounted partition (only with `all_partitions`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitions: Option<Vec<Partition>>,
    /// Per-device I/O counters, when the platform exposes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_counters: Option<Vec<DiskIoCounters>>,
}

/// Filesystem usage, in bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskUsage {
    pub path: String,
    /// Mount point of the filesystem holding `path`
    pub mount_point: String,
    /// Filesystem type (e.g., "ext4", "ntfs", "apfs")
    pub fstype: String,
    pub total: u64,
    pub free: u64,
    pub used: u64,
    /// Usage percentage (0-100)
    pub used_percent: f64,
}

/// Mounted partition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
    pub fstype: String,
    /// Disk kind as reported by the OS ("SSD", "HDD", "Unknown")
    pub kind: String,
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub is_removable: bool,
}

/// Cumulative block device I/O since boot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskIoCounters {
    pub name: String,
    pub read_count: u64,
    pub write_count: u64,
    pub read_bytes: u64,
    pub write_bytes: u64,
    pub read_time_ms: u64,
    pub write_time_ms: u64,
}
