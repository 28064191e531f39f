//! Memory information types

use serde::{Deserialize, Serialize};

/// Result of `get_memory_info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryReport {
    #[serde(rename = "virtual")]
    pub virtual_memory: VirtualMemory,
    pub swap: SwapMemory,
}

/// Physical memory, in bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualMemory {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    /// Usage percentage (0-100)
    pub used_percent: f64,
    pub free: u64,
}

/// Swap space, in bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapMemory {
    pub total: u64,
    pub used: u64,
    /// Usage percentage (0-100), 0 when there is no swap
    pub used_percent: f64,
    pub free: u64,
}
