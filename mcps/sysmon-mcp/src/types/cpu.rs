//! CPU information types

use serde::{Deserialize, Serialize};

/// Result of `get_cpu_info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuReport {
    /// Usage percentage (0-100): one global entry, or one per logical CPU
    pub usage_percent: Vec<f32>,
    /// CPU model information
    pub info: CpuModel,
    /// Number of logical CPUs
    pub core_count: usize,
    /// Number of physical cores, when the platform reports it
    pub physical_core_count: Option<usize>,
    /// Per-core details (only with `per_cpu`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_core: Option<Vec<CpuCore>>,
}

/// CPU model information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuModel {
    /// CPU brand/model name
    pub brand: String,
    /// CPU vendor ID
    pub vendor_id: String,
    /// Frequency of the first CPU in MHz
    pub frequency_mhz: u64,
}

/// Individual logical CPU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuCore {
    pub name: String,
    pub frequency_mhz: u64,
    pub usage_percent: f32,
}
