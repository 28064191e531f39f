//! Process information types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering applied to a process listing
///
/// `cpu` and `memory` sort descending, `pid` and `name` ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Cpu,
    Memory,
    Pid,
    Name,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Cpu => "cpu",
            SortKey::Memory => "memory",
            SortKey::Pid => "pid",
            SortKey::Name => "name",
        }
    }

    /// Parse a caller-supplied key; anything unrecognized means `cpu`
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(SortKey::Cpu),
            "memory" => Ok(SortKey::Memory),
            "pid" => Ok(SortKey::Pid),
            "name" => Ok(SortKey::Name),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key: {}", self.0)
    }
}

impl std::error::Error for UnknownSortKey {}

/// Memory footprint of a process, in bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMemory {
    /// Resident set size
    pub rss: u64,
    /// Virtual memory size
    pub vms: u64,
    /// Swapped-out memory, when the platform reports it
    pub swap: Option<u64>,
}

/// One row of a process listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSummary {
    pub pid: u32,
    /// "unknown" when the name could not be read
    pub name: String,
    pub cpu_percent: f64,
    /// Share of total physical memory (0-100)
    pub mem_percent: f64,
    pub memory_bytes: Option<ProcessMemory>,
}

/// Result of `get_process_info` without a pid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessList {
    /// Processes in the snapshot, before truncation
    pub total_count: usize,
    /// Processes in `processes`
    pub returned_count: usize,
    /// Ordering actually applied
    pub sort_by: SortKey,
    pub processes: Vec<ProcessSummary>,
}

/// Result of `get_process_info` with a pid
///
/// Every field after `pid` is best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDetail {
    pub pid: u32,
    pub name: String,
    pub cmdline: String,
    /// Unix timestamp (seconds) the process started at
    pub create_time: u64,
    pub status: String,
    pub cpu_percent: f64,
    pub username: Option<String>,
    pub num_threads: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<ProcessMemory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_counters: Option<ProcessIo>,
}

/// Cumulative disk I/O of a process, in bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessIo {
    pub read_bytes: u64,
    pub write_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("memory".parse::<SortKey>(), Ok(SortKey::Memory));
        assert_eq!(" PID ".parse::<SortKey>(), Ok(SortKey::Pid));
        assert!("uptime".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_cpu() {
        assert_eq!(SortKey::parse_lenient("bogus"), SortKey::Cpu);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Cpu);
        assert_eq!(SortKey::parse_lenient("name"), SortKey::Name);
    }

    #[test]
    fn test_sort_key_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SortKey::Memory).unwrap(), "\"memory\"");
        assert_eq!(SortKey::Pid.to_string(), "pid");
    }
}
