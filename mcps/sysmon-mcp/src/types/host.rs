//! Host information types

use serde::{Deserialize, Serialize};

/// Result of `get_host_info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostReport {
    pub info: HostDetails,
    pub users: UserList,
    /// Unix timestamp of system boot
    pub boot_time: u64,
    /// Boot time in RFC 3339
    pub boot_time_formatted: String,
    /// Uptime in seconds
    pub uptime: u64,
    /// e.g. "2 days 5 hours 30 minutes 12 seconds"
    pub uptime_formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostDetails {
    pub hostname: Option<String>,
    /// OS name (e.g., "Linux", "Windows", "Darwin")
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub long_os_version: Option<String>,
    pub kernel_version: Option<String>,
    /// CPU architecture (e.g., "x86_64", "aarch64")
    pub kernel_arch: String,
    /// Distribution ID (e.g., "ubuntu", "fedora")
    pub distribution_id: String,
    /// Number of running processes
    pub procs: usize,
}

/// Users and the source that listed them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub source: String,
    pub users: Vec<UserEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub name: String,
    /// Processes owned by this user (process-owners source only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_count: Option<usize>,
}
