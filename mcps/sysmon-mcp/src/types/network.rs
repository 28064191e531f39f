//! Network information types

use serde::{Deserialize, Serialize};

/// Result of `get_network_info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkReport {
    /// Open TCP/UDP sockets, when the platform exposes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_count: Option<usize>,
    #[serde(flatten)]
    pub scope: NetworkScope,
}

/// Either every interface or the single one that was asked for
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkScope {
    Single {
        interface: InterfaceDescriptor,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        io_counter: Option<InterfaceCounters>,
    },
    All {
        interfaces: Vec<InterfaceDescriptor>,
        io_counters: Vec<InterfaceCounters>,
    },
}

/// Network interface identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    /// Interface name (e.g., "eth0", "wlan0", "en0")
    pub name: String,
    pub mac_address: String,
    /// Assigned addresses in CIDR notation
    pub addrs: Vec<String>,
}

/// Cumulative interface traffic since boot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceCounters {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
}
