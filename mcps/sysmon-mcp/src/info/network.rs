//! Network information collection

use sysinfo::{NetworkData, Networks};

use super::procfs;
use crate::error::{MonitorError, MonitorResult};
use crate::types::{InterfaceCounters, InterfaceDescriptor, NetworkReport, NetworkScope};

/// Interfaces and traffic counters, optionally narrowed to one interface
///
/// An empty `interface` is the same as none.
pub fn collect(interface: Option<&str>) -> MonitorResult<NetworkReport> {
    let networks = Networks::new_with_refreshed_list();

    let connection_count = match procfs::connection_count() {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::debug!("Skipping connection count: {}", e);
            None
        }
    };

    let mut entries: Vec<(&String, &NetworkData)> = networks.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let scope = match interface.filter(|name| !name.is_empty()) {
        Some(wanted) => {
            let (name, data) = entries
                .into_iter()
                .find(|(name, _)| name.as_str() == wanted)
                .ok_or_else(|| MonitorError::InterfaceNotFound(wanted.to_string()))?;
            NetworkScope::Single {
                interface: descriptor(name, data),
                io_counter: Some(counters(name, data)),
            }
        }
        None => NetworkScope::All {
            interfaces: entries
                .iter()
                .map(|(name, data)| descriptor(name, data))
                .collect(),
            io_counters: entries
                .iter()
                .map(|(name, data)| counters(name, data))
                .collect(),
        },
    };

    Ok(NetworkReport {
        connection_count,
        scope,
    })
}

fn descriptor(name: &str, data: &NetworkData) -> InterfaceDescriptor {
    InterfaceDescriptor {
        name: name.to_string(),
        mac_address: data.mac_address().to_string(),
        addrs: data
            .ip_networks()
            .iter()
            .map(|ip| format!("{}/{}", ip.addr, ip.prefix))
            .collect(),
    }
}

fn counters(name: &str, data: &NetworkData) -> InterfaceCounters {
    InterfaceCounters {
        name: name.to_string(),
        bytes_sent: data.total_transmitted(),
        bytes_recv: data.total_received(),
        packets_sent: data.total_packets_transmitted(),
        packets_recv: data.total_packets_received(),
        errin: data.total_errors_on_received(),
        errout: data.total_errors_on_transmitted(),
    }
}
