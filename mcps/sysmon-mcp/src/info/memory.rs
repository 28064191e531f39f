//! Memory information collection

use sysinfo::System;

use super::percent;
use crate::error::{MonitorError, MonitorResult};
use crate::types::{MemoryReport, SwapMemory, VirtualMemory};

/// Get physical memory and swap usage
pub fn collect() -> MonitorResult<MemoryReport> {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    if total == 0 {
        return Err(MonitorError::unavailable(
            "memory information",
            "total memory reported as 0",
        ));
    }
    let used = sys.used_memory();

    let swap_total = sys.total_swap();
    let swap_used = sys.used_swap();

    Ok(MemoryReport {
        virtual_memory: VirtualMemory {
            total,
            available: sys.available_memory(),
            used,
            used_percent: percent(used, total),
            free: sys.free_memory(),
        },
        swap: SwapMemory {
            total: swap_total,
            used: swap_used,
            used_percent: percent(swap_used, swap_total),
            free: sys.free_swap(),
        },
    })
}
