//! CPU information collection

use std::time::Duration;

use sysinfo::System;

use crate::error::{MonitorError, MonitorResult};
use crate::types::{CpuCore, CpuModel, CpuReport};

/// Sample CPU usage over `sample` and describe the CPUs
pub fn collect(per_cpu: bool, sample: Duration) -> MonitorResult<CpuReport> {
    let mut sys = System::new();
    sys.refresh_cpu_all();
    std::thread::sleep(sample);
    sys.refresh_cpu_usage();

    let cpus = sys.cpus();
    let first = cpus
        .first()
        .ok_or_else(|| MonitorError::unavailable("CPU information", "no CPUs reported"))?;

    let (usage_percent, per_core) = if per_cpu {
        let cores: Vec<CpuCore> = cpus
            .iter()
            .map(|cpu| CpuCore {
                name: cpu.name().to_string(),
                frequency_mhz: cpu.frequency(),
                usage_percent: cpu.cpu_usage(),
            })
            .collect();
        let usage = cores.iter().map(|core| core.usage_percent).collect();
        (usage, Some(cores))
    } else {
        (vec![sys.global_cpu_usage()], None)
    };

    Ok(CpuReport {
        usage_percent,
        info: CpuModel {
            brand: first.brand().trim().to_string(),
            vendor_id: first.vendor_id().to_string(),
            frequency_mhz: first.frequency(),
        },
        core_count: cpus.len(),
        physical_core_count: sys.physical_core_count(),
        per_core,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_usage() {
        let report = collect(false, sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).unwrap();
        assert_eq!(report.usage_percent.len(), 1);
        assert!(report.core_count >= 1);
        assert!(report.per_core.is_none());
    }

    #[test]
    fn test_per_cpu_usage() {
        let report = collect(true, sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).unwrap();
        assert_eq!(report.usage_percent.len(), report.core_count);
        assert_eq!(report.per_core.map(|c| c.len()), Some(report.core_count));
    }
}
