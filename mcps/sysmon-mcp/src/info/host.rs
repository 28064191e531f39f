//! Host information collection

use chrono::DateTime;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

use super::process::is_process;
use super::users::{self, UserSource};
use crate::error::{MonitorError, MonitorResult};
use crate::types::{HostDetails, HostReport};

/// Host identity, users, boot time and uptime
pub fn collect(user_sources: &[Box<dyn UserSource>]) -> MonitorResult<HostReport> {
    let boot_time = System::boot_time();
    if boot_time == 0 {
        return Err(MonitorError::unavailable(
            "system boot time",
            "boot time not reported",
        ));
    }
    let boot_time_formatted = DateTime::from_timestamp(boot_time as i64, 0)
        .map(|t| t.to_rfc3339())
        .ok_or_else(|| {
            MonitorError::unavailable("system boot time", format!("{boot_time} is out of range"))
        })?;

    let users = users::resolve(user_sources)?;

    let sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new()),
    );
    let uptime = System::uptime();

    Ok(HostReport {
        info: HostDetails {
            hostname: System::host_name(),
            os: System::name(),
            os_version: System::os_version(),
            long_os_version: System::long_os_version(),
            kernel_version: System::kernel_version(),
            kernel_arch: std::env::consts::ARCH.to_string(),
            distribution_id: System::distribution_id(),
            procs: sys.processes().values().filter(|p| is_process(p)).count(),
        },
        users,
        boot_time,
        boot_time_formatted,
        uptime,
        uptime_formatted: format_uptime(uptime),
    })
}

/// e.g. "1 days 2 hours 3 minutes 4 seconds"
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{days} days {hours} hours {minutes} minutes {secs} seconds")
}
