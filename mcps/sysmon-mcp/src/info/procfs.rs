//! Linux `/proc` readers for counters `sysinfo` does not expose
//!
//! Both are supplementary: callers drop the field when these fail, and every
//! other platform reports `Unsupported`.

use std::io;

use crate::types::DiskIoCounters;

/// Bytes per sector in `/proc/diskstats`, fixed by the kernel regardless of device
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
const SECTOR_SIZE: u64 = 512;

/// Socket tables counted towards the connection count
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
const SOCKET_TABLES: [&str; 4] = ["tcp", "tcp6", "udp", "udp6"];

#[cfg(target_os = "linux")]
pub fn disk_io_counters() -> io::Result<Vec<DiskIoCounters>> {
    let text = std::fs::read_to_string("/proc/diskstats")?;
    Ok(parse_diskstats(&text))
}

#[cfg(not(target_os = "linux"))]
pub fn disk_io_counters() -> io::Result<Vec<DiskIoCounters>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "disk I/O counters are only read on Linux",
    ))
}

/// Number of open TCP and UDP sockets (IPv4 and IPv6)
///
/// Tables missing from the kernel (IPv6 disabled) count as empty.
#[cfg(target_os = "linux")]
pub fn connection_count() -> io::Result<usize> {
    let mut total = 0;
    let mut readable = 0;
    for table in SOCKET_TABLES {
        match std::fs::read_to_string(format!("/proc/net/{table}")) {
            Ok(text) => {
                total += count_socket_entries(&text);
                readable += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    if readable == 0 {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no socket tables under /proc/net",
        ));
    }
    Ok(total)
}

#[cfg(not(target_os = "linux"))]
pub fn connection_count() -> io::Result<usize> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "connection counts are only read on Linux",
    ))
}

/// Parse `/proc/diskstats`; malformed lines are skipped
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_diskstats(text: &str) -> Vec<DiskIoCounters> {
    text.lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 14 {
                return None;
            }
            let num = |idx: usize| fields[idx].parse::<u64>().ok();
            Some(DiskIoCounters {
                name: fields[2].to_string(),
                read_count: num(3)?,
                read_bytes: num(5)?.saturating_mul(SECTOR_SIZE),
                read_time_ms: num(6)?,
                write_count: num(7)?,
                write_bytes: num(9)?.saturating_mul(SECTOR_SIZE),
                write_time_ms: num(10)?,
            })
        })
        .collect()
}

/// Rows of a `/proc/net/{tcp,udp}*` table, minus the header
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn count_socket_entries(text: &str) -> usize {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count()
}
