//! Disk information collection

use std::path::Path;

use sysinfo::{Disk, DiskKind, Disks};

use super::{percent, procfs};
use crate::error::{MonitorError, MonitorResult};
use crate::types::{DiskReport, DiskUsage, Partition};

/// Path queried when none is given
pub const DEFAULT_PATH: &str = "/";

/// Usage of the filesystem holding `path`, plus optional partition list
pub fn collect(path: &str, all_partitions: bool) -> MonitorResult<DiskReport> {
    let disks = Disks::new_with_refreshed_list();
    let usage = usage_for(&disks, path)?;

    let partitions = if all_partitions {
        Some(disks.iter().map(partition).collect())
    } else {
        None
    };

    let io_counters = match procfs::disk_io_counters() {
        Ok(counters) => Some(counters),
        Err(e) => {
            tracing::debug!("Skipping disk I/O counters: {}", e);
            None
        }
    };

    Ok(DiskReport {
        path: path.to_string(),
        usage,
        partitions,
        io_counters,
    })
}

fn usage_for(disks: &Disks, path: &str) -> MonitorResult<DiskUsage> {
    const WHAT: &str = "disk usage information";

    let target = std::fs::canonicalize(path)
        .map_err(|e| MonitorError::unavailable(WHAT, format!("{path}: {e}")))?;

    let mount = containing_mount(&target, disks.iter().map(Disk::mount_point))
        .ok_or_else(|| {
            MonitorError::unavailable(WHAT, format!("no mounted filesystem contains {path}"))
        })?;
    let disk = disks
        .iter()
        .find(|disk| disk.mount_point() == mount)
        .ok_or_else(|| MonitorError::unavailable(WHAT, format!("{path}: mount vanished")))?;

    let total = disk.total_space();
    let free = disk.available_space();
    let used = total.saturating_sub(free);

    Ok(DiskUsage {
        path: path.to_string(),
        mount_point: disk.mount_point().to_string_lossy().to_string(),
        fstype: disk.file_system().to_string_lossy().to_string(),
        total,
        free,
        used,
        used_percent: percent(used, total),
    })
}

/// The deepest mount point that `target` lives under
fn containing_mount<'a>(
    target: &Path,
    mounts: impl Iterator<Item = &'a Path>,
) -> Option<&'a Path> {
    mounts
        .filter(|mount| target.starts_with(mount))
        .max_by_key(|mount| mount.components().count())
}

fn partition(disk: &Disk) -> Partition {
    Partition {
        device: disk.name().to_string_lossy().to_string(),
        mount_point: disk.mount_point().to_string_lossy().to_string(),
        fstype: disk.file_system().to_string_lossy().to_string(),
        kind: kind_name(disk.kind()).to_string(),
        total_bytes: disk.total_space(),
        available_bytes: disk.available_space(),
        is_removable: disk.is_removable(),
    }
}

fn kind_name(kind: DiskKind) -> &'static str {
    match kind {
        DiskKind::HDD => "HDD",
        DiskKind::SSD => "SSD",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounts() -> Vec<&'static Path> {
        ["/", "/home", "/home/shared", "/boot/efi", "/var/lib/docker"]
            .into_iter()
            .map(Path::new)
            .collect()
    }

    #[test]
    fn test_containing_mount_prefers_deepest() {
        let mounts = mounts();
        let pick = |p: &str| containing_mount(Path::new(p), mounts.iter().copied());

        assert_eq!(pick("/home/shared/docs"), Some(Path::new("/home/shared")));
        assert_eq!(pick("/home/alice"), Some(Path::new("/home")));
        assert_eq!(pick("/usr/bin"), Some(Path::new("/")));
        assert_eq!(pick("/"), Some(Path::new("/")));
    }

    #[test]
    fn test_containing_mount_matches_whole_components() {
        let mounts = mounts();
        // "/homework" is not under "/home"
        assert_eq!(
            containing_mount(Path::new("/homework"), mounts.iter().copied()),
            Some(Path::new("/"))
        );
    }

    #[test]
    fn test_containing_mount_none() {
        let mounts = vec![Path::new("/data")];
        assert_eq!(containing_mount(Path::new("/etc"), mounts.into_iter()), None);
    }

    #[test]
    fn test_missing_path_is_unavailable() {
        let err = collect("/definitely/not/a/real/path", false).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to get disk usage information"));
    }
}
