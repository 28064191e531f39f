//! Process listing and detail lookup
//!
//! A listing takes one snapshot of every process, resolves each row's fields
//! independently (a field that cannot be read degrades instead of dropping
//! the row), orders the rows and truncates them. Process lists race the live
//! OS, so a process that exits mid-snapshot may still show up with degraded
//! fields.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::time::Duration;

use sysinfo::{Pid, Process, System, Users};

use crate::error::{MonitorError, MonitorResult};
use crate::types::{
    ProcessDetail, ProcessIo, ProcessList, ProcessMemory, ProcessSummary, SortKey,
};

/// Rows returned when no (or a non-positive) limit is given
pub const DEFAULT_LIMIT: usize = 10;

/// Name reported for a process whose name could not be read
pub const UNKNOWN_NAME: &str = "unknown";

/// Validated listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessQuery {
    pub sort_by: SortKey,
    pub limit: usize,
}

impl Default for ProcessQuery {
    fn default() -> Self {
        Self {
            sort_by: SortKey::Cpu,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ProcessQuery {
    /// Build a query from raw arguments
    ///
    /// Limits arrive as JSON numbers. Zero, negative or non-finite means
    /// [`DEFAULT_LIMIT`]; any other value is rounded down, but never below 1.
    pub fn new(sort_by: Option<&str>, limit: Option<f64>) -> Self {
        let limit = match limit {
            Some(n) if n.is_finite() && n > 0.0 => (n.trunc() as usize).max(1),
            _ => DEFAULT_LIMIT,
        };
        Self {
            sort_by: sort_by.map(SortKey::parse_lenient).unwrap_or_default(),
            limit,
        }
    }
}

/// Order and truncate a snapshot
///
/// Rows are first put in ascending pid order, then stable-sorted by the
/// query's key, so ties come out in pid order.
pub fn rank(mut processes: Vec<ProcessSummary>, query: &ProcessQuery) -> ProcessList {
    let total_count = processes.len();

    processes.sort_by_key(|p| p.pid);
    match query.sort_by {
        SortKey::Cpu => processes.sort_by(|a, b| descending(a.cpu_percent, b.cpu_percent)),
        SortKey::Memory => processes.sort_by(|a, b| descending(a.mem_percent, b.mem_percent)),
        SortKey::Pid => {}
        SortKey::Name => processes.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    processes.truncate(query.limit);

    ProcessList {
        total_count,
        returned_count: processes.len(),
        sort_by: query.sort_by,
        processes,
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// List current processes
pub fn list_processes(query: ProcessQuery, sample: Duration) -> MonitorResult<ProcessList> {
    let sys = sample_processes(sample);
    let total_memory = sys.total_memory();

    let summaries: Vec<ProcessSummary> = sys
        .processes()
        .iter()
        .filter(|(_, process)| is_process(process))
        .map(|(pid, process)| summarize(*pid, process, total_memory))
        .collect();

    if summaries.is_empty() {
        return Err(MonitorError::unavailable("process list", "no processes visible"));
    }

    let list = rank(summaries, &query);
    tracing::debug!(
        total = list.total_count,
        returned = list.returned_count,
        sort_by = %list.sort_by,
        "listed processes"
    );
    Ok(list)
}

/// Detailed snapshot of a single process
pub fn describe_process(pid: u32, sample: Duration) -> MonitorResult<ProcessDetail> {
    let target = Pid::from_u32(pid);

    let mut sys = System::new_all();
    if sys.process(target).is_none() {
        return Err(MonitorError::ProcessNotFound(pid));
    }
    std::thread::sleep(sample);
    sys.refresh_all();

    // Exited while we were sampling
    let process = sys
        .process(target)
        .ok_or(MonitorError::ProcessNotFound(pid))?;

    let users = Users::new_with_refreshed_list();
    let disk_usage = process.disk_usage();
    let own_uid = sysinfo::get_current_pid()
        .ok()
        .and_then(|me| sys.process(me))
        .and_then(Process::user_id);
    let same_owner = matches!((process.user_id(), own_uid), (Some(a), Some(b)) if a == b);

    Ok(ProcessDetail {
        pid,
        name: process_name(process.name()),
        cmdline: process
            .cmd()
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" "),
        create_time: process.start_time(),
        status: process.status().to_string(),
        cpu_percent: finite_or_zero(f64::from(process.cpu_usage())),
        username: process
            .user_id()
            .and_then(|uid| users.get_user_by_id(uid))
            .map(|user| user.name().to_string()),
        num_threads: process.tasks().map(|tasks| tasks.len()),
        memory: process_memory(process),
        io_counters: process_io(
            disk_usage.total_read_bytes,
            disk_usage.total_written_bytes,
            same_owner,
        ),
    })
}

/// Two refreshes `sample` apart, so per-process CPU usage is meaningful
fn sample_processes(sample: Duration) -> System {
    let mut sys = System::new_all();
    std::thread::sleep(sample);
    sys.refresh_all();
    sys
}

fn summarize(pid: Pid, process: &Process, total_memory: u64) -> ProcessSummary {
    ProcessSummary {
        pid: pid.as_u32(),
        name: process_name(process.name()),
        cpu_percent: finite_or_zero(f64::from(process.cpu_usage())),
        mem_percent: finite_or_zero(super::percent(process.memory(), total_memory)),
        memory_bytes: process_memory(process),
    }
}

/// Whether a `processes()` entry is a process rather than one of its threads
///
/// On Linux every task shows up in the process table, tagged with a thread kind.
pub(crate) fn is_process(process: &Process) -> bool {
    process.thread_kind().is_none()
}

fn process_name(name: &OsStr) -> String {
    let name = name.to_string_lossy();
    if name.trim().is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        name.into_owned()
    }
}

/// `None` when the OS reports no memory at all (kernel threads, zombies)
fn process_memory(process: &Process) -> Option<ProcessMemory> {
    let rss = process.memory();
    let vms = process.virtual_memory();
    if rss == 0 && vms == 0 {
        return None;
    }
    Some(ProcessMemory {
        rss,
        vms,
        swap: None,
    })
}

/// I/O totals, or `None` when they read as zero for a process we may not inspect
///
/// Unreadable counters come back from the OS as zeros, which is only
/// trustworthy for processes owned by the caller.
fn process_io(read_bytes: u64, write_bytes: u64, same_owner: bool) -> Option<ProcessIo> {
    if read_bytes == 0 && write_bytes == 0 && !same_owner {
        return None;
    }
    Some(ProcessIo {
        read_bytes,
        write_bytes,
    })
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc_row(pid: u32, name: &str, cpu: f64, mem: f64) -> ProcessSummary {
        ProcessSummary {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            mem_percent: mem,
            memory_bytes: None,
        }
    }

    fn snapshot() -> Vec<ProcessSummary> {
        vec![
            proc_row(42, "postgres", 12.5, 8.0),
            proc_row(7, "bash", 0.0, 0.4),
            proc_row(1, "init", 0.1, 0.2),
            proc_row(300, "firefox", 55.0, 22.5),
            proc_row(15, "unknown", 0.0, 0.0),
            proc_row(99, "cargo", 12.5, 3.1),
        ]
    }

    fn pids(list: &ProcessList) -> Vec<u32> {
        list.processes.iter().map(|p| p.pid).collect()
    }

    fn query(sort_by: SortKey, limit: usize) -> ProcessQuery {
        ProcessQuery { sort_by, limit }
    }

    #[test]
    fn test_cpu_example() {
        let rows = vec![
            proc_row(1, "a", 5.0, 0.0),
            proc_row(2, "b", 90.0, 0.0),
            proc_row(3, "c", 40.0, 0.0),
        ];
        let list = rank(rows, &query(SortKey::Cpu, 2));
        assert_eq!(pids(&list), vec![2, 3]);
        assert_eq!(list.total_count, 3);
        assert_eq!(list.returned_count, 2);
        assert_eq!(list.sort_by, SortKey::Cpu);
    }

    #[test]
    fn test_cpu_is_non_increasing() {
        let list = rank(snapshot(), &query(SortKey::Cpu, 100));
        assert!(list
            .processes
            .windows(2)
            .all(|w| w[0].cpu_percent >= w[1].cpu_percent));
        // 42 and 99 tie at 12.5; pid order breaks the tie
        assert_eq!(pids(&list), vec![300, 42, 99, 1, 7, 15]);
    }

    #[test]
    fn test_memory_is_non_increasing() {
        let list = rank(snapshot(), &query(SortKey::Memory, 100));
        assert!(list
            .processes
            .windows(2)
            .all(|w| w[0].mem_percent >= w[1].mem_percent));
        assert_eq!(list.processes[0].pid, 300);
    }

    #[test]
    fn test_pid_is_non_decreasing() {
        let list = rank(snapshot(), &query(SortKey::Pid, 100));
        assert_eq!(pids(&list), vec![1, 7, 15, 42, 99, 300]);
    }

    #[test]
    fn test_name_is_non_decreasing() {
        let list = rank(snapshot(), &query(SortKey::Name, 100));
        let names: Vec<&str> = list.processes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["bash", "cargo", "firefox", "init", "postgres", "unknown"]
        );
    }

    #[test]
    fn test_unknown_key_behaves_like_cpu() {
        let fallback = rank(snapshot(), &ProcessQuery::new(Some("uptime"), Some(4.0)));
        let cpu = rank(snapshot(), &ProcessQuery::new(Some("cpu"), Some(4.0)));
        assert_eq!(fallback.sort_by, SortKey::Cpu);
        assert_eq!(pids(&fallback), pids(&cpu));
    }

    #[test]
    fn test_ordering_does_not_depend_on_snapshot_order() {
        let mut reversed = snapshot();
        reversed.reverse();
        let a = rank(snapshot(), &query(SortKey::Cpu, 100));
        let b = rank(reversed, &query(SortKey::Cpu, 100));
        assert_eq!(pids(&a), pids(&b));
    }

    #[test]
    fn test_returned_count_is_min_of_limit_and_total() {
        for limit in [1, 3, 6, 50] {
            let list = rank(snapshot(), &query(SortKey::Pid, limit));
            assert_eq!(list.returned_count, limit.min(6));
            assert_eq!(list.processes.len(), list.returned_count);
            assert_eq!(list.total_count, 6);
        }
    }

    #[test]
    fn test_query_defaults() {
        assert_eq!(ProcessQuery::new(None, None), ProcessQuery::default());
        assert_eq!(ProcessQuery::new(None, Some(0.0)).limit, DEFAULT_LIMIT);
        assert_eq!(ProcessQuery::new(None, Some(-5.0)).limit, DEFAULT_LIMIT);
        assert_eq!(ProcessQuery::new(None, Some(f64::NAN)).limit, DEFAULT_LIMIT);
        assert_eq!(ProcessQuery::new(None, Some(3.0)).limit, 3);
        assert_eq!(ProcessQuery::new(Some("name"), None).sort_by, SortKey::Name);
    }

    #[test]
    fn test_limit_zero_means_ten() {
        let rows: Vec<ProcessSummary> = (1..=25)
            .map(|pid| proc_row(pid, "worker", f64::from(pid), 0.0))
            .collect();
        let list = rank(rows, &ProcessQuery::new(Some("cpu"), Some(0.0)));
        assert_eq!(list.returned_count, 10);
        assert_eq!(list.total_count, 25);
        assert_eq!(list.processes[0].pid, 25);
    }

    #[test]
    fn test_empty_snapshot() {
        let list = rank(Vec::new(), &ProcessQuery::default());
        assert_eq!(list.total_count, 0);
        assert_eq!(list.returned_count, 0);
    }

    #[test]
    fn test_fractional_limits() {
        assert_eq!(ProcessQuery::new(None, Some(5.9)).limit, 5);
        assert_eq!(ProcessQuery::new(None, Some(0.5)).limit, 1);
        assert_eq!(ProcessQuery::new(None, Some(1e30)).limit, usize::MAX);
    }

    #[test]
    fn test_blank_names_are_unknown() {
        assert_eq!(process_name(OsStr::new("")), UNKNOWN_NAME);
        assert_eq!(process_name(OsStr::new("   ")), UNKNOWN_NAME);
        assert_eq!(process_name(OsStr::new("\t\n")), UNKNOWN_NAME);
        assert_eq!(process_name(OsStr::new("postgres")), "postgres");
        assert_eq!(process_name(OsStr::new(" sshd ")), " sshd ");
    }

    #[test]
    fn test_process_io_zero_readings() {
        assert_eq!(process_io(0, 0, false), None);
        assert_eq!(
            process_io(0, 0, true),
            Some(ProcessIo {
                read_bytes: 0,
                write_bytes: 0
            })
        );
        assert_eq!(process_io(4096, 0, false).map(|io| io.read_bytes), Some(4096));
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(3.5), 3.5);
    }

    #[test]
    fn test_list_live_processes() {
        let list = list_processes(
            ProcessQuery::new(Some("pid"), Some(5.0)),
            sysinfo::MINIMUM_CPU_UPDATE_INTERVAL,
        )
        .unwrap();
        assert!(list.total_count >= 1);
        assert!(list.returned_count <= 5);
        assert!(list.total_count >= list.returned_count);
        assert!(list.processes.windows(2).all(|w| w[0].pid <= w[1].pid));
        assert!(list.processes.iter().all(|p| !p.name.is_empty()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_threads_are_not_listed() {
        use std::sync::{Arc, Barrier};

        let ready = Arc::new(Barrier::new(5));
        let done = Arc::new(Barrier::new(5));
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let (ready, done) = (Arc::clone(&ready), Arc::clone(&done));
                std::thread::spawn(move || {
                    ready.wait();
                    done.wait();
                })
            })
            .collect();
        ready.wait();

        let own_pid = std::process::id();
        let thread_ids: Vec<u32> = std::fs::read_dir("/proc/self/task")
            .unwrap()
            .filter_map(|entry| entry.ok()?.file_name().to_str()?.parse().ok())
            .filter(|tid| *tid != own_pid)
            .collect();
        let list = list_processes(
            query(SortKey::Pid, usize::MAX),
            sysinfo::MINIMUM_CPU_UPDATE_INTERVAL,
        );

        done.wait();
        for worker in workers {
            worker.join().unwrap();
        }

        let list = list.unwrap();
        assert!(thread_ids.len() >= 4);
        assert!(pids(&list).contains(&own_pid));
        assert!(pids(&list).iter().all(|pid| !thread_ids.contains(pid)));
        assert_eq!(list.total_count, list.returned_count);
    }

    #[test]
    fn test_describe_own_process() {
        let pid = std::process::id();
        let detail = describe_process(pid, sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).unwrap();
        assert_eq!(detail.pid, pid);
        assert!(!detail.name.is_empty());
        assert!(detail.create_time > 0);
    }

    #[test]
    fn test_describe_missing_process() {
        let result = describe_process(999_999, Duration::ZERO);
        assert!(matches!(result, Err(MonitorError::ProcessNotFound(999_999))));
    }
}
