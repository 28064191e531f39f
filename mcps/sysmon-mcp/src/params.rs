//! Parameter types for system monitor tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MonitorError;
use crate::info::{disk::DEFAULT_PATH, process::ProcessQuery};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CpuInfoParams {
    #[schemars(description = "Report usage for each logical CPU instead of one overall figure")]
    #[serde(default)]
    pub per_cpu: Option<bool>,
}

impl CpuInfoParams {
    pub fn per_cpu(&self) -> bool {
        self.per_cpu.unwrap_or(false)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiskInfoParams {
    #[schemars(description = "Path whose filesystem usage is reported (optional, defaults to /)")]
    #[serde(default)]
    pub path: Option<String>,

    #[schemars(description = "Also list every mounted partition")]
    #[serde(default)]
    pub all_partitions: Option<bool>,
}

impl DiskInfoParams {
    /// Requested path; empty means the root filesystem
    pub fn path(&self) -> String {
        match self.path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => DEFAULT_PATH.to_string(),
        }
    }

    pub fn all_partitions(&self) -> bool {
        self.all_partitions.unwrap_or(false)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct NetworkInfoParams {
    #[schemars(description = "Exact interface name to report (optional, defaults to all interfaces)")]
    #[serde(default)]
    pub interface: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProcessInfoParams {
    #[schemars(description = "Process ID to describe in detail (optional, lists processes if omitted)")]
    #[serde(default)]
    pub pid: Option<f64>,

    #[schemars(description = "Maximum number of processes to list (optional, defaults to 10)")]
    #[serde(default)]
    pub limit: Option<f64>,

    #[schemars(description = "Sort order for the list: cpu, memory, pid or name (defaults to cpu)")]
    #[serde(default)]
    pub sort_by: Option<String>,
}

/// What a `get_process_info` call asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessRequest {
    Detail(u32),
    List(ProcessQuery),
}

impl TryFrom<ProcessInfoParams> for ProcessRequest {
    type Error = MonitorError;

    fn try_from(params: ProcessInfoParams) -> Result<Self, Self::Error> {
        match params.pid {
            Some(pid) => Ok(ProcessRequest::Detail(pid_from_number(pid)?)),
            None => Ok(ProcessRequest::List(ProcessQuery::new(
                params.sort_by.as_deref(),
                params.limit,
            ))),
        }
    }
}

/// Pids arrive as JSON numbers; `42.0` is fine, `-1` and `4.5` are not
fn pid_from_number(pid: f64) -> Result<u32, MonitorError> {
    if pid.is_finite() && pid >= 0.0 && pid.fract() == 0.0 && pid <= f64::from(u32::MAX) {
        Ok(pid as u32)
    } else {
        Err(MonitorError::InvalidArgument(format!(
            "PID must be a non-negative integer, got {pid}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortKey;
    use serde_json::json;

    #[test]
    fn test_empty_arguments() {
        let cpu: CpuInfoParams = serde_json::from_value(json!({})).unwrap();
        assert!(!cpu.per_cpu());

        let disk: DiskInfoParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(disk.path(), "/");
        assert!(!disk.all_partitions());

        let process: ProcessInfoParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            ProcessRequest::try_from(process).unwrap(),
            ProcessRequest::List(ProcessQuery::default())
        );
    }

    #[test]
    fn test_blank_disk_path() {
        let disk = DiskInfoParams {
            path: Some("  ".to_string()),
            all_partitions: Some(true),
        };
        assert_eq!(disk.path(), "/");
        assert!(disk.all_partitions());
    }

    #[test]
    fn test_pid_wins_over_listing() {
        let params: ProcessInfoParams =
            serde_json::from_value(json!({ "pid": 42, "limit": 3, "sort_by": "name" })).unwrap();
        assert_eq!(ProcessRequest::try_from(params).unwrap(), ProcessRequest::Detail(42));
    }

    #[test]
    fn test_float_numbers_accepted() {
        let params: ProcessInfoParams = serde_json::from_value(json!({ "pid": 1.0 })).unwrap();
        assert_eq!(ProcessRequest::try_from(params).unwrap(), ProcessRequest::Detail(1));

        let params: ProcessInfoParams = serde_json::from_value(json!({ "limit": 5.0 })).unwrap();
        match ProcessRequest::try_from(params).unwrap() {
            ProcessRequest::List(query) => assert_eq!(query.limit, 5),
            other => panic!("expected a listing, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_pids_rejected() {
        for pid in [-1.0, 4.5, 1e12] {
            let params = ProcessInfoParams {
                pid: Some(pid),
                ..Default::default()
            };
            let err = ProcessRequest::try_from(params).unwrap_err();
            assert!(matches!(err, MonitorError::InvalidArgument(_)));
            assert!(err.to_string().starts_with("PID must be a non-negative integer"));
        }
    }

    #[test]
    fn test_listing_arguments() {
        let params: ProcessInfoParams =
            serde_json::from_value(json!({ "limit": 0, "sort_by": "Memory" })).unwrap();
        match ProcessRequest::try_from(params).unwrap() {
            ProcessRequest::List(query) => {
                assert_eq!(query.limit, 10);
                assert_eq!(query.sort_by, SortKey::Memory);
            }
            other => panic!("expected a listing, got {other:?}"),
        }
    }
}
