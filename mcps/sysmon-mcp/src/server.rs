//! MCP Server implementation for system monitoring

use mcp_common::{async_trait, DispatchError, DispatchResult, InProcessTools, IntoToolResult, McpError};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::config::MonitorConfig;
use crate::error::MonitorResult;
use crate::info::{self, users};
use crate::params::{
    CpuInfoParams, DiskInfoParams, NetworkInfoParams, ProcessInfoParams, ProcessRequest,
};
use crate::types::ToolReport;

const INSTRUCTIONS: &str = "System monitor MCP server - reports CPU usage, memory and swap, \
     disk usage, network interfaces, host details and running processes.";

/// The main System Monitor MCP Server
///
/// Holds no metric state: every call samples the OS afresh.
#[derive(Clone)]
pub struct SysMonitorServer {
    config: MonitorConfig,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SysMonitorServer {
    pub fn new() -> Self {
        Self::with_config(MonitorConfig::default())
    }

    pub fn with_config(config: MonitorConfig) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get CPU usage percentages (overall or per logical CPU), CPU model, vendor, frequency and core counts"
    )]
    async fn get_cpu_info(
        &self,
        Parameters(params): Parameters<CpuInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let per_cpu = params.per_cpu();
        let sample = self.config.cpu_sample_interval();
        let outcome = info::blocking("CPU information", move || info::cpu::collect(per_cpu, sample))
            .await
            .map(ToolReport::from);
        respond(outcome)
    }

    #[tool(description = "Get virtual memory and swap totals, usage and free space in bytes")]
    async fn get_memory_info(&self) -> Result<CallToolResult, McpError> {
        let outcome = info::blocking("memory information", info::memory::collect)
            .await
            .map(ToolReport::from);
        respond(outcome)
    }

    #[tool(
        description = "Get usage of the filesystem holding a path (default /), optionally every mounted partition and disk I/O counters"
    )]
    async fn get_disk_info(
        &self,
        Parameters(params): Parameters<DiskInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = params.path();
        let all_partitions = params.all_partitions();
        let outcome = info::blocking("disk usage information", move || {
            info::disk::collect(&path, all_partitions)
        })
        .await
        .map(ToolReport::from);
        respond(outcome)
    }

    #[tool(
        description = "Get network interfaces with MAC and IP addresses plus traffic counters, for all interfaces or one named interface"
    )]
    async fn get_network_info(
        &self,
        Parameters(params): Parameters<NetworkInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = info::blocking("network information", move || {
            info::network::collect(params.interface.as_deref())
        })
        .await
        .map(ToolReport::from);
        respond(outcome)
    }

    #[tool(
        description = "Get host details (hostname, OS, kernel, architecture, process count), users, boot time and uptime"
    )]
    async fn get_host_info(&self) -> Result<CallToolResult, McpError> {
        let outcome = info::blocking("host information", || {
            info::host::collect(&users::default_sources())
        })
        .await
        .map(ToolReport::from);
        respond(outcome)
    }

    #[tool(
        description = "Get details of one process by pid, or list processes sorted by cpu, memory, pid or name (default cpu, limit 10)"
    )]
    async fn get_process_info(
        &self,
        Parameters(params): Parameters<ProcessInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let sample = self.config.cpu_sample_interval();
        let request = match ProcessRequest::try_from(params) {
            Ok(request) => request,
            Err(e) => return respond(Err(e)),
        };
        let outcome = match request {
            ProcessRequest::Detail(pid) => info::blocking("process information", move || {
                info::process::describe_process(pid, sample)
            })
            .await
            .map(ToolReport::from),
            ProcessRequest::List(query) => info::blocking("process list", move || {
                info::process::list_processes(query, sample)
            })
            .await
            .map(ToolReport::from),
        };
        respond(outcome)
    }
}

fn respond(outcome: MonitorResult<ToolReport>) -> Result<CallToolResult, McpError> {
    if let Ok(report) = &outcome {
        tracing::debug!(tool = report.tool_name(), "collected report");
    }
    Ok(outcome.into_tool_result())
}

#[tool_handler]
impl rmcp::ServerHandler for SysMonitorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for SysMonitorServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InProcessTools for SysMonitorServer {
    fn server_name(&self) -> &str {
        "sysmon"
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> DispatchResult<CallToolResult> {
        match name {
            "get_cpu_info" => {
                let params: CpuInfoParams = serde_json::from_value(params)?;
                self.get_cpu_info(Parameters(params)).await.map_err(Into::into)
            }

            "get_memory_info" => self.get_memory_info().await.map_err(Into::into),

            "get_disk_info" => {
                let params: DiskInfoParams = serde_json::from_value(params)?;
                self.get_disk_info(Parameters(params)).await.map_err(Into::into)
            }

            "get_network_info" => {
                let params: NetworkInfoParams = serde_json::from_value(params)?;
                self.get_network_info(Parameters(params)).await.map_err(Into::into)
            }

            "get_host_info" => self.get_host_info().await.map_err(Into::into),

            "get_process_info" => {
                let params: ProcessInfoParams = serde_json::from_value(params)?;
                self.get_process_info(Parameters(params)).await.map_err(Into::into)
            }

            _ => Err(DispatchError::ToolNotFound(name.to_string())),
        }
    }
}
