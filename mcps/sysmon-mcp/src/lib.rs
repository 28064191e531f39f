//! System Monitor MCP Library
//!
//! Live system metrics via MCP: CPU usage, memory and swap, disk usage,
//! network interfaces, host details and processes. Every tool call samples
//! the OS afresh and answers with pretty-printed JSON.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use sysmon_mcp::{InProcessTools, SysMonitorServer};
//!
//! let server = SysMonitorServer::new();
//! let json = server
//!     .call_tool_text("get_process_info", serde_json::json!({ "sort_by": "memory" }))
//!     .await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `sysmon-mcp` (stdio) or `sysmon-mcp --transport http --port 8080`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "sysmon": { "command": "./sysmon-mcp" } } }
//! ```

pub mod config;
pub mod error;
pub mod info;
pub mod params;
pub mod server;
pub mod types;

pub use config::{Cli, MonitorConfig};
pub use error::{MonitorError, MonitorResult};
pub use server::SysMonitorServer;

// Re-export parameter types for direct API usage
pub use params::{CpuInfoParams, DiskInfoParams, NetworkInfoParams, ProcessInfoParams};

pub use mcp_common::{DispatchError, DispatchResult, InProcessTools};
