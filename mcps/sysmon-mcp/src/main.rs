//! System Monitor MCP Server
//!
//! # Usage
//!
//! Run directly: `sysmon-mcp`, or `sysmon-mcp --transport http` to serve
//! streamable HTTP at `/mcp`.
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "sysmon": { "command": "./sysmon-mcp" } } }
//! ```

use clap::Parser;
use sysmon_mcp::{Cli, SysMonitorServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("sysmon_mcp")?;

    let cli = Cli::parse();
    tracing::info!(
        transport = ?cli.transport.transport,
        cpu_sample_ms = cli.monitor.cpu_sample_ms,
        "Starting sysmon MCP server"
    );

    let monitor = cli.monitor.clone();
    mcp_common::serve(
        move || SysMonitorServer::with_config(monitor.clone()),
        &cli.transport,
    )
    .await
}
