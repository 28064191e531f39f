//! Command-line and environment configuration
//!
//! | Flag | Env | Default |
//! |---|---|---|
//! | `--transport stdio\|http\|sse` | `MCP_TRANSPORT` | `stdio` |
//! | `--port` | `MCP_PORT` | `8080` |
//! | `--base-url` | `MCP_BASE_URL` | `http://localhost:<port>` |
//! | `--cpu-sample-ms` | `SYSMON_CPU_SAMPLE_MS` | `200` |

use std::time::Duration;

use clap::{Args, Parser};
use mcp_common::TransportArgs;

#[derive(Debug, Parser)]
#[command(name = "sysmon-mcp", version, about = "System monitor MCP server")]
pub struct Cli {
    #[command(flatten)]
    pub transport: TransportArgs,

    #[command(flatten)]
    pub monitor: MonitorConfig,
}

/// Settings that shape metric collection
#[derive(Debug, Clone, Args)]
pub struct MonitorConfig {
    /// Milliseconds between the two samples a CPU usage reading needs
    #[arg(long, default_value_t = default_cpu_sample_ms(), env = "SYSMON_CPU_SAMPLE_MS")]
    pub cpu_sample_ms: u64,
}

fn default_cpu_sample_ms() -> u64 {
    200
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            cpu_sample_ms: default_cpu_sample_ms(),
        }
    }
}

impl MonitorConfig {
    /// Sampling interval, never shorter than the platform minimum
    pub fn cpu_sample_interval(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_ms).max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_common::TransportKind;

    #[test]
    fn test_default_interval() {
        let config = MonitorConfig::default();
        assert_eq!(config.cpu_sample_ms, 200);
        assert!(config.cpu_sample_interval() >= Duration::from_millis(200));
    }

    #[test]
    fn test_interval_has_floor() {
        let config = MonitorConfig { cpu_sample_ms: 0 };
        assert_eq!(
            config.cpu_sample_interval(),
            sysinfo::MINIMUM_CPU_UPDATE_INTERVAL
        );
    }

    #[test]
    fn test_parse_cli() {
        let cli = Cli::try_parse_from([
            "sysmon-mcp",
            "--transport",
            "sse",
            "--port",
            "3001",
            "--cpu-sample-ms",
            "500",
        ])
        .unwrap();
        assert_eq!(cli.transport.transport, TransportKind::Http);
        assert_eq!(cli.transport.endpoint_url(), "http://localhost:3001/mcp");
        assert_eq!(cli.monitor.cpu_sample_ms, 500);
    }
}
