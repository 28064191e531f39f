//! Tracing initialization
//!
//! Every server logs to stderr: in stdio mode stdout carries the protocol
//! stream and a stray log line would corrupt it.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for an MCP server
///
/// - `RUST_LOG` filtering, with `<crate_name>=info` added on top
/// - stderr writer, no ANSI colors
/// - `LOG_FORMAT=json` switches to one JSON object per line
///
/// Can only be called once per process.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(format!("{crate_name}=info").parse()?);
    let registry = tracing_subscriber::registry().with(filter);

    if json_logs_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn json_logs_requested() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
