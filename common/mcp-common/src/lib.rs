//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides the plumbing every server in the workspace needs:
//!
//! - **Tracing**: [`init_tracing`] writes logs to stderr (stdout belongs to the protocol)
//! - **Transport**: [`TransportArgs`] + [`serve`] pick stdio or streamable HTTP at startup
//! - **Results**: helpers that turn data or failures into `CallToolResult` text payloads
//! - **Dispatch**: [`InProcessTools`] for calling tools by name without a transport
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use mcp_common::{serve, TransportArgs};
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     transport: TransportArgs,
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     mcp_common::init_tracing("my_mcp")?;
//!     let cli = Cli::parse();
//!     serve(MyServer::new, &cli.transport).await
//! }
//! ```

pub mod dispatch;
pub mod init;
pub mod result;
pub mod transport;

// Re-export commonly used items at crate root
pub use dispatch::{DispatchError, DispatchResult, InProcessTools};
pub use init::init_tracing;
pub use result::{error_result, json_result, IntoToolResult};
pub use transport::{serve, TransportArgs, TransportKind};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing InProcessTools
pub use async_trait::async_trait;
