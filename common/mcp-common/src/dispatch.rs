//! In-process tool dispatch
//!
//! [`InProcessTools`] lets a host call a server's tools by name with a JSON
//! argument object, skipping the transport entirely. Servers built on
//! `#[tool_router]` implement it by listing their router and matching on the
//! tool name.
//!
//! ```rust,ignore
//! use mcp_common::InProcessTools;
//!
//! let server = SysMonitorServer::default();
//! let text = server.call_tool_text("get_memory_info", serde_json::json!({})).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool ran and answered with an error result
    #[error("{0}")]
    ToolFailed(String),

    #[error("mcp error: {0}")]
    Protocol(String),
}

impl From<rmcp::ErrorData> for DispatchError {
    fn from(err: rmcp::ErrorData) -> Self {
        DispatchError::Protocol(err.message.to_string())
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// A server whose tools can be invoked directly, without a transport
#[async_trait]
pub trait InProcessTools: Send + Sync {
    /// Name used in MCP client configuration
    fn server_name(&self) -> &str;

    /// Every tool with its name, description and input schema
    fn list_tools(&self) -> Vec<Tool>;

    /// Invoke `name` with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> DispatchResult<CallToolResult>;

    fn tool_names(&self) -> Vec<String> {
        self.list_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    /// Invoke a tool and return its text payload
    ///
    /// An error result from the tool becomes [`DispatchError::ToolFailed`]
    /// carrying the tool's message.
    async fn call_tool_text(&self, name: &str, params: Value) -> DispatchResult<String> {
        let result = self.call_tool(name, params).await?;
        let text = result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|t| t.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n");

        if result.is_error.unwrap_or(false) {
            Err(DispatchError::ToolFailed(text))
        } else {
            Ok(text)
        }
    }
}
