//! Result helpers for MCP tool responses
//!
//! Tools answer with exactly one text content: pretty-printed JSON on
//! success, a human-readable message flagged `is_error` on failure. Failures
//! are tool results, not protocol errors, so the calling agent can read them.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use std::fmt::Display;

/// Serialize `data` as pretty-printed JSON (2-space indent) into a success result
///
/// A serialization failure becomes an error result instead.
pub fn json_result<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => error_result(format!("Failed to serialize result: {e}")),
    }
}

/// Build an error result carrying `message` as its text payload
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Conversion from a handler outcome into the tool's text payload
///
/// ```rust,ignore
/// use mcp_common::IntoToolResult;
///
/// async fn get_thing(&self) -> Result<CallToolResult, McpError> {
///     Ok(collect_thing().into_tool_result())
/// }
/// ```
pub trait IntoToolResult {
    fn into_tool_result(self) -> CallToolResult;
}

impl<T: Serialize, E: Display> IntoToolResult for Result<T, E> {
    fn into_tool_result(self) -> CallToolResult {
        match self {
            Ok(data) => json_result(&data),
            Err(e) => {
                tracing::warn!(error = %e, "tool call failed");
                error_result(e.to_string())
            }
        }
    }
}
