//! Error types for MCP server.

use rmcp::ErrorData;

/// Protocol-level failures.
///
/// Tool failures the caller should read (unreadable files, API errors) are
/// not errors at this level; they travel as error-flagged tool output.
#[derive(Debug, Clone, derive_more::Display)]
pub enum McpError {
    /// Tool not found
    #[display("Tool not found: {}", _0)]
    ToolNotFound(String),

    /// Invalid tool input
    #[display("Invalid tool input: {}", _0)]
    InvalidInput(String),

    /// Tool descriptor could not be converted to the protocol type
    #[display("Invalid tool schema: {}", _0)]
    InvalidToolSchema(String),
}

impl std::error::Error for McpError {}

impl From<McpError> for ErrorData {
    fn from(err: McpError) -> Self {
        match err {
            McpError::ToolNotFound(_) | McpError::InvalidInput(_) => {
                ErrorData::invalid_params(err.to_string(), None)
            }
            McpError::InvalidToolSchema(_) => ErrorData::internal_error(err.to_string(), None),
        }
    }
}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
