//! Tools exposed by the Pictor MCP server.

mod describe_image;

pub use describe_image::DescribeImageTool;

use crate::{McpError, McpResult};
use async_trait::async_trait;
use pictor_core::DescriptionResult;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A tool callable through `tools/call`.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Protocol name, unique within a registry.
    fn name(&self) -> &str;

    /// Returns a short human-readable title.
    fn title(&self) -> &str;

    /// Description shown to the client model.
    fn description(&self) -> &str;

    /// JSON Schema for the call arguments.
    fn input_schema(&self) -> Value;

    /// Runs the tool on the call arguments.
    ///
    /// Returns `Err` only for protocol problems such as malformed input.
    async fn execute(&self, input: Value) -> McpResult<ToolOutput>;
}

/// Text returned by a tool, flagged when it reports a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolOutput {
    /// Content shown to the caller
    pub text: String,
    /// Whether the caller must treat `text` as an error
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful output.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Error-flagged output.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<DescriptionResult> for ToolOutput {
    fn from(result: DescriptionResult) -> Self {
        match result {
            DescriptionResult::Described { text } => Self::ok(text),
            DescriptionResult::Failed { message } => Self::error(message),
        }
    }
}

/// Tools keyed by their protocol name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        tracing::debug!(tool = tool.name(), "Registering tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// Lists all registered tools, sorted by name.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        let mut tools: Vec<_> = self.tools.values().cloned().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    /// Runs the named tool, or fails with [`McpError::ToolNotFound`].
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<ToolOutput> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        tool.execute(input).await
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
