//! MCP server implementation.

use crate::tools::{DescribeImageTool, McpTool, ToolOutput, ToolRegistry};
use crate::{McpError, McpResult};
use pictor_error::PictorResult;
use pictor_media::ReferenceResolver;
use pictor_models::{DescriberConfig, DescriptionRequester};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Name advertised during the MCP handshake.
pub const SERVER_NAME: &str = "Image Recognition";

/// Usage hint sent to clients on initialize.
pub const SERVER_INSTRUCTIONS: &str =
    "Call describe-image with an http(s) image URL or a local file path. \
     Relative paths are resolved against the server's working directory.";

/// MCP router for Pictor.
///
/// Holds the tool registry and answers `tools/list` and `tools/call`.
#[derive(Clone)]
pub struct PictorRouter {
    name: String,
    version: String,
    instructions: Option<String>,
    tools: ToolRegistry,
}

impl PictorRouter {
    /// Creates a new router builder.
    pub fn builder() -> PictorRouterBuilder {
        PictorRouterBuilder::default()
    }

    /// Builds the production router: an OpenAI client configured from
    /// `config` and local paths resolved against the working directory.
    pub fn from_config(config: &DescriberConfig) -> PictorResult<Self> {
        let resolver = ReferenceResolver::from_current_dir()?;
        let requester = DescriptionRequester::from_config(config)?;

        info!(
            base_dir = %resolver.base_dir().display(),
            model = %requester.default_model(),
            "Configured describe-image tool"
        );

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(DescribeImageTool::new(resolver, requester)));

        Ok(Self::builder()
            .instructions(SERVER_INSTRUCTIONS)
            .tools(tools)
            .build())
    }

    /// Server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Server version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Registered tools.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Protocol descriptors for every registered tool.
    pub fn tool_descriptors(&self) -> McpResult<Vec<Tool>> {
        self.tools
            .list()
            .iter()
            .map(|tool| descriptor(tool.as_ref()))
            .collect()
    }

    /// Runs a tool call and converts its output to a protocol result.
    ///
    /// Unknown tools and malformed arguments are protocol errors. Tool
    /// failures come back as an error-flagged result.
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        let input = Value::Object(arguments.unwrap_or_default());

        match self.tools.execute(name, input).await {
            Ok(output) => {
                debug!(is_error = output.is_error, "Tool call completed");
                Ok(call_tool_result(output))
            }
            Err(e) => {
                warn!(error = %e, "Rejected tool call");
                Err(e.into())
            }
        }
    }
}

/// Converts a tool's metadata into the protocol `Tool` type.
fn descriptor(tool: &dyn McpTool) -> McpResult<Tool> {
    serde_json::from_value(json!({
        "name": tool.name(),
        "title": tool.title(),
        "description": tool.description(),
        "inputSchema": tool.input_schema(),
    }))
    .map_err(|e| McpError::InvalidToolSchema(format!("{}: {}", tool.name(), e)))
}

fn call_tool_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.text)];
    if output.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for PictorRouter {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: self.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: self.instructions.clone(),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = self.tool_descriptors()?;
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}

/// Builder for MCP router.
#[derive(Default)]
pub struct PictorRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    instructions: Option<String>,
    tools: Option<ToolRegistry>,
}

impl PictorRouterBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the instructions sent to clients on initialize.
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the router.
    pub fn build(self) -> PictorRouter {
        PictorRouter {
            name: self.name.unwrap_or_else(|| SERVER_NAME.to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            instructions: self.instructions,
            tools: self.tools.unwrap_or_default(),
        }
    }
}
