//! Model Context Protocol (MCP) server for Pictor.
//!
//! Exposes a single `describe-image` tool that takes a remote image URL or a
//! local file path and returns a natural-language description from an
//! OpenAI-compatible vision model.
//!
//! # Usage
//!
//! ```no_run
//! use pictor_mcp::PictorRouter;
//! use pictor_models::DescriberConfig;
//! use rmcp::{transport::stdio, ServiceExt};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DescriberConfig::from_env()?;
//!     let router = PictorRouter::from_config(&config)?;
//!
//!     let service = router.serve(stdio()).await?;
//!     service.waiting().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{PictorRouter, PictorRouterBuilder, SERVER_INSTRUCTIONS, SERVER_NAME};
pub use tools::{DescribeImageTool, McpTool, ToolOutput, ToolRegistry};
