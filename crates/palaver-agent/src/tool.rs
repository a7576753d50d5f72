//! The tool interface between the agent and the hosting runtime.
//!
//! A [`Tool`] is a named callable the runtime invokes mid-conversation
//! when the model requests it. The runtime sees tools in two forms: the
//! serializable [`ToolSpec`] it forwards to the model API, and the
//! callable itself for dispatch. Hosted tools (currently only web
//! search) are executed on the provider side and contribute a spec but
//! no local callable.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use palaver_types::ToolSpec;

use crate::error::ToolError;
use crate::tools::WebSearchTool;

/// A named callable the external runtime may invoke on the model's
/// request.
///
/// Implementations must be `Send + Sync`; the runtime dispatches calls
/// from its own tasks.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model invokes this tool by.
    fn name(&self) -> &str;

    /// What the tool does, surfaced to the model.
    fn description(&self) -> &str;

    /// JSON schema for the tool's arguments object.
    fn parameters(&self) -> serde_json::Value;

    /// Executes the tool with the model-supplied arguments.
    async fn call(&self, arguments: serde_json::Value) -> Result<String, ToolError>;

    /// Serializable descriptor for this tool.
    fn spec(&self) -> ToolSpec {
        ToolSpec::Function {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// One entry in an agent's tool list.
#[derive(Clone)]
pub enum AgentTool {
    /// A function tool dispatched back into this process.
    Function(Arc<dyn Tool>),
    /// The provider-hosted web-search tool.
    WebSearch(WebSearchTool),
}

impl AgentTool {
    /// Wraps a function tool as a list entry.
    pub fn function(tool: impl Tool + 'static) -> Self {
        Self::Function(Arc::new(tool))
    }

    /// Returns the name this entry occupies in the tool list.
    pub fn name(&self) -> &str {
        match self {
            Self::Function(tool) => tool.name(),
            Self::WebSearch(_) => "web_search",
        }
    }

    /// Serializable descriptor for this entry.
    pub fn spec(&self) -> ToolSpec {
        match self {
            Self::Function(tool) => tool.spec(),
            Self::WebSearch(search) => search.spec(),
        }
    }

    /// Returns the callable if this entry is a function tool.
    pub fn as_function(&self) -> Option<&Arc<dyn Tool>> {
        match self {
            Self::Function(tool) => Some(tool),
            Self::WebSearch(_) => None,
        }
    }
}

impl From<WebSearchTool> for AgentTool {
    fn from(tool: WebSearchTool) -> Self {
        Self::WebSearch(tool)
    }
}

// Trait objects carry no Debug of their own; identify entries by name.
impl fmt::Debug for AgentTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AgentTool").field(&self.name()).finish()
    }
}
