//! The agent descriptor and its assembly.
//!
//! An [`Agent`] is a plain configuration value: a name, the combined
//! persona and style prompt, a model identifier, and an ordered tool
//! list. Constructing one has no side effects and cannot fail; the
//! external conversation runtime takes ownership of it and treats it as
//! read-only.

use std::sync::Arc;

use palaver_types::ToolSpec;
use tracing::debug;

use crate::config::AgentSettings;
use crate::persona::combined_instructions;
use crate::tool::{AgentTool, Tool};

/// The configuration value handed to the external conversation runtime:
/// a persona, its instructions, its model, and its available tools.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Display name the runtime reports for this agent.
    pub name: String,
    /// Combined persona and style prompt.
    pub instructions: String,
    /// Model identifier the conversation runs on.
    pub model: String,
    /// Tools offered to the model, in registration order.
    pub tools: Vec<AgentTool>,
}

impl Agent {
    /// Creates a descriptor with an empty tool list.
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model: model.into(),
            tools: Vec::new(),
        }
    }

    /// Builds a descriptor from loaded settings: the persona and style
    /// prompts are joined with a single space, everything else is
    /// carried over unchanged.
    pub fn from_settings(settings: &AgentSettings) -> Self {
        let agent = Self::new(
            &settings.name,
            combined_instructions(&settings.instructions, &settings.style_instructions),
            &settings.model,
        );
        debug!(
            name = %agent.name,
            model = %agent.model,
            tools = agent.tools.len(),
            "assembled agent descriptor"
        );
        agent
    }

    /// Appends one tool to the list.
    pub fn with_tool(mut self, tool: impl Into<AgentTool>) -> Self {
        self.tools.push(tool.into());
        self
    }

    /// Serializable tool descriptors, in registration order.
    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(AgentTool::spec).collect()
    }

    /// Looks up a function tool by name for runtime dispatch. Hosted
    /// tools never match; they have no local callable.
    pub fn find_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools
            .iter()
            .filter_map(AgentTool::as_function)
            .find(|tool| tool.name() == name)
    }
}

/// Assembles the descriptor the hosting runtime starts conversations
/// with. This is the crate's well-known entry point: default persona,
/// default model, no tools registered.
pub fn starting_agent() -> Agent {
    Agent::from_settings(&AgentSettings::default())
}
