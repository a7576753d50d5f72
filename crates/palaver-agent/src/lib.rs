//! Agent configuration for the Palaver voice assistant.
//!
//! Builds the descriptor an external conversation runtime starts from:
//! the persona and style prompts, the model identifier, and the tool
//! list. The runtime owns the conversation loop, audio I/O, and tool
//! dispatch; this crate only parameterizes it.
//!
//! [`starting_agent`] is the well-known entry point: the shipped
//! persona, the shipped model, and no tools registered. Hosts that want
//! the dormant tools (order lookup, refund submission, hosted web
//! search) register them explicitly with [`Agent::with_tool`].

pub mod agent;
pub mod config;
pub mod error;
pub mod mock_api;
pub mod persona;
pub mod tool;
pub mod tools;

pub use agent::{starting_agent, Agent};
pub use config::{load_config, AgentSettings, Config, ConfigError};
pub use error::ToolError;
pub use persona::{
    combined_instructions, AGENT_INSTRUCTIONS, AGENT_MODEL, AGENT_NAME, STYLE_INSTRUCTIONS,
};
pub use tool::{AgentTool, Tool};
pub use tools::{GetPastOrdersTool, SubmitRefundRequestTool, WebSearchTool};
