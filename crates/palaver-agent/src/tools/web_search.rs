//! Provider-hosted web-search tool configuration.

use palaver_types::{ToolSpec, UserLocation};

/// Configuration for the hosted web-search tool.
///
/// Unlike the function tools, the provider executes searches itself, so
/// this contributes only a descriptor to the tool list and no local
/// callable. The optional location biases results; it is never a
/// precise position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebSearchTool {
    user_location: Option<UserLocation>,
}

impl WebSearchTool {
    /// Creates the tool with no location hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coarse location used to bias search results.
    pub fn with_user_location(mut self, location: UserLocation) -> Self {
        self.user_location = Some(location);
        self
    }

    /// Returns the configured location hint, if any.
    pub fn user_location(&self) -> Option<&UserLocation> {
        self.user_location.as_ref()
    }

    /// Serializable descriptor for this tool.
    pub fn spec(&self) -> ToolSpec {
        ToolSpec::WebSearch {
            user_location: self.user_location.clone(),
        }
    }
}
