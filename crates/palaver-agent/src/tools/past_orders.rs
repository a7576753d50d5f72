//! Order-history lookup tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::error::ToolError;
use crate::mock_api::MockOrdersApi;
use crate::tool::Tool;

/// Returns the caller's past orders from the order backend.
///
/// A thin adapter: it takes no arguments and hands back the backend's
/// order list serialized to a JSON string, untouched.
#[derive(Debug, Clone, Default)]
pub struct GetPastOrdersTool {
    api: Arc<MockOrdersApi>,
}

impl GetPastOrdersTool {
    /// Creates the tool over the given backend.
    pub fn new(api: Arc<MockOrdersApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetPastOrdersTool {
    fn name(&self) -> &str {
        "get_past_orders"
    }

    fn description(&self) -> &str {
        "Returns the customer's past orders as a JSON list."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({ "type": "object", "properties": {}, "required": [] })
    }

    async fn call(&self, _arguments: serde_json::Value) -> Result<String, ToolError> {
        Ok(serde_json::to_string(self.api.past_orders())?)
    }
}
