//! Refund-request submission tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::error::ToolError;
use crate::mock_api::MockOrdersApi;
use crate::tool::Tool;

/// Submits a refund request for one order.
///
/// Forwards the model-supplied order number to the backend and returns
/// the backend's response string unchanged. The only failure mode is a
/// missing or non-string `order_number` argument.
#[derive(Debug, Clone, Default)]
pub struct SubmitRefundRequestTool {
    api: Arc<MockOrdersApi>,
}

impl SubmitRefundRequestTool {
    /// Creates the tool over the given backend.
    pub fn new(api: Arc<MockOrdersApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for SubmitRefundRequestTool {
    fn name(&self) -> &str {
        "submit_refund_request"
    }

    fn description(&self) -> &str {
        "Confirm with the user first"
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "order_number": {
                    "type": "string",
                    "description": "The order number to request a refund for."
                }
            },
            "required": ["order_number"]
        })
    }

    async fn call(&self, arguments: serde_json::Value) -> Result<String, ToolError> {
        let order_number = arguments
            .get("order_number")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                ToolError::InvalidArguments("expected a string `order_number` field".to_string())
            })?;

        Ok(self.api.submit_refund_request(order_number))
    }
}
