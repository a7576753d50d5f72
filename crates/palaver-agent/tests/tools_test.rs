use std::sync::Arc;

use palaver_agent::mock_api::{MockOrdersApi, Order};
use palaver_agent::{
    starting_agent, AgentTool, GetPastOrdersTool, SubmitRefundRequestTool, Tool, ToolError,
    WebSearchTool,
};
use palaver_types::ToolSpec;
use serde_json::json;

#[tokio::test]
async fn past_orders_dispatched_through_the_agent() {
    let agent = starting_agent().with_tool(AgentTool::function(GetPastOrdersTool::default()));

    let tool = agent
        .find_tool("get_past_orders")
        .expect("tool should be registered");
    let reply = tool.call(json!({})).await.expect("call should succeed");

    // The reply is the backend list serialized verbatim.
    let orders: Vec<Order> = serde_json::from_str(&reply).unwrap();
    assert_eq!(orders, MockOrdersApi::default().past_orders());
}

#[tokio::test]
async fn refund_forwards_and_returns_the_backend_reply() {
    let api = Arc::new(MockOrdersApi::default());
    let agent =
        starting_agent().with_tool(AgentTool::function(SubmitRefundRequestTool::new(api.clone())));

    let tool = agent
        .find_tool("submit_refund_request")
        .expect("tool should be registered");
    let reply = tool
        .call(json!({ "order_number": "ORD-1001" }))
        .await
        .expect("call should succeed");

    assert_eq!(reply, api.submit_refund_request("ORD-1001"));
    assert!(reply.contains("ORD-1001"));
}

#[tokio::test]
async fn refund_rejects_malformed_arguments() {
    let tool = SubmitRefundRequestTool::default();

    for arguments in [json!({}), json!({ "order_number": 12 }), json!(null)] {
        let result = tool.call(arguments).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}

#[test]
fn function_tool_specs_carry_their_schemas() {
    let agent = starting_agent()
        .with_tool(AgentTool::function(GetPastOrdersTool::default()))
        .with_tool(AgentTool::function(SubmitRefundRequestTool::default()));

    let specs = agent.tool_specs();
    assert_eq!(specs.len(), 2);

    match &specs[1] {
        ToolSpec::Function {
            name,
            description,
            parameters,
        } => {
            assert_eq!(name, "submit_refund_request");
            assert_eq!(description, "Confirm with the user first");
            assert_eq!(parameters["required"][0], "order_number");
        }
        other => panic!("expected a function spec, got {other:?}"),
    }
}

#[test]
fn web_search_spec_serializes_with_location() {
    let tool =
        WebSearchTool::new().with_user_location(palaver_types::UserLocation::approximate("Tokyo"));

    let value = serde_json::to_value(tool.spec()).unwrap();
    assert_eq!(value["type"], "web_search");
    assert_eq!(value["user_location"]["type"], "approximate");
    assert_eq!(value["user_location"]["city"], "Tokyo");
}
