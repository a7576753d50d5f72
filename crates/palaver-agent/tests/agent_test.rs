use palaver_agent::{
    starting_agent, Agent, AgentSettings, AgentTool, GetPastOrdersTool, SubmitRefundRequestTool,
    WebSearchTool, AGENT_INSTRUCTIONS, AGENT_MODEL, AGENT_NAME, STYLE_INSTRUCTIONS,
};
use palaver_types::{ToolSpec, UserLocation};

#[test]
fn starting_agent_is_the_shipped_configuration() {
    let agent = starting_agent();

    assert_eq!(agent.name, "Chat Assistant");
    assert_eq!(agent.model, "gpt-4o-mini");
    assert_eq!(agent.name, AGENT_NAME);
    assert_eq!(agent.model, AGENT_MODEL);
}

#[test]
fn instructions_are_persona_then_style_with_one_space() {
    let agent = starting_agent();

    assert_eq!(
        agent.instructions,
        format!("{} {}", AGENT_INSTRUCTIONS, STYLE_INSTRUCTIONS)
    );
    assert!(agent.instructions.starts_with(AGENT_INSTRUCTIONS));
    assert!(agent.instructions.ends_with(STYLE_INSTRUCTIONS));
}

#[test]
fn default_tool_list_is_empty() {
    let agent = starting_agent();

    assert!(agent.tools.is_empty());
    assert!(agent.tool_specs().is_empty());
    assert!(agent.find_tool("get_past_orders").is_none());
    assert!(agent.find_tool("submit_refund_request").is_none());
}

#[test]
fn registering_a_tool_adds_exactly_one_entry() {
    let agent = starting_agent();
    assert_eq!(agent.tools.len(), 0);

    let agent = agent.with_tool(AgentTool::function(GetPastOrdersTool::default()));
    assert_eq!(agent.tools.len(), 1);

    let agent = agent.with_tool(AgentTool::function(SubmitRefundRequestTool::default()));
    assert_eq!(agent.tools.len(), 2);

    let agent = agent.with_tool(WebSearchTool::new());
    assert_eq!(agent.tools.len(), 3);
}

#[test]
fn tool_specs_preserve_registration_order() {
    let agent = starting_agent()
        .with_tool(AgentTool::function(SubmitRefundRequestTool::default()))
        .with_tool(WebSearchTool::new().with_user_location(UserLocation::approximate("Tokyo")))
        .with_tool(AgentTool::function(GetPastOrdersTool::default()));

    let specs = agent.tool_specs();
    let names: Vec<&str> = specs.iter().map(ToolSpec::name).collect();
    assert_eq!(
        names,
        vec!["submit_refund_request", "web_search", "get_past_orders"]
    );
}

#[test]
fn find_tool_skips_hosted_entries() {
    let agent = starting_agent()
        .with_tool(WebSearchTool::new())
        .with_tool(AgentTool::function(GetPastOrdersTool::default()));

    // Hosted web search has no local callable.
    assert!(agent.find_tool("web_search").is_none());
    assert!(agent.find_tool("get_past_orders").is_some());
}

#[test]
fn custom_persona_flows_through_unchanged() {
    let settings = AgentSettings {
        name: "Support Desk".to_string(),
        model: "gpt-4o".to_string(),
        instructions: "Answer support questions.".to_string(),
        style_instructions: "Stay formal.".to_string(),
    };

    let agent = Agent::from_settings(&settings);
    assert_eq!(agent.name, "Support Desk");
    assert_eq!(agent.model, "gpt-4o");
    assert_eq!(agent.instructions, "Answer support questions. Stay formal.");
    assert!(agent.tools.is_empty());
}
