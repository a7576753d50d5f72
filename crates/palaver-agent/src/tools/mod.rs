//! Tool implementations available to the assistant.
//!
//! None of these are registered on the default descriptor; they are the
//! assistant's dormant extension points. Registering one with
//! [`Agent::with_tool`](crate::agent::Agent::with_tool) adds exactly one
//! entry to the tool list.

pub mod past_orders;
pub mod refund;
pub mod web_search;

pub use past_orders::GetPastOrdersTool;
pub use refund::SubmitRefundRequestTool;
pub use web_search::WebSearchTool;
