use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
