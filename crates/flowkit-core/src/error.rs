use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    #[error("Flow initialization failed: {0}")]
    Initialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone)]
pub enum NodeError {
    #[error("Missing required key: {0}")]
    MissingKey(String),

    #[error("Invalid kind for '{key}': expected {expected}, got {actual}")]
    InvalidKind {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("{0}")]
    ExecutionFailed(String),

    #[error("Cancelled")]
    Cancelled,
}
