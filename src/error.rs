#[derive(Debug, thiserror::Error)]
pub enum ContrastError {
    #[error("unparseable color: {0:?}")]
    UnparseableColor(String),

    #[error("unknown conformance level: {0:?} (expected \"AA\" or \"AAA\")")]
    UnknownLevel(String),

    #[error("invalid audit options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
