use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("step {step}: expected {expected}, got {got}")]
    Mismatch {
        step: usize,
        expected: String,
        got: String,
    },
}
