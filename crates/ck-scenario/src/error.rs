use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("customer {customer} bought unknown product {code:?}")]
    UnknownProduct { customer: usize, code: String },

    #[error("scenario configuration error: {0}")]
    Config(String),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
