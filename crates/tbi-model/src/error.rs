use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown canonical field key: {0}")]
    UnknownFieldKey(String),
    #[error("percentile out of range (0-100): {0}")]
    PercentileOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
