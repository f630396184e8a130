use thiserror::Error;

#[derive(Error, Debug)]
pub enum AquaplanError {
    #[error("field {field_id}: {attribute} is {value}, expected a value in [0, 1]")]
    InvalidScoreRange {
        field_id: String,
        attribute: &'static str,
        value: f64,
    },

    #[error("Invalid weight configuration: {0}")]
    InvalidWeightConfiguration(String),

    #[error("Invalid allocation input: {0}")]
    InvalidAllocationInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AquaplanError>;
