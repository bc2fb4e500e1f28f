use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Time parse error for '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("Benchmark table construction failed: {message}")]
    ConstructionError { message: String },

    #[error("Lookup failed: {message}")]
    LookupError { message: String },

    #[error("Record store error: {message}")]
    StoreError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
