use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Report rendering failed: {message}")]
    ReportError { message: String },

    #[error("the catalog is empty, add at least one wine before ordering")]
    EmptyCatalog,

    #[error("unknown wine: {name}")]
    UnknownWine { name: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
