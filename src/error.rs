use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkerError {
    #[error("Tag model error: {0}")]
    Model(String),

    #[error("Ingestion error: {0}")]
    Ingestion(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, LinkerError>;
