use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("history read failed: {0}")]
    PersistenceRead(String),

    #[error("history write failed: {0}")]
    PersistenceWrite(String),

    #[error("application parse error: {0}")]
    ApplicationParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
