use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitlogError>;

#[derive(Error, Debug)]
pub enum GitlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git error: {0}")]
    Git(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid output encoding: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
