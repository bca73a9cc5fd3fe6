use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("{0}")]
    BadFormat(String),

    #[error("Invalid pod path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PodError>;
