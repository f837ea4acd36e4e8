use crate::document::Role;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigdocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid regex pattern: {0}")]
    Regex(String),

    #[error("Invalid selector for {role}: {message}")]
    Selector { role: String, message: String },

    #[error("Table not found: {table}")]
    TableNotFound { table: String },

    #[error("Missing {role} element in {entity}")]
    MissingElement { role: Role, entity: String },

    #[error("Network error: {0}")]
    Network(String),
}

impl From<regex::Error> for FigdocError {
    fn from(err: regex::Error) -> Self {
        FigdocError::Regex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FigdocError>;

impl FigdocError {
    pub fn config(message: impl Into<String>) -> Self {
        FigdocError::Config(message.into())
    }

    pub fn selector(role: impl Into<String>, message: impl Into<String>) -> Self {
        FigdocError::Selector {
            role: role.into(),
            message: message.into(),
        }
    }

    pub fn table_not_found(table: impl Into<String>) -> Self {
        FigdocError::TableNotFound {
            table: table.into(),
        }
    }

    pub fn missing_element(role: Role, entity: impl Into<String>) -> Self {
        FigdocError::MissingElement {
            role,
            entity: entity.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        FigdocError::Network(message.into())
    }
}
