//! Error types for cloudctl

use thiserror::Error;

/// Result type alias using the cloudctl Error
pub type Result<T> = std::result::Result<T, Error>;

/// cloudctl error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML encode error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{kind} with name or UUID '{id}' not found")]
    NotFound { kind: String, id: String },

    #[error("Invalid query condition: {0}")]
    InvalidQuery(String),

    #[error("Unsupported inventory format: {0} (must be .yaml, .yml, or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::not_found("zone", "zone-a");
        assert_eq!(err.to_string(), "zone with name or UUID 'zone-a' not found");
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = Error::UnsupportedFormat(".txt".into());
        assert!(err.to_string().contains(".txt"));
    }
}
