use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// Model and field names end up as exported constants, property keys
    /// and directory names, so they must be plain identifiers.
    #[error("{kind} name {name:?} is not a valid identifier")]
    InvalidIdentifier { kind: &'static str, name: String },
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = CodegenError::io(
            "out/User/type.ts",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "i/o error on out/User/type.ts: denied");
    }

    #[test]
    fn invalid_identifier_message() {
        let err = CodegenError::InvalidIdentifier {
            kind: "model",
            name: "Bad Name".into(),
        };
        assert_eq!(
            err.to_string(),
            "model name \"Bad Name\" is not a valid identifier"
        );
    }
}
