//! # Snippets - named text snippets in a SQLite table
//!
//! Snippets provides:
//! - A store facade mapping put/get/catalog/contains onto one `snippets` table
//! - Insert-or-update semantics keyed on the snippet name
//! - Hidden snippets, excluded from listings but fetchable by name
//! - Typed, validated requests for each CLI command

pub mod snippet;
pub mod request;
pub mod storage;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use snippet::{Snippet, resolve_hidden};
pub use request::{GetRequest, PutRequest, SearchRequest};
pub use storage::SqliteStore;

/// Result type alias for snippet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for snippet operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidRequest(_) => 2,
            Error::Storage(_) => 3,
            Error::Io(_) | Error::Config(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_have_distinct_exit_code() {
        let err = Error::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.exit_code(), 3);
        assert_eq!(Error::InvalidRequest("x".into()).exit_code(), 2);
        assert_eq!(Error::Config("x".into()).exit_code(), 1);
    }
}
